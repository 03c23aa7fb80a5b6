//! Search statistics collection and reporting.
//!
//! Counters are reset at the start of each `search` call and are readable
//! afterwards regardless of the outcome (goal, exhaustion, or limit).

use std::time::Duration;

/// Counters for a single search run.
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Number of nodes popped and expanded (successors generated).
    pub nodes_expanded: u64,
    /// Number of nodes allocated, root included.
    pub nodes_generated: u64,
    /// Number of entries discarded as stale pops or dominated successors.
    pub duplicates_skipped: u64,
    /// Largest frontier length observed.
    pub peak_frontier_len: usize,
    /// Wall time spent inside `search`.
    pub duration: Duration,
}

impl SearchStatistics {
    /// Returns the expansion rate in nodes per second.
    pub fn expansion_rate(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.nodes_expanded as f64 / secs
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zeroed() {
        let stats = SearchStatistics::default();
        assert_eq!(stats.nodes_expanded, 0);
        assert_eq!(stats.nodes_generated, 0);
        assert_eq!(stats.duplicates_skipped, 0);
        assert_eq!(stats.peak_frontier_len, 0);
        assert_eq!(stats.duration, Duration::ZERO);
    }

    #[test]
    fn test_expansion_rate() {
        let stats = SearchStatistics {
            nodes_expanded: 500,
            duration: Duration::from_millis(250),
            ..Default::default()
        };
        assert!((stats.expansion_rate() - 2000.0).abs() < f64::EPSILON);

        let idle = SearchStatistics::default();
        assert_eq!(idle.expansion_rate(), 0.0);
    }
}
