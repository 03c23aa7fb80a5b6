//! The A* search driver.
//!
//! Logging levels:
//! - **INFO**: search start/end with outcome and scale
//! - **DEBUG**: periodic progress (every 100k expansions)
//! - **TRACE**: individual node expansions

use std::collections::HashMap;
use std::marker::PhantomData;
use std::time::Instant;

use searchforge_config::SearchConfig;
use searchforge_core::{Result, SearchForgeError, SearchState};
use tracing::{debug, info, trace};

use crate::frontier::Frontier;
use crate::node::{SearchNode, SearchPath};
use crate::statistics::SearchStatistics;

/// Best-first search engine, generic over the search-state contract.
///
/// The engine owns its configuration and the statistics of the most recent
/// run. Each [`search`](AstarEngine::search) call owns its frontier, node
/// arena and visited map exclusively; nothing is shared across runs.
///
/// # Optimality
///
/// Given an admissible, non-negative heuristic, the first goal popped from
/// the frontier has minimum accumulated cost among all goals reachable
/// from the root.
///
/// # Example
///
/// ```
/// use std::fmt;
/// use searchforge_core::{SearchState, Successor};
/// use searchforge_engine::AstarEngine;
///
/// /// Doubles or increments a number until it hits a target.
/// #[derive(Clone, Debug)]
/// struct Reach {
///     value: u32,
///     target: u32,
/// }
///
/// impl fmt::Display for Reach {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}", self.value)
///     }
/// }
///
/// impl SearchState for Reach {
///     type Key = u32;
///     type Cost = u32;
///
///     fn successors(&self) -> Vec<Successor<Self>> {
///         [self.value + 1, self.value * 2]
///             .into_iter()
///             .filter(|&v| v <= self.target)
///             .map(|v| Successor::new(Reach { value: v, ..*self }, 1))
///             .collect()
///     }
///
///     fn is_goal(&self) -> bool {
///         self.value == self.target
///     }
///
///     fn heuristic(&self) -> u32 {
///         u32::from(self.value != self.target)
///     }
///
///     fn key(&self) -> u32 {
///         self.value
///     }
/// }
///
/// let mut engine = AstarEngine::new();
/// let path = engine.search(Reach { value: 1, target: 10 }).unwrap();
/// assert_eq!(path.goal().state().value, 10);
/// assert_eq!(path.total_cost(), 4); // 1 -> 2 -> 4 -> 5 -> 10
/// ```
pub struct AstarEngine<S: SearchState> {
    config: SearchConfig,
    statistics: SearchStatistics,
    _phantom: PhantomData<fn(S)>,
}

impl<S: SearchState> Default for AstarEngine<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SearchState> AstarEngine<S> {
    /// Creates an engine with default (unlimited) configuration.
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Creates an engine with the given configuration.
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            statistics: SearchStatistics::default(),
            _phantom: PhantomData,
        }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the statistics of the most recent `search` call.
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Runs best-first search from `root` until a goal is popped or the
    /// frontier is exhausted.
    ///
    /// Returns the root-to-goal path on success. Exhaustion and the
    /// configured node limit are reported as errors but are ordinary
    /// terminal outcomes, not control flow inside the loop.
    pub fn search(&mut self, root: S) -> Result<SearchPath<S>> {
        let started = Instant::now();
        self.statistics = SearchStatistics::default();

        let node_limit = self.config.node_limit();
        let depth_limit = self.config.depth_limit();

        let mut arena: Vec<SearchNode<S>> = Vec::new();
        let mut frontier: Frontier<S::Cost> = Frontier::new();
        let mut visited: HashMap<S::Key, S::Cost> = HashMap::new();

        let root_node = SearchNode::root(root);
        info!(
            event = "search_start",
            root_f = %root_node.f(),
            node_limit = ?node_limit,
            depth_limit = ?depth_limit,
        );
        frontier.push(root_node.f(), 0);
        arena.push(root_node);
        self.statistics.nodes_generated = 1;

        let mut expanded: u64 = 0;

        while let Some(index) = frontier.pop() {
            let (key, g, depth) = {
                let node = &arena[index];
                (node.state().key(), node.g(), node.depth())
            };

            // Stale entry: this key was already settled at an equal or
            // better cost by an earlier pop.
            if visited.get(&key).is_some_and(|&best| best <= g) {
                self.statistics.duplicates_skipped += 1;
                continue;
            }
            visited.insert(key, g);

            if arena[index].is_goal() {
                let path = reconstruct(&arena, index);
                self.finish(expanded, frontier.peak_len(), started);
                info!(
                    event = "search_end",
                    outcome = "goal",
                    expanded,
                    generated = self.statistics.nodes_generated,
                    path_len = path.len(),
                    total_cost = %path.total_cost(),
                );
                return Ok(path);
            }

            if let Some(limit) = node_limit {
                if expanded >= limit {
                    self.finish(expanded, frontier.peak_len(), started);
                    info!(event = "search_end", outcome = "node_limit", expanded);
                    return Err(SearchForgeError::NodeLimitReached { limit, expanded });
                }
            }

            if depth_limit.is_some_and(|limit| depth >= limit) {
                continue;
            }

            expanded += 1;
            trace!(index, depth, g = %g, "expanding");
            if expanded % 100_000 == 0 {
                debug!(
                    event = "search_progress",
                    expanded,
                    frontier_len = frontier.len(),
                    visited = visited.len(),
                );
            }

            let successors = arena[index].state().successors();
            for successor in successors {
                let child_g = g + successor.step_cost;
                // Dominated successor: already reachable at least as
                // cheaply. Strictly better costs re-enter the frontier.
                if visited
                    .get(&successor.state.key())
                    .is_some_and(|&best| best <= child_g)
                {
                    self.statistics.duplicates_skipped += 1;
                    continue;
                }
                let child = SearchNode::child(successor.state, index, depth + 1, child_g);
                let child_index = arena.len();
                frontier.push(child.f(), child_index);
                arena.push(child);
                self.statistics.nodes_generated += 1;
            }
        }

        self.finish(expanded, frontier.peak_len(), started);
        info!(event = "search_end", outcome = "exhausted", expanded);
        Err(SearchForgeError::Exhausted { expanded })
    }

    fn finish(&mut self, expanded: u64, peak_frontier_len: usize, started: Instant) {
        self.statistics.nodes_expanded = expanded;
        self.statistics.peak_frontier_len = peak_frontier_len;
        self.statistics.duration = started.elapsed();
    }
}

/// Walks parent indices from the goal back to the root and returns the
/// nodes in root-to-goal order.
fn reconstruct<S: SearchState>(arena: &[SearchNode<S>], goal: usize) -> SearchPath<S> {
    let mut indices = Vec::new();
    let mut current = Some(goal);
    while let Some(index) = current {
        indices.push(index);
        current = arena[index].parent();
    }
    indices.reverse();
    SearchPath::from_nodes(indices.into_iter().map(|i| arena[i].clone()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchforge_core::Successor;
    use std::fmt;

    /// A rectangular maze over a static character map.
    ///
    /// `#` blocks a cell, `G` marks the goal, anything else is open.
    #[derive(Clone, Debug)]
    struct Maze {
        map: &'static [&'static str],
        row: usize,
        col: usize,
    }

    impl Maze {
        fn new(map: &'static [&'static str], row: usize, col: usize) -> Self {
            Self { map, row, col }
        }

        fn cell(&self, row: usize, col: usize) -> u8 {
            self.map[row].as_bytes()[col]
        }

        fn goal_pos(&self) -> (usize, usize) {
            for (r, line) in self.map.iter().enumerate() {
                if let Some(c) = line.bytes().position(|b| b == b'G') {
                    return (r, c);
                }
            }
            unreachable!("maze has no goal cell");
        }
    }

    impl fmt::Display for Maze {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "({}, {})", self.row, self.col)
        }
    }

    impl SearchState for Maze {
        type Key = (usize, usize);
        type Cost = u32;

        fn successors(&self) -> Vec<Successor<Self>> {
            let (rows, cols) = (self.map.len() as isize, self.map[0].len() as isize);
            let mut children = Vec::new();
            for (dr, dc) in [(0, -1), (0, 1), (-1, 0), (1, 0)] {
                let (r, c) = (self.row as isize + dr, self.col as isize + dc);
                if r < 0 || r >= rows || c < 0 || c >= cols {
                    continue;
                }
                let (r, c) = (r as usize, c as usize);
                if self.cell(r, c) == b'#' {
                    continue;
                }
                let next = Maze {
                    row: r,
                    col: c,
                    ..*self
                };
                children.push(Successor::new(next, 1));
            }
            children
        }

        fn is_goal(&self) -> bool {
            self.cell(self.row, self.col) == b'G'
        }

        fn heuristic(&self) -> u32 {
            let (gr, gc) = self.goal_pos();
            (self.row.abs_diff(gr) + self.col.abs_diff(gc)) as u32
        }

        fn key(&self) -> (usize, usize) {
            (self.row, self.col)
        }
    }

    #[test]
    fn test_finds_shortest_path_around_wall() {
        // Direct distance is 2, but the wall forces a 4-move detour.
        let map: &[&str] = &[
            ".G...", //
            ".###.", //
            ".....", //
        ];
        let mut engine = AstarEngine::new();
        let path = engine.search(Maze::new(map, 2, 1)).unwrap();

        assert_eq!(path.moves(), 4);
        assert_eq!(path.total_cost(), 4);
        assert!(path.goal().is_goal());
        assert_eq!(path.root().state().key(), (2, 1));
    }

    #[test]
    fn test_root_already_goal() {
        let map: &[&str] = &["G."];
        let mut engine = AstarEngine::new();
        let path = engine.search(Maze::new(map, 0, 0)).unwrap();

        assert_eq!(path.len(), 1);
        assert_eq!(path.moves(), 0);
        assert_eq!(path.total_cost(), 0);
    }

    #[test]
    fn test_unreachable_goal_exhausts() {
        let map: &[&str] = &[
            "..#G", //
            "..#.", //
        ];
        let mut engine = AstarEngine::new();
        let result = engine.search(Maze::new(map, 0, 0));

        match result {
            Err(SearchForgeError::Exhausted { expanded }) => assert_eq!(expanded, 4),
            other => panic!("expected exhaustion, got {other:?}"),
        }
    }

    #[test]
    fn test_node_limit_reached() {
        let map: &[&str] = &[
            "......", //
            ".....G", //
        ];
        let config = SearchConfig::new().with_node_limit(2);
        let mut engine = AstarEngine::with_config(config);
        let result = engine.search(Maze::new(map, 0, 0));

        assert!(matches!(
            result,
            Err(SearchForgeError::NodeLimitReached {
                limit: 2,
                expanded: 2
            })
        ));
    }

    #[test]
    fn test_depth_limit_suppresses_expansion() {
        let map: &[&str] = &["...G"];
        let config = SearchConfig::new().with_depth_limit(2);
        let mut engine = AstarEngine::with_config(config);
        let result = engine.search(Maze::new(map, 0, 0));

        assert!(matches!(result, Err(SearchForgeError::Exhausted { .. })));

        // The goal is within the limit when the start moves closer.
        let mut engine = AstarEngine::with_config(SearchConfig::new().with_depth_limit(2));
        let path = engine.search(Maze::new(map, 0, 1)).unwrap();
        assert_eq!(path.moves(), 2);
    }

    #[test]
    fn test_duplicate_states_are_collapsed() {
        // An open room has many routes to every cell; the visited map must
        // keep expansions bounded by the cell count.
        let map: &[&str] = &[
            ".....", //
            ".....", //
            "....G", //
        ];
        let mut engine = AstarEngine::new();
        let path = engine.search(Maze::new(map, 0, 0)).unwrap();

        assert_eq!(path.moves(), 6);
        let stats = engine.statistics();
        assert!(stats.nodes_expanded <= 15);
        assert!(stats.duplicates_skipped > 0);
    }

    #[test]
    fn test_statistics_populated() {
        let map: &[&str] = &[
            "....", //
            "...G", //
        ];
        let mut engine = AstarEngine::new();
        engine.search(Maze::new(map, 0, 0)).unwrap();

        let stats = engine.statistics();
        assert!(stats.nodes_expanded > 0);
        assert!(stats.nodes_generated > stats.nodes_expanded);
        assert!(stats.peak_frontier_len > 0);
    }

    /// Two goals at equal f: the first-emitted successor must win.
    #[derive(Clone, Debug, PartialEq)]
    enum Fork {
        Root,
        Left,
        Right,
    }

    impl fmt::Display for Fork {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{self:?}")
        }
    }

    impl SearchState for Fork {
        type Key = u8;
        type Cost = u32;

        fn successors(&self) -> Vec<Successor<Self>> {
            match self {
                Fork::Root => vec![
                    Successor::new(Fork::Left, 1),
                    Successor::new(Fork::Right, 1),
                ],
                _ => Vec::new(),
            }
        }

        fn is_goal(&self) -> bool {
            !matches!(self, Fork::Root)
        }

        fn heuristic(&self) -> u32 {
            0
        }

        fn key(&self) -> u8 {
            match self {
                Fork::Root => 0,
                Fork::Left => 1,
                Fork::Right => 2,
            }
        }
    }

    #[test]
    fn test_equal_f_ties_resolve_by_insertion_order() {
        for _ in 0..5 {
            let mut engine = AstarEngine::new();
            let path = engine.search(Fork::Root).unwrap();
            assert_eq!(*path.goal().state(), Fork::Left);
        }
    }
}
