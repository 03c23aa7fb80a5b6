//! SearchForge - A generic A* search engine in Rust
//!
//! Implement [`SearchState`] for your problem and hand a root state to
//! [`AstarEngine::search`]; you get back the cheapest root-to-goal path,
//! or an explicit exhaustion result if no goal is reachable.
//!
//! # Example
//!
//! ```
//! use searchforge::prelude::*;
//! use std::fmt;
//!
//! /// Hops along a number line toward zero.
//! #[derive(Clone, Debug)]
//! struct Countdown(u32);
//!
//! impl fmt::Display for Countdown {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "{}", self.0)
//!     }
//! }
//!
//! impl SearchState for Countdown {
//!     type Key = u32;
//!     type Cost = u32;
//!
//!     fn successors(&self) -> Vec<Successor<Self>> {
//!         [1, 2]
//!             .into_iter()
//!             .filter(|&hop| hop <= self.0)
//!             .map(|hop| Successor::new(Countdown(self.0 - hop), 1))
//!             .collect()
//!     }
//!
//!     fn is_goal(&self) -> bool {
//!         self.0 == 0
//!     }
//!
//!     fn heuristic(&self) -> u32 {
//!         self.0.div_ceil(2)
//!     }
//!
//!     fn key(&self) -> u32 {
//!         self.0
//!     }
//! }
//!
//! let mut engine = AstarEngine::new();
//! let path = engine.search(Countdown(7)).unwrap();
//! assert_eq!(path.total_cost(), 4);
//! ```

// Core contract
pub use searchforge_core::{Cost, Result, SearchForgeError, SearchState, Successor};

// Engine
pub use searchforge_engine::{AstarEngine, Frontier, SearchNode, SearchPath, SearchStatistics};

// Configuration
pub use searchforge_config::{ConfigError, LimitsConfig, SearchConfig};

pub mod prelude {
    pub use super::{
        AstarEngine, Result, SearchConfig, SearchForgeError, SearchNode, SearchPath, SearchState,
        SearchStatistics, Successor,
    };
}
