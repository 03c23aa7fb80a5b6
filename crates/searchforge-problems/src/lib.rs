//! Problem encodings for SearchForge
//!
//! Two combinatorial puzzles implementing the [`searchforge_core::SearchState`]
//! contract:
//! - [`FifteenPuzzle`] - the 4x4 sliding-tile puzzle with a Manhattan-distance
//!   heuristic
//! - [`SuperqueensBoard`] - column-by-column queen placement where queens also
//!   attack with knight-like moves

pub mod fifteen;
pub mod superqueens;

pub use fifteen::FifteenPuzzle;
pub use superqueens::{Placement, PlacementList, SuperqueensBoard};
