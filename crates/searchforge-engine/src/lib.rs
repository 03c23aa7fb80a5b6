//! SearchForge Engine
//!
//! This crate provides the A* search driver:
//! - [`AstarEngine`] - the best-first expansion loop
//! - [`Frontier`] - min-f priority queue with deterministic tie-breaking
//! - [`SearchNode`] and [`SearchPath`] - node bookkeeping and returned paths
//! - [`SearchStatistics`] - per-run counters for monitoring

pub mod astar;
pub mod frontier;
pub mod node;
pub mod statistics;

pub use astar::AstarEngine;
pub use frontier::Frontier;
pub use node::{SearchNode, SearchPath};
pub use statistics::SearchStatistics;
