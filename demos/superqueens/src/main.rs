//! Superqueens Example
//!
//! Places n queens column by column where queens also attack like
//! knights, using uniform-cost search to find the minimum-conflict
//! complete placement.
//!
//! Run with `RUST_LOG=searchforge_engine=debug` to watch search progress.

use searchforge::prelude::*;
use searchforge_problems::SuperqueensBoard;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("SearchForge Superqueens Example");
    println!("===============================\n");

    for n in [7, 10] {
        println!("Placing {n} superqueens on a {n}x{n} board...\n");
        solve(n);
        println!();
    }
}

fn solve(n: usize) {
    let root = match SuperqueensBoard::new(n) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("invalid board size: {err}");
            std::process::exit(1);
        }
    };

    let mut engine = AstarEngine::new();
    match engine.search(root) {
        Ok(path) => {
            let goal = path.goal().state();
            println!("{goal}\n");

            let conflicts = path.total_cost();
            if conflicts == 0 {
                println!("Placement is conflict-free.");
            } else {
                println!("Best complete placement has {conflicts} conflicting pairs.");
            }
            println!("Queen positions (row, col):");
            for queen in goal.queens() {
                println!("  ({}, {})", queen.row, queen.col);
            }

            let stats = engine.statistics();
            println!(
                "Expanded {} nodes ({} generated) in {:?}; peak frontier {}.",
                stats.nodes_expanded,
                stats.nodes_generated,
                stats.duration,
                stats.peak_frontier_len,
            );
        }
        Err(err) => println!("No complete placement: {err}"),
    }
}
