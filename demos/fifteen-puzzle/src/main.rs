//! 15-Puzzle Example
//!
//! Solves the classic 4x4 sliding-tile puzzle with A* and a
//! Manhattan-distance heuristic, then solves a seeded random scramble.
//!
//! Run with `RUST_LOG=searchforge_engine=debug` to watch search progress.

use searchforge::prelude::*;
use searchforge_problems::FifteenPuzzle;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("SearchForge 15-Puzzle Example");
    println!("=============================\n");

    // A near-solved reference board: two tiles away from home.
    let input = "1  2  3  4\n5  6  7  8\n9 10  0 11\n13 14 15 12";
    let root: FifteenPuzzle = match input.parse() {
        Ok(board) => board,
        Err(err) => {
            eprintln!("invalid board: {err}");
            std::process::exit(1);
        }
    };

    println!("Initial configuration:");
    println!("{root}");

    let mut engine = AstarEngine::new();
    match engine.search(root) {
        Ok(path) => {
            println!("Solved in {} moves:\n", path.moves());
            for node in &path {
                println!("{node}");
            }
            report(engine.statistics());
        }
        Err(err) => println!("No solution: {err}"),
    }

    println!("\n--- Solving a random scramble ---\n");

    // A seeded 25-move walk from the goal; the same seed always produces
    // the same board.
    let scrambled = FifteenPuzzle::scrambled(25, 2024);
    println!("Scrambled configuration (solvable: {}):", scrambled.is_solvable());
    println!("{scrambled}");

    // Limits come from search.toml when present; unlimited otherwise.
    let config = SearchConfig::load("search.toml").unwrap_or_default();
    let mut engine = AstarEngine::with_config(config);
    match engine.search(scrambled) {
        Ok(path) => {
            println!(
                "Solved in {} moves (scramble walk was 25 moves).",
                path.moves()
            );
            report(engine.statistics());
        }
        Err(err) => println!("No solution: {err}"),
    }
}

fn report(stats: &SearchStatistics) {
    println!(
        "Expanded {} nodes ({} generated, {} duplicates skipped) in {:?}; peak frontier {}.",
        stats.nodes_expanded,
        stats.nodes_generated,
        stats.duplicates_skipped,
        stats.duration,
        stats.peak_frontier_len,
    );
}
