//! tiles CLI - solver and interactive driver for the 8-tile sliding puzzle
//!
//! This CLI provides a unified interface for:
//! - Solving boards and replaying the solution step by step
//! - Playing boards interactively, including manual layout
//! - Generating reproducible random scrambles
//! - Analyzing boards (heuristic, parity, solvability)

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tiles")]
#[command(version, about = "Solver and interactive driver for the 8-tile sliding puzzle", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a board and replay the solution step by step
    Solve(tiles::cli::commands::solve::SolveArgs),

    /// Play a board interactively
    Play(tiles::cli::commands::play::PlayArgs),

    /// Generate random solvable boards
    Scramble(tiles::cli::commands::scramble::ScrambleArgs),

    /// Inspect a board without playback
    Analyze(tiles::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => tiles::cli::commands::solve::execute(args),
        Commands::Play(args) => tiles::cli::commands::play::execute(args),
        Commands::Scramble(args) => tiles::cli::commands::scramble::execute(args),
        Commands::Analyze(args) => tiles::cli::commands::analyze::execute(args),
    }
}
