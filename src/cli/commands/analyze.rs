//! Analyze command - inspect a board without playback

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{print_board, print_kv, print_section},
    puzzle::Board,
    solver::{DEFAULT_NODE_BUDGET, Solver, SolverConfig},
};

#[derive(Parser, Debug)]
#[command(about = "Inspect a board: heuristic, parity, solvability")]
pub struct AnalyzeArgs {
    /// Board as 9 digits 0-8 (0 = blank), row-major
    pub board: String,

    /// Also search for a solution and report its length
    #[arg(long)]
    pub solve: bool,

    /// Maximum number of search nodes when --solve is given
    #[arg(long, default_value_t = DEFAULT_NODE_BUDGET)]
    pub budget: usize,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;

    print_section("Board analysis");
    print_board(&board);
    print_kv("Blank index", &board.blank_index().to_string());
    print_kv("Heuristic", &board.heuristic().to_string());
    print_kv("Inversions", &board.inversion_count().to_string());
    print_kv("Solvable", if board.is_solvable() { "yes" } else { "no" });
    print_kv("Goal", if board.is_goal() { "yes" } else { "no" });

    if args.solve {
        let config = SolverConfig::new().with_node_budget(args.budget);
        let solution = Solver::new(config).solve(board);
        if solution.is_solved() {
            print_kv("Solution moves", &solution.path_len().to_string());
        } else {
            print_kv("Solution", "none found within budget");
        }
        print_kv("Nodes created", &solution.nodes_created.to_string());
    }

    Ok(())
}
