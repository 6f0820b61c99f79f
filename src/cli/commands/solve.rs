//! Solve command - search a board and replay the solution step by step

use std::{
    path::PathBuf,
    thread,
    time::{Duration, Instant},
};

use anyhow::{Result, anyhow};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{create_search_spinner, print_board, print_kv, print_section},
    export::{export_json_summary, export_path_csv},
    puzzle::{Board, DEFAULT_SCRAMBLE_WALK},
    solver::{DEFAULT_NODE_BUDGET, Outcome, Solver, SolverConfig},
};

#[derive(Parser, Debug)]
#[command(about = "Solve a board and replay the solution")]
pub struct SolveArgs {
    /// Board as 9 digits 0-8 (0 = blank), row-major
    #[arg(long, short = 'b', conflicts_with = "random")]
    pub board: Option<String>,

    /// Scramble a random solvable board instead of reading one
    #[arg(long)]
    pub random: bool,

    /// Random seed for reproducible scrambles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of random-walk moves used to scramble
    #[arg(long, default_value_t = DEFAULT_SCRAMBLE_WALK)]
    pub walk: usize,

    /// Maximum number of search nodes before giving up
    #[arg(long, default_value_t = DEFAULT_NODE_BUDGET)]
    pub budget: usize,

    /// Delay between playback steps in milliseconds
    #[arg(long, default_value_t = 300)]
    pub delay_ms: u64,

    /// Print only the outcome, without the stepped playback
    #[arg(long)]
    pub no_playback: bool,

    /// Output file for a JSON solve summary
    #[arg(long, short = 'O')]
    pub output: Option<PathBuf>,

    /// Output file for the per-step solution path as CSV
    #[arg(long)]
    pub export_csv: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SolveSummary {
    board: String,
    seed: Option<u64>,
    solved: bool,
    path_len: usize,
    nodes_created: usize,
    node_budget: usize,
    elapsed_ms: u128,
    best_effort: Option<String>,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let (initial, seed) = super::resolve_board(args.board.as_deref(), args.random, args.seed, args.walk)?;

    print_section("Solve");
    print_board(&initial);
    print_kv("Heuristic", &initial.heuristic().to_string());
    if let Some(seed) = seed {
        print_kv("Seed", &seed.to_string());
    }

    // The search can be long-running on large budgets; run it on a worker
    // thread and keep the presentation thread free for the spinner.
    let config = SolverConfig::new().with_node_budget(args.budget);

    let spinner = create_search_spinner("searching");
    spinner.enable_steady_tick(Duration::from_millis(80));
    let start = Instant::now();
    let worker = thread::spawn(move || Solver::new(config).solve(initial));
    let mut solution = worker
        .join()
        .map_err(|_| anyhow!("search thread panicked"))?;
    let elapsed = start.elapsed();
    spinner.finish_and_clear();

    print_kv("Nodes created", &solution.nodes_created.to_string());
    print_kv("Elapsed", &format!("{} ms", elapsed.as_millis()));

    let best_effort = match &solution.outcome {
        Outcome::Unsolvable { best_effort } => Some(*best_effort),
        Outcome::Solved { .. } => None,
    };

    if let Some(best) = best_effort {
        println!("\nThis board is unsolvable; best board found:");
        print_board(&best);
        print_kv("Best heuristic", &best.heuristic().to_string());
    } else {
        let moves = solution.path_len();
        print_kv("Solution moves", &moves.to_string());
        if !args.no_playback {
            replay(&mut solution, Duration::from_millis(args.delay_ms))?;
        }
        println!("\nSolved in {moves} moves.");
    }

    if let Some(ref csv_path) = args.export_csv {
        if let Outcome::Solved { ref path } = solution.outcome {
            let rows = export_path_csv(csv_path, &initial, path)?;
            println!("Exported {} playback steps to {}", rows, csv_path.display());
        } else {
            println!("No solution path to export to {}", csv_path.display());
        }
    }

    if let Some(ref output) = args.output {
        let summary = build_summary(&initial, seed, &solution, args.budget, elapsed.as_millis());
        export_json_summary(output, &summary)?;
        println!("Summary written to {}", output.display());
    }

    Ok(())
}

/// Replay the solution one board per tick, the way an animated consumer
/// would: each step shows the move number, the board, and its heuristic.
fn replay(solution: &mut crate::solver::Solution, delay: Duration) -> Result<()> {
    let path_len = solution.tree.path_len();
    for step in 1..=path_len {
        let board = solution.tree.next_board()?;
        println!("\nMove {step}  heuristic {}", board.heuristic());
        print_board(&board);
        if step < path_len {
            thread::sleep(delay);
        }
    }
    Ok(())
}

fn build_summary(
    initial: &Board,
    seed: Option<u64>,
    solution: &crate::solver::Solution,
    node_budget: usize,
    elapsed_ms: u128,
) -> SolveSummary {
    let best_effort = match &solution.outcome {
        Outcome::Unsolvable { best_effort } => Some(best_effort.encode()),
        Outcome::Solved { .. } => None,
    };
    SolveSummary {
        board: initial.encode(),
        seed,
        solved: solution.is_solved(),
        path_len: solution.path_len(),
        nodes_created: solution.nodes_created,
        node_budget,
        elapsed_ms,
        best_effort,
    }
}
