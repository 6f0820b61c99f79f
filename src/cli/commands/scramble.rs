//! Scramble command - generate random solvable boards

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    cli::output::{print_board, print_kv, print_section},
    puzzle::{Board, DEFAULT_SCRAMBLE_WALK},
};

#[derive(Parser, Debug)]
#[command(about = "Generate random solvable boards")]
pub struct ScrambleArgs {
    /// Number of boards to generate
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,

    /// Number of random-walk moves per board
    #[arg(long, default_value_t = DEFAULT_SCRAMBLE_WALK)]
    pub walk: usize,

    /// Random seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: ScrambleArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    print_section("Scramble");
    print_kv("Seed", &seed.to_string());
    print_kv("Walk length", &args.walk.to_string());

    for index in 0..args.count {
        let board = Board::scrambled(args.walk, &mut rng);
        println!("\n#{}  {}", index + 1, board.encode());
        print_board(&board);
        print_kv("Heuristic", &board.heuristic().to_string());
    }

    Ok(())
}
