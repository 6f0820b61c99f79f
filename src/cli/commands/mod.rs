//! CLI command implementations

pub mod analyze;
pub mod play;
pub mod scramble;
pub mod solve;

use anyhow::{Result, bail};
use rand::{SeedableRng, rngs::StdRng};

use crate::puzzle::Board;

/// Resolve the board a command operates on: an explicit 9-digit literal, or
/// a seeded scramble when `--random` is given.
///
/// Returns the board together with the seed that produced it (None for
/// literal boards), so commands can report how to reproduce a scramble.
pub(crate) fn resolve_board(
    literal: Option<&str>,
    random: bool,
    seed: Option<u64>,
    walk: usize,
) -> Result<(Board, Option<u64>)> {
    if let Some(config) = literal {
        return Ok((Board::from_string(config)?, None));
    }
    if !random {
        bail!("no board given: pass --board <digits> or --random");
    }

    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    Ok((Board::scrambled(walk, &mut rng), Some(seed)))
}
