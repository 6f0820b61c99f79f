//! 8-tile sliding puzzle domain: board representation and manual entry.

pub mod board;
pub mod entry;

pub use board::{Board, CELL_COUNT, DEFAULT_SCRAMBLE_WALK, Direction, SIDE};
pub use entry::BoardEntry;
