//! CLI infrastructure for the tiles puzzle driver
//!
//! This module provides the command-line interface for solving, playing,
//! scrambling, and analyzing 8-tile puzzle boards.

pub mod commands;
pub mod output;
