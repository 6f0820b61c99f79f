//! Export of solve results for analysis
//!
//! Writes the per-step solution path as CSV and the solve summary as JSON.

use std::{fs::File, io::Write, path::Path};

use serde::Serialize;

use crate::{Result, puzzle::Board};

/// A single row in the solution-path CSV export.
///
/// Step 0 is the initial board; each following step is the board after one
/// move, matching what a stepped playback displays.
#[derive(Debug, Clone, Serialize)]
pub struct PathRecord {
    pub step: usize,
    pub board: String,
    pub heuristic: u32,
    pub blank_index: usize,
}

impl PathRecord {
    fn new(step: usize, board: &Board) -> Self {
        Self {
            step,
            board: board.encode(),
            heuristic: board.heuristic(),
            blank_index: board.blank_index(),
        }
    }
}

/// Write the solution path as CSV, one record per playback step.
///
/// `initial` becomes step 0 so the file replays the whole animation.
pub fn write_path_csv<W: Write>(writer: W, initial: &Board, path: &[Board]) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.serialize(PathRecord::new(0, initial))?;
    for (index, board) in path.iter().enumerate() {
        csv_writer.serialize(PathRecord::new(index + 1, board))?;
    }
    csv_writer.flush().map_err(|source| crate::Error::Io {
        operation: "flush CSV export".to_string(),
        source,
    })?;

    Ok(path.len() + 1)
}

/// Write the solution path as CSV to a file path.
pub fn export_path_csv(path_file: &Path, initial: &Board, path: &[Board]) -> Result<usize> {
    let file = File::create(path_file).map_err(|source| crate::Error::Io {
        operation: format!("create '{}'", path_file.display()),
        source,
    })?;
    write_path_csv(file, initial, path)
}

/// Write any serializable summary as pretty JSON to a file path.
pub fn export_json_summary<T: Serialize>(path_file: &Path, summary: &T) -> Result<()> {
    let file = File::create(path_file).map_err(|source| crate::Error::Io {
        operation: format!("create '{}'", path_file.display()),
        source,
    })?;
    serde_json::to_writer_pretty(file, summary)?;
    Ok(())
}
