//! Interactive play session over a single board.

use crate::puzzle::Board;

/// Result of one accepted manual move.
#[derive(Debug, Clone, Copy)]
pub struct MoveOutcome {
    /// The board after the slide.
    pub board: Board,
    /// Index the blank occupied before the move; the moved tile now sits
    /// there, and the tile's former cell is the new blank.
    pub prior_blank: usize,
    /// Move counter after this move.
    pub move_number: u32,
    /// True if the slide reached the goal configuration.
    pub solved: bool,
}

/// Explicit session state for a manual game.
///
/// Holds the current board and a move counter, replacing the ambient
/// mutable "current puzzle" a presentation layer would otherwise thread
/// through its own fields. The caller validates user-proposed moves through
/// [`try_move`] and checks the outcome's `solved` flag after each success.
///
/// [`try_move`]: Session::try_move
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    moves: u32,
}

impl Session {
    /// Start a session on the given board.
    pub fn new(board: Board) -> Self {
        Session { board, moves: 0 }
    }

    /// The current board.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Moves made so far.
    pub fn move_count(&self) -> u32 {
        self.moves
    }

    /// Heuristic value of the current board, for display.
    pub fn heuristic(&self) -> u32 {
        self.board.heuristic()
    }

    /// True once the session board is the goal.
    pub fn is_solved(&self) -> bool {
        self.board.is_goal()
    }

    /// Attempt to slide `tile` into the blank.
    ///
    /// On success the session advances to the new board and the move
    /// counter increments.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if the tile is not adjacent to
    /// the blank; the session is unchanged and the caller should re-prompt.
    pub fn try_move(&mut self, tile: u8) -> Result<MoveOutcome, crate::Error> {
        let (board, prior_blank) = self.board.slide(tile)?;
        self.board = board;
        self.moves += 1;
        Ok(MoveOutcome {
            board,
            prior_blank,
            move_number: self.moves,
            solved: board.is_goal(),
        })
    }
}
