//! Play command - drive a board interactively from the terminal

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    puzzle::{Board, BoardEntry, DEFAULT_SCRAMBLE_WALK},
    session::Session,
};

#[derive(Parser, Debug)]
#[command(about = "Play a board interactively")]
pub struct PlayArgs {
    /// Board as 9 digits 0-8 (0 = blank), row-major
    #[arg(long, short = 'b', conflicts_with_all = ["random", "choose"])]
    pub board: Option<String>,

    /// Scramble a random solvable board to play
    #[arg(long)]
    pub random: bool,

    /// Lay out the board cell by cell before playing
    #[arg(long, conflicts_with = "random")]
    pub choose: bool,

    /// Random seed for reproducible scrambles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of random-walk moves used to scramble
    #[arg(long, default_value_t = DEFAULT_SCRAMBLE_WALK)]
    pub walk: usize,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let board = if args.choose {
        enter_board(&mut input, &mut output)?
    } else {
        // Without an explicit source, play starts on a fresh scramble.
        let random = args.random || args.board.is_none();
        let (board, seed) =
            super::resolve_board(args.board.as_deref(), random, args.seed, args.walk)?;
        if let Some(seed) = seed {
            writeln!(output, "seed: {seed}")?;
        }
        board
    };

    run_session(Session::new(board), &mut input, &mut output)
}

/// Manual layout mode: the user supplies the value for each cell in
/// row-major order; duplicates are rejected and re-prompted.
fn enter_board<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Board> {
    let mut entry = BoardEntry::new();
    writeln!(
        output,
        "Lay out the board: enter a value 0-8 for each cell (0 = blank)."
    )?;

    while !entry.is_complete() {
        write!(output, "cell {}: ", entry.placed())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before the board was complete");
        }

        match line.trim().parse::<u8>() {
            Ok(value) if entry.place(value) => {}
            Ok(value) => writeln!(output, "{value} is already used or out of range; try again")?,
            Err(_) => writeln!(output, "enter a single digit 0-8")?,
        }
    }

    Ok(entry.finish()?)
}

fn run_session<R: BufRead, W: Write>(
    mut session: Session,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    loop {
        writeln!(output)?;
        writeln!(output, "{}", session.board())?;
        writeln!(
            output,
            "moves: {}  heuristic: {}",
            session.move_count(),
            session.heuristic()
        )?;

        if session.is_solved() {
            writeln!(output, "Solved!")?;
            return Ok(());
        }

        let legal = session
            .board()
            .legal_moves()
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(output, "slide tile ({legal}) or q to quit: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let token = line.trim();
        if token.eq_ignore_ascii_case("q") {
            return Ok(());
        }

        let Ok(tile) = token.parse::<u8>() else {
            writeln!(output, "enter a tile number or q")?;
            continue;
        };
        if let Err(e) = session.try_move(tile) {
            writeln!(output, "{e}")?;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_enter_board_reprompts_on_duplicates() {
        // Second "1" is rejected; entry continues with the remaining values.
        let mut input = Cursor::new("1\n1\n2\n3\n4\n5\n6\n7\n8\n0\n");
        let mut output = Vec::new();

        let board = enter_board(&mut input, &mut output).unwrap();
        assert_eq!(board.encode(), "123456780");

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("already used"));
    }

    #[test]
    fn test_enter_board_fails_on_closed_input() {
        let mut input = Cursor::new("1\n2\n");
        let mut output = Vec::new();
        assert!(enter_board(&mut input, &mut output).is_err());
    }

    #[test]
    fn test_session_loop_solves_one_move_board() {
        let board = Board::from_string("123456708").unwrap();
        let mut input = Cursor::new("8\n");
        let mut output = Vec::new();

        run_session(Session::new(board), &mut input, &mut output).unwrap();

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Solved!"));
        assert!(transcript.contains("moves: 1"));
    }

    #[test]
    fn test_session_loop_rejects_illegal_tile() {
        let board = Board::from_string("123456708").unwrap();
        let mut input = Cursor::new("1\n8\n");
        let mut output = Vec::new();

        run_session(Session::new(board), &mut input, &mut output).unwrap();

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("not adjacent"));
        assert!(transcript.contains("Solved!"));
    }
}
