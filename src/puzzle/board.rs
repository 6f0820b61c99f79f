//! Board state representation and basic operations

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Side length of the square grid.
pub const SIDE: usize = 3;

/// Number of random-walk moves used when scrambling a board.
///
/// Walking from the goal keeps every scramble solvable by construction,
/// which a uniformly random permutation would not.
pub const DEFAULT_SCRAMBLE_WALK: usize = 40;

/// Position of a neighboring tile relative to the blank.
///
/// The variant order is the fixed move-generation order (up, down, left,
/// right). Successors are always produced in this order so that repeated
/// searches over identical input explore identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in generation order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Index of the cell in this direction from `index`, if it is on the grid.
    pub fn neighbor_of(self, index: usize) -> Option<usize> {
        match self {
            Direction::Up => index.checked_sub(SIDE),
            Direction::Down => (index + SIDE < CELL_COUNT).then_some(index + SIDE),
            Direction::Left => (index % SIDE > 0).then(|| index - 1),
            Direction::Right => (index % SIDE < SIDE - 1).then_some(index + 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{s}")
    }
}

/// One configuration of the 8-tile puzzle.
///
/// Cells hold the values 0-8 in row-major order, each exactly once, with 0
/// denoting the blank. The index of the blank is cached at construction.
/// Boards are immutable: [`slide`] returns a new board rather than mutating
/// in place.
///
/// This type implements `Copy` for efficiency since it's only 10 bytes
/// (9 cell bytes + 1 byte for the cached blank index).
///
/// [`slide`]: Board::slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; CELL_COUNT]", into = "[u8; CELL_COUNT]")]
pub struct Board {
    cells: [u8; CELL_COUNT],
    blank: u8,
}

impl Board {
    /// The solved configuration: tiles 1-8 in order with the blank last.
    pub fn goal() -> Self {
        Board {
            cells: [1, 2, 3, 4, 5, 6, 7, 8, 0],
            blank: 8,
        }
    }

    /// Create a board from 9 cell values in row-major order.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is outside 0-8 or a value repeats.
    pub fn from_cells(cells: [u8; CELL_COUNT]) -> Result<Self, crate::Error> {
        let context = || cells.iter().map(|c| c.to_string()).collect::<String>();

        let mut seen = [false; CELL_COUNT];
        for &value in &cells {
            if value as usize >= CELL_COUNT {
                return Err(crate::Error::InvalidConfiguration {
                    message: format!("cell value {} is out of range 0-8 in '{}'", value, context()),
                });
            }
            if seen[value as usize] {
                return Err(crate::Error::DuplicateTile {
                    tile: value,
                    context: context(),
                });
            }
            seen[value as usize] = true;
        }

        // 9 distinct values in 0..9 always include the blank.
        let blank = cells.iter().position(|&c| c == 0).expect("blank present") as u8;
        Ok(Board { cells, blank })
    }

    /// Create a board from a string of 9 digits (whitespace is filtered out).
    ///
    /// The digits are row-major, `0` is the blank. Each digit must appear
    /// exactly once.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - There are not exactly 9 non-whitespace characters
    /// - Any character is not a digit 0-8
    /// - Any digit repeats
    ///
    /// # Examples
    ///
    /// ```
    /// use tiles::puzzle::Board;
    ///
    /// let board = Board::from_string("123 456 780").unwrap();
    /// assert!(board.is_goal());
    /// ```
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [0u8; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            let digit = c
                .to_digit(10)
                .filter(|&d| d < CELL_COUNT as u32)
                .ok_or_else(|| crate::Error::InvalidCellSymbol {
                    symbol: c,
                    position: i,
                    context: s.to_string(),
                })?;
            cells[i] = digit as u8;
        }

        // Re-contextualize duplicate errors with the original input string.
        Self::from_cells(cells).map_err(|e| match e {
            crate::Error::DuplicateTile { tile, .. } => crate::Error::DuplicateTile {
                tile,
                context: s.to_string(),
            },
            other => other,
        })
    }

    /// Generate a solvable board by walking `walk` random legal moves from
    /// the goal configuration.
    ///
    /// The walk never undoes the move it just made, so short walks still
    /// leave the goal. The random source is injected so tests can reproduce
    /// specific scrambles.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use tiles::puzzle::{Board, DEFAULT_SCRAMBLE_WALK};
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let board = Board::scrambled(DEFAULT_SCRAMBLE_WALK, &mut rng);
    /// assert!(board.is_solvable());
    /// ```
    pub fn scrambled(walk: usize, rng: &mut impl Rng) -> Self {
        let mut board = Board::goal();
        let mut last_moved: Option<u8> = None;

        for _ in 0..walk {
            let moves: Vec<u8> = board
                .legal_moves()
                .into_iter()
                .filter(|&tile| Some(tile) != last_moved)
                .collect();
            let tile = moves[rng.random_range(0..moves.len())];
            let (next, _) = board.slide(tile).expect("legal move always slides");
            board = next;
            last_moved = Some(tile);
        }

        board
    }

    /// Get the cell value at a position (0-8).
    pub fn cell_at(&self, index: usize) -> u8 {
        self.cells[index]
    }

    /// All 9 cell values in row-major order.
    pub fn cells(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }

    /// Index of the blank cell.
    pub fn blank_index(&self) -> usize {
        self.blank as usize
    }

    /// Tiles currently adjacent to the blank, in the fixed generation order.
    ///
    /// Never empty: the blank always has at least two neighbors on a 3x3
    /// grid.
    pub fn legal_moves(&self) -> Vec<u8> {
        Direction::ALL
            .iter()
            .filter_map(|d| d.neighbor_of(self.blank_index()))
            .map(|index| self.cells[index])
            .collect()
    }

    /// Slide `tile` into the blank.
    ///
    /// Returns the board after the swap together with the blank's prior
    /// index, where the moved tile now sits; an animating consumer needs
    /// it to repaint the two affected cells.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if the tile is not adjacent to
    /// the blank. The board is unchanged in that case.
    #[must_use = "slide returns a new board; the original is unchanged"]
    pub fn slide(&self, tile: u8) -> Result<(Board, usize), crate::Error> {
        let blank = self.blank_index();
        let from = Direction::ALL
            .iter()
            .filter_map(|d| d.neighbor_of(blank))
            .find(|&index| self.cells[index] == tile)
            .ok_or(crate::Error::InvalidMove { tile })?;

        let mut next = *self;
        next.cells[blank] = tile;
        next.cells[from] = 0;
        next.blank = from as u8;
        Ok((next, blank))
    }

    /// True iff the cells read 1,2,3,4,5,6,7,8,0 in row-major order.
    pub fn is_goal(&self) -> bool {
        *self == Board::goal()
    }

    /// Manhattan-distance heuristic: the sum over the 8 tiles of the grid
    /// distance between each tile's cell and its goal cell.
    ///
    /// Zero iff the board is the goal. Never overestimates the true
    /// remaining move count, which keeps best-first search optimal.
    pub fn heuristic(&self) -> u32 {
        let mut distance = 0u32;
        for (index, &value) in self.cells.iter().enumerate() {
            if value == 0 {
                continue;
            }
            let target = value as usize - 1;
            let row_delta = (index / SIDE).abs_diff(target / SIDE);
            let col_delta = (index % SIDE).abs_diff(target % SIDE);
            distance += (row_delta + col_delta) as u32;
        }
        distance
    }

    /// Number of inversions in the non-blank tile sequence.
    ///
    /// An inversion is a pair of tiles that appear in the opposite of their
    /// goal order when the board is read row-major, skipping the blank.
    pub fn inversion_count(&self) -> usize {
        let tiles: Vec<u8> = self.cells.iter().copied().filter(|&c| c != 0).collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, &tile)| tiles[i + 1..].iter().filter(|&&later| later < tile).count())
            .sum()
    }

    /// Analytic solvability test.
    ///
    /// On an odd-width grid the blank's row does not affect parity, so a
    /// 3x3 board can reach the goal iff its inversion count is even. This
    /// lets the solver reject impossible boards without any search.
    pub fn is_solvable(&self) -> bool {
        self.inversion_count().is_multiple_of(2)
    }

    /// Canonical 9-digit string representation for use as a key.
    pub fn encode(&self) -> String {
        self.cells.iter().map(|c| c.to_string()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::goal()
    }
}

impl TryFrom<[u8; CELL_COUNT]> for Board {
    type Error = crate::Error;

    fn try_from(cells: [u8; CELL_COUNT]) -> Result<Self, Self::Error> {
        Board::from_cells(cells)
    }
}

impl From<Board> for [u8; CELL_COUNT] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..SIDE {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.cells[row * SIDE + col] {
                    0 => write!(f, ".")?,
                    value => write!(f, "{value}")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_goal_board() {
        let board = Board::goal();
        assert!(board.is_goal());
        assert_eq!(board.blank_index(), 8);
        assert_eq!(board.heuristic(), 0);
    }

    #[test]
    fn test_from_string_roundtrip() {
        for config in ["123456780", "724506831", "087654321"] {
            let board = Board::from_string(config).unwrap();
            assert_eq!(board.encode(), config);
        }
    }

    #[test]
    fn test_from_string_filters_whitespace() {
        let board = Board::from_string("123 456 780").unwrap();
        assert!(board.is_goal());
    }

    #[test]
    fn test_from_string_rejects_bad_length() {
        let err = Board::from_string("1234").unwrap_err();
        assert!(err.to_string().contains("exactly 9 cells"));

        assert!(Board::from_string("1234567801").is_err());
    }

    #[test]
    fn test_from_string_rejects_bad_symbol() {
        let err = Board::from_string("12345678X").unwrap_err();
        assert!(err.to_string().contains('X'));

        // 9 is a digit but not a tile
        assert!(Board::from_string("123456789").is_err());
    }

    #[test]
    fn test_from_string_rejects_duplicates() {
        let err = Board::from_string("112345678").unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_from_cells_rejects_out_of_range() {
        let result = Board::from_cells([1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_cached_at_construction() {
        let board = Board::from_string("123056784").unwrap();
        assert_eq!(board.blank_index(), 3);
        assert_eq!(board.cell_at(3), 0);
    }

    #[test]
    fn test_legal_moves_center_blank() {
        // Blank in the center: all four neighbors are movable.
        let board = Board::from_string("123405678").unwrap();
        assert_eq!(board.legal_moves(), vec![2, 7, 4, 5]);
    }

    #[test]
    fn test_legal_moves_corner_blank() {
        // Blank in the top-left corner: only down and right neighbors.
        let board = Board::from_string("013425678").unwrap();
        assert_eq!(board.legal_moves(), vec![4, 1]);
    }

    #[test]
    fn test_slide_legal_move() {
        let board = Board::goal();
        let (next, emptied) = board.slide(8).unwrap();
        assert_eq!(emptied, 8);
        assert_eq!(next.encode(), "123456708");
        assert_eq!(next.blank_index(), 7);
        // Original untouched
        assert!(board.is_goal());
    }

    #[test]
    fn test_slide_rejects_non_adjacent_tile() {
        let board = Board::goal();
        let err = board.slide(1).unwrap_err();
        assert!(err.to_string().contains("not adjacent"));
    }

    #[test]
    fn test_slide_changes_exactly_two_cells() {
        let board = Board::from_string("123405678").unwrap();
        for tile in board.legal_moves() {
            let (next, _) = board.slide(tile).unwrap();
            let changed = board
                .cells()
                .iter()
                .zip(next.cells().iter())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(changed, 2);

            let mut sorted: Vec<u8> = next.cells().to_vec();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..9).collect::<Vec<u8>>());
        }
    }

    #[test]
    fn test_heuristic_known_values() {
        // One move from goal: tile 8 is one cell from home.
        let board = Board::from_string("123456708").unwrap();
        assert_eq!(board.heuristic(), 1);

        // Fully reversed layout.
        let board = Board::from_string("876543210").unwrap();
        assert_eq!(board.heuristic(), 3 + 3 + 1 + 1 + 1 + 1 + 3 + 3);
    }

    #[test]
    fn test_heuristic_zero_iff_goal() {
        assert_eq!(Board::goal().heuristic(), 0);
        let board = Board::from_string("123456708").unwrap();
        assert!(board.heuristic() > 0);
    }

    #[test]
    fn test_solvability_parity() {
        assert!(Board::goal().is_solvable());

        // Swapping the last two tiles flips parity: unsolvable.
        let swapped = Board::from_string("123456870").unwrap();
        assert_eq!(swapped.inversion_count(), 1);
        assert!(!swapped.is_solvable());
    }

    #[test]
    fn test_scramble_is_solvable_and_seeded() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::scrambled(DEFAULT_SCRAMBLE_WALK, &mut rng);
        assert!(board.is_solvable());
        assert!(!board.is_goal());

        let mut rng_again = StdRng::seed_from_u64(7);
        let board_again = Board::scrambled(DEFAULT_SCRAMBLE_WALK, &mut rng_again);
        assert_eq!(board, board_again);
    }

    #[test]
    fn test_display_blank_as_dot() {
        let board = Board::goal();
        assert_eq!(format!("{board}"), "1 2 3\n4 5 6\n7 8 .");
    }
}
