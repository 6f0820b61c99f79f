//! Test suite for board construction and move semantics
//! Validates the configuration format and slide invariants

use tiles::puzzle::Board;

mod construction {
    use super::*;

    #[test]
    fn test_every_valid_configuration_round_trips() {
        for config in ["123456780", "012345678", "804627351", "087654321"] {
            let board = Board::from_string(config).unwrap();
            assert_eq!(board.encode(), config, "cells must reproduce the input");

            let cells: Vec<u8> = config.bytes().map(|b| b - b'0').collect();
            for (index, &expected) in cells.iter().enumerate() {
                assert_eq!(board.cell_at(index), expected);
            }
        }
    }

    #[test]
    fn test_rejects_malformed_literals() {
        // Wrong length, out-of-range symbol, repeated value: all rejected
        // at construction, never partially accepted.
        for config in ["", "12345678", "1234567890", "12345678a", "123456799", "111111111"] {
            assert!(
                Board::from_string(config).is_err(),
                "'{config}' must be rejected"
            );
        }
    }

    #[test]
    fn test_blank_is_derived_not_supplied() {
        let board = Board::from_string("460215378").unwrap();
        assert_eq!(board.cell_at(board.blank_index()), 0);
    }
}

mod moves {
    use super::*;

    #[test]
    fn test_move_succeeds_iff_tile_is_legal() {
        let board = Board::from_string("123405678").unwrap();
        let legal = board.legal_moves();

        for tile in 1..=8u8 {
            let result = board.slide(tile);
            if legal.contains(&tile) {
                assert!(result.is_ok(), "legal tile {tile} must slide");
            } else {
                assert!(result.is_err(), "non-adjacent tile {tile} must be rejected");
            }
        }
    }

    #[test]
    fn test_move_changes_exactly_two_cells_and_preserves_values() {
        let board = Board::from_string("804627351").unwrap();
        for tile in board.legal_moves() {
            let (next, prior_blank) = board.slide(tile).unwrap();

            let changed: Vec<usize> = (0..9)
                .filter(|&i| board.cell_at(i) != next.cell_at(i))
                .collect();
            assert_eq!(changed.len(), 2);
            assert!(changed.contains(&prior_blank));

            let mut values: Vec<u8> = next.cells().to_vec();
            values.sort_unstable();
            assert_eq!(values, (0..9).collect::<Vec<u8>>());
        }
    }

    #[test]
    fn test_failed_move_leaves_board_unchanged() {
        let board = Board::from_string("123456780").unwrap();
        assert!(board.slide(1).is_err());
        assert_eq!(board.encode(), "123456780");
    }

    #[test]
    fn test_blank_always_has_at_least_two_neighbors() {
        // Move the blank through every cell; the move set is never empty.
        let mut board = Board::from_string("012345678").unwrap();
        for _ in 0..12 {
            let moves = board.legal_moves();
            assert!(moves.len() >= 2);
            let (next, _) = board.slide(moves[0]).unwrap();
            board = next;
        }
    }
}

mod heuristic {
    use super::*;

    #[test]
    fn test_zero_iff_goal() {
        assert_eq!(Board::goal().heuristic(), 0);

        let mut nonzero = 0;
        for config in ["123456708", "213456780", "804627351"] {
            let board = Board::from_string(config).unwrap();
            assert!(board.heuristic() > 0);
            nonzero += 1;
        }
        assert_eq!(nonzero, 3);
    }

    #[test]
    fn test_never_exceeds_walk_distance() {
        // A board reached by n slides from the goal is at most n moves from
        // it, so an admissible heuristic can never exceed n.
        let mut board = Board::goal();
        let walks = [8u8, 7, 5, 8, 6, 3, 2, 1, 4, 8];
        for (n, &tile) in walks.iter().enumerate() {
            if let Ok((next, _)) = board.slide(tile) {
                board = next;
            }
            assert!(board.heuristic() as usize <= n + 1);
        }
    }
}

mod solvability {
    use super::*;

    #[test]
    fn test_goal_is_solvable() {
        assert!(Board::goal().is_solvable());
    }

    #[test]
    fn test_single_transposition_is_unsolvable() {
        // Swapping any two adjacent non-blank tiles of the goal flips the
        // permutation parity.
        let board = Board::from_string("123456870").unwrap();
        assert!(!board.is_solvable());

        let board = Board::from_string("213456780").unwrap();
        assert!(!board.is_solvable());
    }

    #[test]
    fn test_moves_preserve_solvability() {
        let mut board = Board::from_string("804627351").unwrap();
        let class = board.is_solvable();
        for _ in 0..20 {
            let moves = board.legal_moves();
            let (next, _) = board.slide(moves[moves.len() - 1]).unwrap();
            board = next;
            assert_eq!(board.is_solvable(), class);
        }
    }
}
