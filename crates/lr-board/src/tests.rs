//! Unit tests for lr-board.

use lr_core::{AgentId, GridPos};

use crate::{Board, BoardError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn board(w: usize, h: usize) -> Board {
    Board::new(w, h).expect("non-empty board")
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction_tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let b = board(4, 3);
        assert_eq!(b.width(), 4);
        assert_eq!(b.height(), 3);
        assert_eq!(b.cells().len(), 12);
        assert_eq!(b.occupied_count(), 0);
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert_eq!(
            Board::new(0, 5).unwrap_err(),
            BoardError::EmptyDimensions { width: 0, height: 5 }
        );
        assert!(Board::new(5, 0).is_err());
    }
}

// ── Bounds-checked access ─────────────────────────────────────────────────────

#[cfg(test)]
mod access_tests {
    use super::*;

    #[test]
    fn set_then_read() {
        let mut b = board(5, 5);
        b.set(GridPos::new(3, 1), AgentId(2)).unwrap();
        assert_eq!(b.get(GridPos::new(3, 1)), Some(2));
        assert_eq!(b.occupant(GridPos::new(3, 1)), Some(AgentId(2)));
        assert!(!b.is_free(GridPos::new(3, 1)));
        assert!(b.is_free(GridPos::new(1, 3)), "x/y must not be transposed");
        assert_eq!(b.occupied_count(), 1);
    }

    #[test]
    fn out_of_bounds_reads_are_none() {
        let b = board(3, 2);
        for pos in [GridPos::new(-1, 0), GridPos::new(0, -1), GridPos::new(3, 0), GridPos::new(0, 2)] {
            assert_eq!(b.get(pos), None, "{pos}");
            assert_eq!(b.occupant(pos), None);
            assert!(!b.is_free(pos));
        }
    }

    #[test]
    fn out_of_bounds_write_rejected_and_board_untouched() {
        let mut b = board(3, 3);
        let before = b.clone();
        let err = b.set(GridPos::new(3, 1), AgentId(1)).unwrap_err();
        assert_eq!(err, BoardError::OutOfBounds(GridPos::new(3, 1)));
        assert_eq!(b, before);
    }

    #[test]
    fn reserved_id_rejected() {
        let mut b = board(3, 3);
        assert_eq!(b.set(GridPos::new(0, 0), AgentId::NONE), Err(BoardError::ReservedId));
        assert_eq!(b.occupied_count(), 0);
    }

    #[test]
    fn row_major_layout() {
        let mut b = board(3, 2);
        b.set(GridPos::new(2, 0), AgentId(1)).unwrap();
        b.set(GridPos::new(0, 1), AgentId(2)).unwrap();
        assert_eq!(b.cells(), &[0, 0, 1, 2, 0, 0]);
        assert_eq!(b.to_rows(), vec![vec![0, 0, 1], vec![2, 0, 0]]);
    }

    #[test]
    fn clear_empties_everything() {
        let mut b = board(3, 3);
        b.set(GridPos::new(1, 1), AgentId(4)).unwrap();
        b.clear();
        assert_eq!(b.occupied_count(), 0);
    }

    #[test]
    fn display_renders_rows() {
        let mut b = board(3, 2);
        b.set(GridPos::new(1, 0), AgentId(1)).unwrap();
        b.set(GridPos::new(2, 1), AgentId(2)).unwrap();
        assert_eq!(b.to_string(), ".1.\n..2\n");
    }
}
