//! Board squares and visitation state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Standard chessboard size.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// A board coordinate: `(row, col)`, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    /// Create a square at `(row, col)`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error parsing a square from text.
#[derive(Debug, Clone)]
pub struct ParseSquareError {
    input: String,
}

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid square {:?}: expected \"ROW,COL\"", self.input)
    }
}

impl std::error::Error for ParseSquareError {}

impl FromStr for Square {
    type Err = ParseSquareError;

    /// Parse `"ROW,COL"` (whitespace around either number is allowed).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSquareError {
            input: s.to_string(),
        };
        let (row, col) = s.split_once(',').ok_or_else(err)?;
        let row = row.trim().parse().map_err(|_| err())?;
        let col = col.trim().parse().map_err(|_| err())?;
        Ok(Square { row, col })
    }
}

/// An N×N grid of visitation markers.
///
/// Each cell holds 0 (unvisited) or a positive step number `k` meaning
/// "visited as the k-th square of the current path". Cells are stored
/// row-major: the marker for `(r, c)` is at index `r * size + c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<usize>,
}

impl Board {
    /// Create an empty board with all markers 0.
    ///
    /// A zero-size board is permitted; it has no in-bounds squares.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Board dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// True if `square` lies within the board.
    pub fn in_bounds(&self, square: Square) -> bool {
        square.row < self.size && square.col < self.size
    }

    /// True if `square` carries a nonzero marker.
    ///
    /// # Panics
    /// Panics if `square` is out of bounds.
    pub fn is_visited(&self, square: Square) -> bool {
        self.cells[self.index(square)] != 0
    }

    /// The marker at `square`: 0, or the 1-based step it was visited at.
    ///
    /// # Panics
    /// Panics if `square` is out of bounds.
    pub fn step_at(&self, square: Square) -> usize {
        self.cells[self.index(square)]
    }

    /// Mark `square` as visited at `step` (1-based).
    ///
    /// The caller must guarantee the marker is currently 0; overwriting an
    /// existing mark would corrupt backtracking.
    ///
    /// # Panics
    /// Panics if `square` is out of bounds.
    pub fn mark_visited(&mut self, square: Square, step: usize) {
        let idx = self.index(square);
        debug_assert!(step >= 1, "step numbers are 1-based");
        debug_assert_eq!(self.cells[idx], 0, "marking an already-visited square");
        self.cells[idx] = step;
    }

    /// Reset the marker at `square` to 0, exactly inverting the most recent
    /// `mark_visited` there.
    ///
    /// # Panics
    /// Panics if `square` is out of bounds.
    pub fn unmark_visited(&mut self, square: Square) {
        let idx = self.index(square);
        debug_assert_ne!(self.cells[idx], 0, "unmarking an unvisited square");
        self.cells[idx] = 0;
    }

    /// Number of squares with a nonzero marker.
    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|&&m| m != 0).count()
    }

    fn index(&self, square: Square) -> usize {
        assert!(self.in_bounds(square), "square {square} out of bounds");
        square.row * self.size + square.col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_display() {
        assert_eq!(Square::new(3, 4).to_string(), "(3, 4)");
    }

    #[test]
    fn test_square_from_str() {
        assert_eq!("3,4".parse::<Square>().unwrap(), Square::new(3, 4));
        assert_eq!(" 0 , 7 ".parse::<Square>().unwrap(), Square::new(0, 7));
        assert!("3".parse::<Square>().is_err());
        assert!("3,4,5".parse::<Square>().is_err());
        assert!("a,b".parse::<Square>().is_err());
        assert!("-1,0".parse::<Square>().is_err());
    }

    #[test]
    fn test_square_serde_round_trip() {
        let sq = Square::new(2, 5);
        let json = serde_json::to_string(&sq).unwrap();
        assert_eq!(serde_json::from_str::<Square>(&json).unwrap(), sq);
    }

    #[test]
    fn test_in_bounds_edges() {
        let board = Board::new(8);
        assert!(board.in_bounds(Square::new(0, 0)));
        assert!(board.in_bounds(Square::new(7, 7)));
        assert!(!board.in_bounds(Square::new(8, 0)));
        assert!(!board.in_bounds(Square::new(0, 8)));
    }

    #[test]
    fn test_zero_size_board_has_no_squares() {
        let board = Board::new(0);
        assert!(!board.in_bounds(Square::new(0, 0)));
        assert_eq!(board.visited_count(), 0);
    }

    #[test]
    fn test_mark_unmark_round_trip() {
        let mut board = Board::new(5);
        let before = board.clone();
        let sq = Square::new(2, 3);

        board.mark_visited(sq, 7);
        assert!(board.is_visited(sq));
        assert_eq!(board.step_at(sq), 7);
        assert_eq!(board.visited_count(), 1);

        board.unmark_visited(sq);
        assert!(!board.is_visited(sq));
        assert_eq!(board.step_at(sq), 0);
        assert_eq!(board, before, "mark/unmark must restore the board exactly");
    }

    #[test]
    fn test_visited_count_tracks_marks() {
        let mut board = Board::new(4);
        for (i, sq) in [Square::new(0, 0), Square::new(2, 1), Square::new(3, 3)]
            .into_iter()
            .enumerate()
        {
            board.mark_visited(sq, i + 1);
        }
        assert_eq!(board.visited_count(), 3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_step_at_out_of_bounds_panics() {
        Board::new(3).step_at(Square::new(3, 0));
    }
}
