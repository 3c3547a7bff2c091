//! Search output: an ordered sequence of visited squares.

use crate::board::Square;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The result of a tour search.
///
/// A complete tour holds N² squares in visitation order, each consecutive
/// pair one knight move apart. An empty tour means the search exhausted
/// every path from the start without covering the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    size: usize,
    squares: Vec<Square>,
}

impl Tour {
    pub(crate) fn new(size: usize, squares: Vec<Square>) -> Self {
        Self { size, squares }
    }

    /// The empty result for an N×N board, as returned when no tour exists.
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            squares: Vec::new(),
        }
    }

    /// Board dimension N the tour was searched on.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of squares visited.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// True if the search found no tour.
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// True if the tour covers all N² squares.
    pub fn is_complete(&self) -> bool {
        !self.squares.is_empty() && self.squares.len() == self.size * self.size
    }

    /// The visited squares in order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// The square visited at 0-based index `idx`, if any.
    pub fn get(&self, idx: usize) -> Option<Square> {
        self.squares.get(idx).copied()
    }

    /// Iterate over the visited squares in order.
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.squares.iter().copied()
    }

    /// The start square, if the tour is nonempty.
    pub fn first(&self) -> Option<Square> {
        self.squares.first().copied()
    }

    /// The final square, if the tour is nonempty.
    pub fn last(&self) -> Option<Square> {
        self.squares.last().copied()
    }
}

/// Renders the board as a grid of 1-based step numbers, `.` for unvisited.
impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut grid = vec![0usize; self.size * self.size];
        for (i, sq) in self.squares.iter().enumerate() {
            if sq.row < self.size && sq.col < self.size {
                grid[sq.row * self.size + sq.col] = i + 1;
            }
        }
        let width = (self.size * self.size).to_string().len();
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                match grid[row * self.size + col] {
                    0 => write!(f, "{:>width$}", ".")?,
                    step => write!(f, "{step:>width$}")?,
                }
            }
            if row + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tour {
        Tour::new(
            3,
            vec![Square::new(0, 0), Square::new(2, 1), Square::new(0, 2)],
        )
    }

    #[test]
    fn test_accessors() {
        let tour = sample();
        assert_eq!(tour.size(), 3);
        assert_eq!(tour.len(), 3);
        assert!(!tour.is_empty());
        assert_eq!(tour.first(), Some(Square::new(0, 0)));
        assert_eq!(tour.last(), Some(Square::new(0, 2)));
        assert_eq!(tour.get(1), Some(Square::new(2, 1)));
        assert_eq!(tour.get(3), None);
        assert_eq!(tour.iter().count(), 3);
    }

    #[test]
    fn test_is_complete() {
        assert!(!sample().is_complete());
        assert!(Tour::new(1, vec![Square::new(0, 0)]).is_complete());
        assert!(!Tour::empty(2).is_complete());
    }

    #[test]
    fn test_display_grid() {
        let rendered = sample().to_string();
        assert_eq!(rendered, "1 . 3\n. . .\n. 2 .");
    }

    #[test]
    fn test_display_pads_wide_steps() {
        // 4×4 needs two columns once steps reach 10.
        let squares = vec![
            Square::new(0, 0),
            Square::new(2, 1),
            Square::new(0, 2),
            Square::new(1, 0),
            Square::new(3, 1),
            Square::new(1, 2),
            Square::new(3, 3),
            Square::new(2, 3),
        ];
        let tour = Tour::new(4, squares);
        let first_line = tour.to_string().lines().next().unwrap().to_string();
        assert_eq!(first_line, " 1  .  3  .");
    }

    #[test]
    fn test_serde_round_trip() {
        let tour = sample();
        let json = serde_json::to_string(&tour).unwrap();
        assert_eq!(serde_json::from_str::<Tour>(&json).unwrap(), tour);
    }
}
