//! Backtracking tour search.

use crate::board::{Board, Square, DEFAULT_BOARD_SIZE};
use crate::knight::possible_moves;
use crate::tour::Tour;
use std::fmt;

/// Structured errors returned by the search driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The start square lies outside the board; rejected before any mark.
    StartOutOfBounds { start: Square, size: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::StartOutOfBounds { start, size } => {
                write!(f, "start {start} is outside the {size}x{size} board")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Terminal state of a driven frame stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// The path covers all N² squares.
    Complete,
    /// Every path from the start was tried without covering the board.
    Exhausted,
}

/// One backtracking frame: a path square plus the snapshot of candidate
/// moves taken on entry and a cursor over it.
struct Frame {
    square: Square,
    candidates: Vec<Square>,
    next: usize,
}

impl Frame {
    fn new(square: Square, candidates: Vec<Square>) -> Self {
        Self {
            square,
            candidates,
            next: 0,
        }
    }
}

/// Tour search driver. Stateless between calls; every `find_tour` invocation
/// works on a fresh board and path.
#[derive(Debug, Clone, Copy)]
pub struct Searcher {
    size: usize,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    /// Create a searcher for the standard 8×8 board.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_BOARD_SIZE)
    }

    /// Create a searcher for an N×N board.
    pub fn with_size(size: usize) -> Self {
        Self { size }
    }

    /// Board dimension N this searcher works on.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Search for an open knight's tour starting at `start`.
    ///
    /// Returns the first tour found under the fixed candidate order, or an
    /// empty [`Tour`] if no tour exists from `start`. An out-of-bounds start
    /// is an error, detected before any board state is touched.
    ///
    /// Deterministic: repeated calls with the same size and start return
    /// identical tours. Beware that the search is exhaustive; on larger
    /// boards the time to a first tour varies enormously with the start.
    pub fn find_tour(&self, start: Square) -> Result<Tour, SearchError> {
        if start.row >= self.size || start.col >= self.size {
            return Err(SearchError::StartOutOfBounds {
                start,
                size: self.size,
            });
        }
        let mut board = Board::new(self.size);
        let mut path = Vec::with_capacity(self.size * self.size);
        match run(&mut board, &mut path, start) {
            Outcome::Complete => Ok(Tour::new(self.size, path)),
            Outcome::Exhausted => {
                debug_assert!(path.is_empty());
                debug_assert_eq!(board.visited_count(), 0);
                Ok(Tour::empty(self.size))
            }
        }
    }
}

/// Drive the depth-first search from `start`, which must be in bounds.
///
/// One frame per path square. Candidates are snapshotted when a frame is
/// entered; a failed subtree undoes every one of its marks before the frame
/// resumes, so the squares remaining in the snapshot are still unvisited.
/// Descending marks the candidate and pushes it; exhausting a frame pops it
/// and unmarks its square. The start frame unwinds like any other, so after
/// `Exhausted` the board is all zeros and the path is empty again.
fn run(board: &mut Board, path: &mut Vec<Square>, start: Square) -> Outcome {
    let target = board.size() * board.size();

    board.mark_visited(start, 1);
    path.push(start);
    if path.len() == target {
        return Outcome::Complete;
    }

    let first = possible_moves(board, start);
    let mut stack = vec![Frame::new(start, first)];

    while let Some(frame) = stack.last_mut() {
        if frame.next < frame.candidates.len() {
            let candidate = frame.candidates[frame.next];
            frame.next += 1;

            board.mark_visited(candidate, path.len() + 1);
            path.push(candidate);
            if path.len() == target {
                // First solution wins; the winning marks stay in place.
                return Outcome::Complete;
            }
            let candidates = possible_moves(board, candidate);
            stack.push(Frame::new(candidate, candidates));
        } else {
            let square = frame.square;
            stack.pop();
            let popped = path.pop();
            debug_assert_eq!(popped, Some(square));
            board.unmark_visited(square);
        }
    }

    Outcome::Exhausted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_square_board() {
        let tour = Searcher::with_size(1).find_tour(Square::new(0, 0)).unwrap();
        assert!(tour.is_complete());
        assert_eq!(tour.squares(), &[Square::new(0, 0)]);
    }

    #[test]
    fn test_rejects_out_of_bounds_start() {
        let searcher = Searcher::new();
        for start in [Square::new(8, 0), Square::new(0, 8), Square::new(9, 9)] {
            match searcher.find_tour(start) {
                Err(SearchError::StartOutOfBounds { start: s, size }) => {
                    assert_eq!(s, start);
                    assert_eq!(size, 8);
                }
                other => panic!("expected StartOutOfBounds, got {other:?}"),
            }
        }
        assert!(Searcher::with_size(0).find_tour(Square::new(0, 0)).is_err());
    }

    #[test]
    fn test_rejection_happens_before_board_allocation() {
        // No board this size could ever be allocated, so the rejection must
        // fire on the coordinates alone.
        let searcher = Searcher::with_size(usize::MAX);
        assert!(matches!(
            searcher.find_tour(Square::new(usize::MAX, 0)),
            Err(SearchError::StartOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_error_display() {
        let err = SearchError::StartOutOfBounds {
            start: Square::new(3, 9),
            size: 8,
        };
        assert_eq!(err.to_string(), "start (3, 9) is outside the 8x8 board");
    }

    #[test]
    fn test_no_tour_on_tiny_boards() {
        for size in [2, 3] {
            let searcher = Searcher::with_size(size);
            for row in 0..size {
                for col in 0..size {
                    let tour = searcher.find_tour(Square::new(row, col)).unwrap();
                    assert!(tour.is_empty(), "unexpected tour on {size}x{size}");
                }
            }
        }
    }

    #[test]
    fn test_exhausted_search_restores_board() {
        // From the 3×3 corner the search visits a few squares and fails;
        // from the center it fails with zero candidates. Both must unwind
        // to a pristine board.
        for start in [Square::new(0, 0), Square::new(1, 1)] {
            let mut board = Board::new(3);
            let mut path = Vec::new();
            assert_eq!(run(&mut board, &mut path, start), Outcome::Exhausted);
            assert!(path.is_empty());
            assert_eq!(board, Board::new(3));
        }
    }

    #[test]
    fn test_complete_search_marks_every_square() {
        let mut board = Board::new(5);
        let mut path = Vec::new();
        let start = Square::new(2, 2);
        assert_eq!(run(&mut board, &mut path, start), Outcome::Complete);
        assert_eq!(path.len(), 25);
        assert_eq!(board.visited_count(), 25);
        for (i, &sq) in path.iter().enumerate() {
            assert_eq!(board.step_at(sq), i + 1);
        }
    }

    #[test]
    fn test_five_by_five_tour_from_center() {
        let searcher = Searcher::with_size(5);
        let tour = searcher.find_tour(Square::new(2, 2)).unwrap();
        assert!(tour.is_complete());
        assert_eq!(tour.first(), Some(Square::new(2, 2)));
    }

    #[test]
    fn test_determinism() {
        let searcher = Searcher::with_size(5);
        let a = searcher.find_tour(Square::new(2, 2)).unwrap();
        let b = searcher.find_tour(Square::new(2, 2)).unwrap();
        assert_eq!(a, b);
    }
}
