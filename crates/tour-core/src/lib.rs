//! Knight's tour search engine.
//!
//! Finds an open knight's tour (a Hamiltonian path of knight moves visiting
//! every square exactly once) on an N×N board by depth-first backtracking
//! over an explicit frame stack.
//!
//! # Example
//!
//! ```
//! use tour_core::{Searcher, Square};
//!
//! let searcher = Searcher::with_size(5);
//! let tour = searcher.find_tour(Square::new(0, 0)).unwrap();
//! assert_eq!(tour.len(), 25);
//! ```

mod board;
mod knight;
mod search;
mod tour;

pub use board::{Board, ParseSquareError, Square, DEFAULT_BOARD_SIZE};
pub use knight::{is_knight_move, possible_moves, MOVE_OFFSETS};
pub use search::{SearchError, Searcher};
pub use tour::Tour;
