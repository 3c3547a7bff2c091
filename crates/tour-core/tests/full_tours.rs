//! Whole-search properties on boards where the search cost is known.
//!
//! Search cost under the fixed candidate order varies by orders of magnitude
//! between starts on the same board, so every case here uses a start whose
//! cost was measured beforehand. The counts in the comments are candidate
//! visits to the first tour (or to exhaustion).

use std::collections::HashSet;
use tour_core::{is_knight_move, SearchError, Searcher, Square, Tour};

fn sq(row: usize, col: usize) -> Square {
    Square::new(row, col)
}

/// A complete tour must start at `start`, stay in bounds, visit N² distinct
/// squares, and chain consecutive squares by knight moves. Distinctness plus
/// the length pin down full coverage.
fn assert_valid_tour(tour: &Tour, size: usize, start: Square) {
    assert!(tour.is_complete(), "tour is not complete");
    assert_eq!(tour.size(), size);
    assert_eq!(tour.len(), size * size);
    assert_eq!(tour.first(), Some(start));

    let mut seen = HashSet::new();
    for square in tour.iter() {
        assert!(
            square.row < size && square.col < size,
            "square {square} out of bounds"
        );
        assert!(seen.insert(square), "square {square} visited twice");
    }

    for pair in tour.squares().windows(2) {
        assert!(
            is_knight_move(pair[0], pair[1]),
            "{} -> {} is not a knight move",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn five_by_five_from_corner_matches_known_tour() {
    // 72,508 visits. The exact sequence pins the candidate order: any
    // reordering of the move offsets would produce a different tour.
    let tour = Searcher::with_size(5).find_tour(sq(0, 0)).unwrap();
    let expected: Vec<Square> = [
        (0, 0),
        (2, 1),
        (4, 2),
        (3, 4),
        (1, 3),
        (0, 1),
        (2, 2),
        (3, 0),
        (1, 1),
        (0, 3),
        (2, 4),
        (4, 3),
        (3, 1),
        (1, 0),
        (0, 2),
        (1, 4),
        (3, 3),
        (4, 1),
        (2, 0),
        (1, 2),
        (0, 4),
        (2, 3),
        (4, 4),
        (3, 2),
        (4, 0),
    ]
    .into_iter()
    .map(|(r, c)| sq(r, c))
    .collect();
    assert_eq!(tour.squares(), expected.as_slice());
    assert_valid_tour(&tour, 5, sq(0, 0));
}

#[test]
fn five_by_five_display_grid() {
    let tour = Searcher::with_size(5).find_tour(sq(0, 0)).unwrap();
    let expected = [
        " 1  6 15 10 21",
        "14  9 20  5 16",
        "19  2  7 22 11",
        " 8 13 24 17  4",
        "25 18  3 12 23",
    ]
    .join("\n");
    assert_eq!(tour.to_string(), expected);
}

#[test]
fn five_by_five_off_corner_exhausts() {
    // 1,829,420 visits to prove no tour starts at (0, 1). On the 5×5 board
    // open tours only exist from squares of the majority color.
    let tour = Searcher::with_size(5).find_tour(sq(0, 1)).unwrap();
    assert!(tour.is_empty());
    assert_eq!(tour.len(), 0);
}

#[test]
fn six_by_six_tour_from_corner() {
    // 2,511,582 visits.
    let tour = Searcher::with_size(6).find_tour(sq(0, 0)).unwrap();
    assert_valid_tour(&tour, 6, sq(0, 0));
}

#[test]
fn seven_by_seven_tour_from_corner() {
    // 154,899 visits.
    let tour = Searcher::with_size(7).find_tour(sq(0, 0)).unwrap();
    assert_valid_tour(&tour, 7, sq(0, 0));
}

#[test]
fn eight_by_eight_tour() {
    // (3, 4) is the cheapest full-board start: 181,475 visits.
    let tour = Searcher::new().find_tour(sq(3, 4)).unwrap();
    assert_valid_tour(&tour, 8, sq(3, 4));
}

#[test]
fn eight_by_eight_tour_second_start() {
    // 633,263 visits.
    let tour = Searcher::new().find_tour(sq(3, 2)).unwrap();
    assert_valid_tour(&tour, 8, sq(3, 2));
}

#[test]
fn eight_by_eight_determinism() {
    let searcher = Searcher::new();
    let a = searcher.find_tour(sq(3, 4)).unwrap();
    let b = searcher.find_tour(sq(3, 4)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn four_by_four_has_no_tour_from_any_start() {
    // No open tour exists on 4×4; each start exhausts in ~2,200 visits.
    let searcher = Searcher::with_size(4);
    for row in 0..4 {
        for col in 0..4 {
            let tour = searcher.find_tour(sq(row, col)).unwrap();
            assert!(tour.is_empty(), "unexpected tour from ({row}, {col})");
        }
    }
}

#[test]
fn one_by_one_board_is_a_trivial_tour() {
    let tour = Searcher::with_size(1).find_tour(sq(0, 0)).unwrap();
    assert_valid_tour(&tour, 1, sq(0, 0));
    assert_eq!(tour.squares(), &[sq(0, 0)]);
}

#[test]
fn boards_too_small_for_any_tour() {
    // Every start exhausts within a few dozen visits; the 3×3 center has no
    // candidate move at all.
    for size in [2, 3] {
        let searcher = Searcher::with_size(size);
        for row in 0..size {
            for col in 0..size {
                let tour = searcher.find_tour(sq(row, col)).unwrap();
                assert!(tour.is_empty(), "unexpected tour from ({row}, {col})");
            }
        }
    }
}

#[test]
fn out_of_bounds_start_is_rejected() {
    let searcher = Searcher::new();
    for start in [sq(8, 0), sq(0, 8), sq(8, 8), sq(100, 3)] {
        assert!(matches!(
            searcher.find_tour(start),
            Err(SearchError::StartOutOfBounds { .. })
        ));
    }
}

/// The classic corner start. A corner tour exists and the exhaustive search
/// will reach one, but under the fixed candidate order it first explores
/// billions of positions; run with `--ignored` if you have the patience.
#[test]
#[ignore = "corner start on 8x8 explores billions of positions before its first tour"]
fn eight_by_eight_tour_from_corner() {
    let tour = Searcher::new().find_tour(sq(0, 0)).unwrap();
    assert_valid_tour(&tour, 8, sq(0, 0));
}
