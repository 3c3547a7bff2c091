//! Basic example of running the tour engine

use tour_core::{Searcher, Square};

fn main() {
    // Search a small board first
    println!("Searching a 5x5 board from (0, 0)...\n");
    let searcher = Searcher::with_size(5);
    let tour = match searcher.find_tour(Square::new(0, 0)) {
        Ok(tour) => tour,
        Err(err) => {
            eprintln!("{}", err);
            return;
        }
    };

    println!("Tour found with {} steps.", tour.len());
    println!("{}\n", tour);

    // The full 8x8 board; (3, 4) is a start the search resolves quickly
    println!("Searching the 8x8 board from (3, 4)...\n");
    let searcher = Searcher::new();
    if let Ok(tour) = searcher.find_tour(Square::new(3, 4)) {
        println!("Tour found with {} steps.", tour.len());
        println!("{}\n", tour);
    }

    // A board with no tour at all
    println!("Searching a 4x4 board from (0, 0)...\n");
    let searcher = Searcher::with_size(4);
    if let Ok(tour) = searcher.find_tour(Square::new(0, 0)) {
        if tour.is_empty() {
            println!("No tour found.");
        }
    }
}
