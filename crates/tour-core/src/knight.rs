//! Knight move generation.

use crate::board::{Board, Square};

/// The 8 knight move offsets as `(Δrow, Δcol)`.
///
/// The enumeration order is load-bearing: candidates are tried in this order,
/// so it decides which of several existing tours the search finds first. It is
/// part of the engine's observable output and must stay fixed; reordering it
/// (for example to a heuristic order) would silently change every result.
pub const MOVE_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Squares reachable by a knight from `from` that are in bounds and not yet
/// visited, in `MOVE_OFFSETS` order. No side effects.
pub fn possible_moves(board: &Board, from: Square) -> Vec<Square> {
    let size = board.size() as i32;
    let mut out: Vec<Square> = Vec::with_capacity(8);

    for &(dr, dc) in &MOVE_OFFSETS {
        let row = from.row as i32 + dr;
        let col = from.col as i32 + dc;
        if row < 0 || row >= size || col < 0 || col >= size {
            continue;
        }
        let to = Square::new(row as usize, col as usize);
        if !board.is_visited(to) {
            out.push(to);
        }
    }

    out
}

/// True if `from` and `to` are one knight move apart.
pub fn is_knight_move(from: Square, to: Square) -> bool {
    MOVE_OFFSETS.iter().any(|&(dr, dc)| {
        from.row as i32 + dr == to.row as i32 && from.col as i32 + dc == to.col as i32
    })
}
