//! Knight move generation.
//!
//! The offset order is a contract: it fixes the depth-first probe
//! order and therefore which tour the search discovers first. Do not
//! reorder.

use std::collections::HashSet;

use crate::board::{Board, Position};

/// The eight knight offsets, probed in exactly this order at every
/// depth of the search.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, -1),
    (2, 1),
    (-2, -1),
    (-2, 1),
    (1, -2),
    (-1, -2),
    (1, 2),
    (-1, 2),
];

/// The cells one knight move from `from` that are on the board and
/// currently unvisited.
///
/// The closed-tour search computes this once against the freshly
/// created board and uses it as its acceptance set: a closed tour must
/// end on one of these cells so the path can hop back to the start.
pub fn adjacent_cells(board: &Board, from: Position) -> HashSet<Position> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&delta| board.offset(from, delta))
        .filter(|&pos| board.is_unvisited(pos))
        .collect()
}
