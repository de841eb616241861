//! Random tile spawning.
//!
//! All randomness comes from the caller's RNG; seed it to make games
//! reproducible.

use rand::{Rng, RngExt};

use crate::board::Board;
use crate::geom::Point;

/// Default probability that a spawned tile is a 4 rather than a 2.
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

/// Place a new tile on a uniformly chosen empty cell: a 4 with probability
/// `four_probability`, a 2 otherwise.
///
/// Returns the chosen cell, or `None` (board unchanged) if the board is full.
///
/// # Panics
///
/// If `four_probability` is not in `[0, 1]`. [`GameConfig::validate`]
/// rejects such values.
///
/// [`GameConfig::validate`]: crate::GameConfig::validate
pub fn spawn_tile(board: &mut Board, rng: &mut impl Rng, four_probability: f64) -> Option<Point> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }
    let p = empty[rng.random_range(0..empty.len())];
    let value = if rng.random_bool(four_probability) { 4 } else { 2 };
    board.place(p, value);
    Some(p)
}
