//! Geometry helpers shared by the per-piece movement rules.

use crate::game_state::xiangqi_types::*;

/// `(d_file, d_rank)` from `from` to `to`.
#[inline]
pub fn displacement(from: Square, to: Square) -> (i8, i8) {
    (to.file() - from.file(), to.rank() - from.rank())
}

#[inline]
pub fn is_orthogonal(from: Square, to: Square) -> bool {
    from != to && (from.file() == to.file() || from.rank() == to.rank())
}

/// Occupied squares strictly between two squares sharing a file or rank.
/// Off-axis pairs count as zero; callers only ask about orthogonal lines.
pub fn count_on_path(board: &Board, from: Square, to: Square) -> usize {
    if from.file() == to.file() {
        let (low, high) = ordered(from.rank(), to.rank());
        ((low + 1)..high)
            .filter(|&rank| board.piece_at_xy(from.file(), rank).is_some())
            .count()
    } else if from.rank() == to.rank() {
        let (low, high) = ordered(from.file(), to.file());
        ((low + 1)..high)
            .filter(|&file| board.piece_at_xy(file, from.rank()).is_some())
            .count()
    } else {
        0
    }
}

/// True if `square` is empty. Used for the elephant eye and the horse leg.
#[inline]
pub fn is_vacant(board: &Board, square: Option<Square>) -> bool {
    square.is_some_and(|square| !board.is_occupied(square))
}

#[inline]
fn ordered(a: i8, b: i8) -> (i8, i8) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
