use crate::game_state::xiangqi_types::*;
use crate::move_generation::legal_move_shared::{displacement, is_vacant};

/// L-shaped jump, blocked only by a piece on the leg square next to the
/// origin along the longer axis.
pub fn horse_move_is_pseudo_legal(board: &Board, from: Square, to: Square) -> bool {
    let (d_file, d_rank) = displacement(from, to);
    let leg = match (d_file.abs(), d_rank.abs()) {
        (2, 1) => from.offset(d_file.signum(), 0),
        (1, 2) => from.offset(0, d_rank.signum()),
        _ => return false,
    };

    is_vacant(board, leg)
}
