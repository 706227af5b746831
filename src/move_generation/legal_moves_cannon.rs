use crate::game_state::xiangqi_types::*;
use crate::move_generation::legal_move_shared::{count_on_path, is_orthogonal};

/// Orthogonal slide. A quiet move needs a clear path; a capture needs exactly
/// one screen between the cannon and its target.
pub fn cannon_move_is_pseudo_legal(board: &Board, from: Square, to: Square) -> bool {
    if !is_orthogonal(from, to) {
        return false;
    }

    let screens = count_on_path(board, from, to);
    if board.is_occupied(to) {
        screens == 1
    } else {
        screens == 0
    }
}
