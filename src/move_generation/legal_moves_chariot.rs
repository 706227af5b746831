use crate::game_state::xiangqi_types::*;
use crate::move_generation::legal_move_shared::{count_on_path, is_orthogonal};

/// Orthogonal slide through empty squares.
pub fn chariot_move_is_pseudo_legal(board: &Board, from: Square, to: Square) -> bool {
    is_orthogonal(from, to) && count_on_path(board, from, to) == 0
}
