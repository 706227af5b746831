use crate::game_state::xiangqi_types::*;
use crate::move_generation::legal_move_shared::displacement;

/// One diagonal step inside the own palace.
pub fn advisor_move_is_pseudo_legal(color: Color, from: Square, to: Square) -> bool {
    let (d_file, d_rank) = displacement(from, to);
    to.in_palace(color) && d_file.abs() == 1 && d_rank.abs() == 1
}
