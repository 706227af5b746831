use crate::game_state::xiangqi_types::*;
use crate::move_generation::legal_move_shared::displacement;

/// One step forward; once across the river, also one step sideways. Never
/// backward.
pub fn soldier_move_is_pseudo_legal(color: Color, from: Square, to: Square) -> bool {
    let (d_file, d_rank) = displacement(from, to);
    if d_file == 0 && d_rank == color.forward() {
        return true;
    }

    let crossed_river = !from.on_home_side(color);
    crossed_river && d_rank == 0 && d_file.abs() == 1
}
