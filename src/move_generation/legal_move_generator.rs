//! Full legal move generation.
//!
//! Every pseudo-legal destination is simulated on a copy of the board and
//! kept only if the mover's own General is not in check afterwards. This is
//! the only place self-check is filtered out. The board is a `Copy` array, so
//! the simulation never touches the caller's board and never allocates.

use log::trace;

use crate::game_state::xiangqi_types::*;
use crate::move_generation::legal_move_apply::simulate_move;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::pseudo_legal::pseudo_legal_targets;

/// Legal destinations of the piece on `from`, in square order. Empty if the
/// square is empty.
pub fn legal_moves(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    pseudo_legal_targets(board, from)
        .filter(|&to| {
            let leaves_check = is_in_check(&simulate_move(board, from, to), piece.color);
            if leaves_check {
                trace!("rejected {from} -> {to}: leaves {} general in check", piece.color);
            }
            !leaves_check
        })
        .collect()
}

#[inline]
pub fn is_legal_move(board: &Board, from: Square, to: Square) -> bool {
    legal_moves(board, from).contains(&to)
}

/// Every legal move of `color`, grouped by origin square.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for (from, _) in board.pieces_of(color) {
        out.extend(legal_moves(board, from).into_iter().map(|to| Move { from, to }));
    }
    out
}

pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|(from, _)| !legal_moves(board, from).is_empty())
}
