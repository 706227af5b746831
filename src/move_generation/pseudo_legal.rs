//! Pseudo-legal move test: piece geometry and capture rules only.
//!
//! Whether the mover's own General is left in check is decided later by
//! `legal_move_generator`.

use crate::game_state::xiangqi_types::*;
use crate::move_generation::legal_moves_advisor::advisor_move_is_pseudo_legal;
use crate::move_generation::legal_moves_cannon::cannon_move_is_pseudo_legal;
use crate::move_generation::legal_moves_chariot::chariot_move_is_pseudo_legal;
use crate::move_generation::legal_moves_elephant::elephant_move_is_pseudo_legal;
use crate::move_generation::legal_moves_general::general_move_is_pseudo_legal;
use crate::move_generation::legal_moves_horse::horse_move_is_pseudo_legal;
use crate::move_generation::legal_moves_soldier::soldier_move_is_pseudo_legal;

pub fn is_pseudo_legal(board: &Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };

    // Also rejects `from == to`.
    if board.piece_at(to).is_some_and(|target| target.color == piece.color) {
        return false;
    }

    match piece.kind {
        PieceKind::General => general_move_is_pseudo_legal(board, piece.color, from, to),
        PieceKind::Advisor => advisor_move_is_pseudo_legal(piece.color, from, to),
        PieceKind::Elephant => elephant_move_is_pseudo_legal(board, piece.color, from, to),
        PieceKind::Horse => horse_move_is_pseudo_legal(board, from, to),
        PieceKind::Chariot => chariot_move_is_pseudo_legal(board, from, to),
        PieceKind::Cannon => cannon_move_is_pseudo_legal(board, from, to),
        PieceKind::Soldier => soldier_move_is_pseudo_legal(piece.color, from, to),
    }
}

/// Every pseudo-legal destination of the piece on `from`, in square order.
pub fn pseudo_legal_targets(board: &Board, from: Square) -> impl Iterator<Item = Square> + '_ {
    Square::all().filter(move |&to| is_pseudo_legal(board, from, to))
}
