use crate::game_state::xiangqi_types::*;
use crate::move_generation::legal_move_shared::count_on_path;
use crate::move_generation::pseudo_legal::is_pseudo_legal;

#[inline]
pub fn general_square(board: &Board, color: Color) -> Option<Square> {
    board.find(Piece::new(color, PieceKind::General))
}

/// True if any piece of the opponent could capture `color`'s General.
///
/// A board without that General counts as check, so a captured General
/// degrades into checkmate instead of a fault.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(general) = general_square(board, color) else {
        return true;
    };

    board
        .pieces_of(color.opposite())
        .any(|(from, _)| is_pseudo_legal(board, from, general))
}

/// Squares of every `attacker_color` piece that could capture on `square`.
pub fn attackers_to_square(board: &Board, square: Square, attacker_color: Color) -> Vec<Square> {
    board
        .pieces_of(attacker_color)
        .filter(|&(from, _)| is_pseudo_legal(board, from, square))
        .map(|(from, _)| from)
        .collect()
}

/// Both Generals on one file with nothing between them.
pub fn generals_facing(board: &Board) -> bool {
    let (Some(red), Some(black)) = (
        general_square(board, Color::Red),
        general_square(board, Color::Black),
    ) else {
        return false;
    };

    red.file() == black.file() && count_on_path(board, red, black) == 0
}
