use crate::game_state::xiangqi_types::*;

/// Single history entry for `apply_move` / `undo_move`.
///
/// Keeps the captured piece so the move can be reversed exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
}

impl MoveRecord {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    #[inline]
    pub fn as_move(&self) -> Move {
        Move {
            from: self.from,
            to: self.to,
        }
    }
}
