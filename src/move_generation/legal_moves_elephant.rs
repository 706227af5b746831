use crate::game_state::xiangqi_types::*;
use crate::move_generation::legal_move_shared::{displacement, is_vacant};

/// Two diagonal steps on the own side of the river, blocked by a piece on the
/// midpoint (the elephant's eye).
pub fn elephant_move_is_pseudo_legal(board: &Board, color: Color, from: Square, to: Square) -> bool {
    if !to.on_home_side(color) {
        return false;
    }

    let (d_file, d_rank) = displacement(from, to);
    if d_file.abs() != 2 || d_rank.abs() != 2 {
        return false;
    }

    is_vacant(board, from.offset(d_file / 2, d_rank / 2))
}

#[cfg(test)]
mod tests {
    use super::elephant_move_is_pseudo_legal;
    use crate::game_state::xiangqi_types::*;

    fn sq(file: i8, rank: i8) -> Square {
        Square::new(file, rank).expect("test square should be on the board")
    }

    #[test]
    fn elephant_is_blocked_by_its_eye() {
        let mut board = Board::empty();
        board.place(sq(2, 0), Piece::new(Color::Red, PieceKind::Elephant));
        assert!(elephant_move_is_pseudo_legal(&board, Color::Red, sq(2, 0), sq(4, 2)));

        board.place(sq(3, 1), Piece::new(Color::Black, PieceKind::Horse));
        assert!(!elephant_move_is_pseudo_legal(&board, Color::Red, sq(2, 0), sq(4, 2)));
        assert!(elephant_move_is_pseudo_legal(&board, Color::Red, sq(2, 0), sq(0, 2)));
    }

    #[test]
    fn elephant_cannot_cross_the_river() {
        let board = Board::empty();
        assert!(elephant_move_is_pseudo_legal(&board, Color::Red, sq(2, 2), sq(4, 4)));
        assert!(!elephant_move_is_pseudo_legal(&board, Color::Red, sq(4, 4), sq(6, 6)));
        assert!(elephant_move_is_pseudo_legal(&board, Color::Black, sq(6, 7), sq(4, 5)));
        assert!(!elephant_move_is_pseudo_legal(&board, Color::Black, sq(4, 5), sq(2, 3)));
    }
}
