use crate::game_state::xiangqi_types::*;
use crate::move_generation::legal_move_shared::{count_on_path, displacement};

/// One orthogonal step inside the own palace, or the flying capture of the
/// enemy General along an open file.
pub fn general_move_is_pseudo_legal(board: &Board, color: Color, from: Square, to: Square) -> bool {
    if is_flying_capture(board, color, from, to) {
        return true;
    }

    if !to.in_palace(color) {
        return false;
    }

    let (d_file, d_rank) = displacement(from, to);
    d_file.abs() + d_rank.abs() == 1
}

fn is_flying_capture(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let enemy_general = Piece::new(color.opposite(), PieceKind::General);
    board.piece_at(to) == Some(enemy_general)
        && from.file() == to.file()
        && count_on_path(board, from, to) == 0
}

#[cfg(test)]
mod tests {
    use super::general_move_is_pseudo_legal;
    use crate::game_state::xiangqi_types::*;

    fn sq(file: i8, rank: i8) -> Square {
        Square::new(file, rank).expect("test square should be on the board")
    }

    #[test]
    fn general_steps_orthogonally_inside_palace_only() {
        let mut board = Board::empty();
        board.place(sq(3, 2), Piece::new(Color::Red, PieceKind::General));

        assert!(general_move_is_pseudo_legal(&board, Color::Red, sq(3, 2), sq(4, 2)));
        assert!(general_move_is_pseudo_legal(&board, Color::Red, sq(3, 2), sq(3, 1)));
        assert!(!general_move_is_pseudo_legal(&board, Color::Red, sq(3, 2), sq(3, 3)));
        assert!(!general_move_is_pseudo_legal(&board, Color::Red, sq(3, 2), sq(2, 2)));
        assert!(!general_move_is_pseudo_legal(&board, Color::Red, sq(3, 2), sq(4, 1)));
        assert!(!general_move_is_pseudo_legal(&board, Color::Red, sq(3, 2), sq(3, 0)));
    }

    #[test]
    fn general_flies_only_along_an_open_file() {
        let mut board = Board::empty();
        board.place(sq(4, 0), Piece::new(Color::Red, PieceKind::General));
        board.place(sq(4, 8), Piece::new(Color::Black, PieceKind::General));
        assert!(general_move_is_pseudo_legal(&board, Color::Red, sq(4, 0), sq(4, 8)));
        assert!(general_move_is_pseudo_legal(&board, Color::Black, sq(4, 8), sq(4, 0)));

        board.place(sq(4, 5), Piece::new(Color::Black, PieceKind::Soldier));
        assert!(!general_move_is_pseudo_legal(&board, Color::Red, sq(4, 0), sq(4, 8)));
    }

    #[test]
    fn general_cannot_fly_at_other_pieces() {
        let mut board = Board::empty();
        board.place(sq(4, 0), Piece::new(Color::Red, PieceKind::General));
        board.place(sq(4, 8), Piece::new(Color::Black, PieceKind::Chariot));
        assert!(!general_move_is_pseudo_legal(&board, Color::Red, sq(4, 0), sq(4, 8)));
    }
}
