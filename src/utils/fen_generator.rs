use crate::game_state::xiangqi_types::*;

/// Board field plus side to move, e.g. the starting position's
/// `rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w`.
pub fn generate_fen(game_state: &GameState) -> String {
    let side_to_move = match game_state.side_to_move {
        Color::Red => "w",
        Color::Black => "b",
    };

    format!("{} {}", generate_board_fen(&game_state.board), side_to_move)
}

pub fn generate_board_fen(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..BOARD_RANKS).rev() {
        let mut empty_count = 0u8;

        for file in 0..BOARD_FILES {
            if let Some(piece) = board.piece_at_xy(file, rank) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_fen_char(piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn piece_fen_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::General => 'k',
        PieceKind::Advisor => 'a',
        PieceKind::Elephant => 'b',
        PieceKind::Horse => 'n',
        PieceKind::Chariot => 'r',
        PieceKind::Cannon => 'c',
        PieceKind::Soldier => 'p',
    };

    match piece.color {
        Color::Red => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}
