//! Xiangqi FEN-to-GameState parser.
//!
//! The board field lists ranks from Black's baseline (rank 9) down to Red's
//! (rank 0); uppercase letters are Red. Both the WXF letters (`k a b n r c p`)
//! and the descriptive ones (`g e h s`) are accepted. The optional second
//! field is the side to move (`w`/`r` for Red, `b` for Black); any further
//! fields (clocks, move numbers) are ignored.

use crate::game_state::xiangqi_types::*;
use crate::xiangqi_errors::{FenError, FenResult};

pub fn parse_fen(fen: &str) -> FenResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or(FenError::MissingBoard)?;
    let board = parse_board(board_part)?;
    let side_to_move = match parts.next() {
        Some(side_part) => parse_side_to_move(side_part)?,
        None => Color::Red,
    };

    Ok(GameState::from_board(board, side_to_move))
}

pub fn parse_board(board_part: &str) -> FenResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != BOARD_RANKS as usize {
        return Err(FenError::WrongRankCount(ranks.len()));
    }

    let mut board = Board::empty();
    for (rank, rank_str) in (0..BOARD_RANKS).rev().zip(ranks) {
        let mut file: i8 = 0;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if empty_count == 0 {
                    return Err(FenError::InvalidPieceChar(ch));
                }
                let next_file = file + empty_count as i8;
                if next_file > BOARD_FILES {
                    return Err(FenError::WrongRankWidth(rank, next_file));
                }
                file = next_file;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(FenError::InvalidPieceChar(ch))?;
            let square = Square::new(file, rank).ok_or(FenError::WrongRankWidth(rank, file + 1))?;
            board.place(square, piece);
            file += 1;
        }

        if file != BOARD_FILES {
            return Err(FenError::WrongRankWidth(rank, file));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> FenResult<Color> {
    match side_part {
        "w" | "r" => Ok(Color::Red),
        "b" => Ok(Color::Black),
        _ => Err(FenError::InvalidSideToMove(side_part.to_owned())),
    }
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Red
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'k' | 'g' => PieceKind::General,
        'a' => PieceKind::Advisor,
        'b' | 'e' => PieceKind::Elephant,
        'n' | 'h' => PieceKind::Horse,
        'r' => PieceKind::Chariot,
        'c' => PieceKind::Cannon,
        'p' | 's' => PieceKind::Soldier,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}
