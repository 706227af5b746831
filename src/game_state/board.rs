//! Mailbox board: a fixed 9x10 grid of optional pieces.
//!
//! The board is a plain `Copy` value with no notion of whose turn it is and
//! no validation on mutation. Legality lives in `move_generation`.

use std::fmt;

use crate::game_state::xiangqi_rules::{
    BACK_RANK, CANNON_FILES, CANNON_RANK, SOLDIER_RANK,
};
use crate::game_state::xiangqi_types::*;
use crate::utils::render_game_state::render_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; SQUARE_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [None; SQUARE_COUNT],
        }
    }

    /// The fixed starting layout.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for square in Square::all() {
            if let Some(piece) = initial_piece(square) {
                board.place(square, piece);
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// Lookup by raw coordinates; anything off the board reads as empty.
    #[inline]
    pub fn piece_at_xy(&self, file: i8, rank: i8) -> Option<Piece> {
        Square::new(file, rank).and_then(|square| self.piece_at(square))
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.squares[square.index()] = Some(piece);
    }

    /// Empties `square`, returning whatever stood there.
    #[inline]
    pub fn clear(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    pub fn iter_pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.iter_pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// First square (in index order) holding `piece`.
    pub fn find(&self, piece: Piece) -> Option<Square> {
        self.iter_pieces()
            .find(|&(_, candidate)| candidate == piece)
            .map(|(square, _)| square)
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|slot| slot.is_some()).count()
    }
}

/// Starting layout.
#[inline]
pub fn initial_board() -> Board {
    Board::initial()
}

fn initial_piece(square: Square) -> Option<Piece> {
    let color = if square.on_home_side(Color::Red) {
        Color::Red
    } else {
        Color::Black
    };
    let file = square.file();

    let kind = match square.relative_rank(color) {
        0 => BACK_RANK[file as usize],
        CANNON_RANK if CANNON_FILES.contains(&file) => PieceKind::Cannon,
        SOLDIER_RANK if file % 2 == 0 => PieceKind::Soldier,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_board(self))
    }
}
