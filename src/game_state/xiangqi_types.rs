//! Core value types shared by the board, the rule engine and the history.
//!
//! Squares are addressed by `(file, rank)` with file 0 on the left and rank 0
//! on the Red baseline. Pieces carry no identity beyond their color and kind.

use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::move_record::MoveRecord;

/// Number of files (columns) on the board.
pub const BOARD_FILES: i8 = 9;
/// Number of ranks (rows) on the board.
pub const BOARD_RANKS: i8 = 10;
/// Total number of intersections a piece can stand on.
pub const SQUARE_COUNT: usize = (BOARD_FILES as usize) * (BOARD_RANKS as usize);

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Rank delta of a forward soldier step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Red => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Movement class of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    General,
    Advisor,
    Elephant,
    Horse,
    Chariot,
    Cannon,
    Soldier,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::General,
        PieceKind::Advisor,
        PieceKind::Elephant,
        PieceKind::Horse,
        PieceKind::Chariot,
        PieceKind::Cannon,
        PieceKind::Soldier,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::General => 0,
            PieceKind::Advisor => 1,
            PieceKind::Elephant => 2,
            PieceKind::Horse => 3,
            PieceKind::Chariot => 4,
            PieceKind::Cannon => 5,
            PieceKind::Soldier => 6,
        }
    }
}

/// A colored piece. Two pieces of the same color and kind are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Traditional glyph; Red and Black use different characters for most kinds.
    pub fn glyph(self) -> char {
        match (self.color, self.kind) {
            (Color::Red, PieceKind::General) => '帥',
            (Color::Red, PieceKind::Advisor) => '仕',
            (Color::Red, PieceKind::Elephant) => '相',
            (Color::Red, PieceKind::Horse) => '傌',
            (Color::Red, PieceKind::Chariot) => '俥',
            (Color::Red, PieceKind::Cannon) => '炮',
            (Color::Red, PieceKind::Soldier) => '兵',
            (Color::Black, PieceKind::General) => '將',
            (Color::Black, PieceKind::Advisor) => '士',
            (Color::Black, PieceKind::Elephant) => '象',
            (Color::Black, PieceKind::Horse) => '馬',
            (Color::Black, PieceKind::Chariot) => '車',
            (Color::Black, PieceKind::Cannon) => '砲',
            (Color::Black, PieceKind::Soldier) => '卒',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.color, self.kind)
    }
}

/// An on-board intersection. Construction fails for off-board coordinates, so
/// every `Square` value is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    rank: i8,
    file: i8,
}

impl Square {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Option<Self> {
        if file < 0 || file >= BOARD_FILES || rank < 0 || rank >= BOARD_RANKS {
            return None;
        }
        Some(Self { rank, file })
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= SQUARE_COUNT {
            return None;
        }
        let file = (index % BOARD_FILES as usize) as i8;
        let rank = (index / BOARD_FILES as usize) as i8;
        Self::new(file, rank)
    }

    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    #[inline]
    pub const fn index(self) -> usize {
        (self.rank as usize) * (BOARD_FILES as usize) + (self.file as usize)
    }

    #[inline]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        Self::new(self.file + d_file, self.rank + d_rank)
    }

    /// All 90 squares in index order (rank-major, starting at the Red baseline).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT).filter_map(Square::from_index)
    }

    /// Distance from `color`'s own baseline (0 on the baseline, 9 on the far one).
    #[inline]
    pub const fn relative_rank(self, color: Color) -> i8 {
        match color {
            Color::Red => self.rank,
            Color::Black => BOARD_RANKS - 1 - self.rank,
        }
    }

    /// Files 3-5 within `color`'s back three ranks.
    #[inline]
    pub const fn in_palace(self, color: Color) -> bool {
        self.file >= 3 && self.file <= 5 && self.relative_rank(color) <= 2
    }

    /// True while the square lies on `color`'s side of the river.
    #[inline]
    pub const fn on_home_side(self, color: Color) -> bool {
        self.relative_rank(color) <= 4
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}

/// A bare origin/destination pair, as exchanged between peers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
