//! Canonical Xiangqi rule constants.
//!
//! Stores the starting layout both as a FEN literal (used by parsers and
//! tests) and as the back-rank ordering that `Board::initial` builds from.

use crate::game_state::xiangqi_types::PieceKind;

/// Standard starting position in Xiangqi FEN, Red to move.
pub const STARTING_POSITION_FEN: &str =
    "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w";

/// Baseline pieces from file 0 to file 8, identical for both colors.
pub const BACK_RANK: [PieceKind; 9] = [
    PieceKind::Chariot,
    PieceKind::Horse,
    PieceKind::Elephant,
    PieceKind::Advisor,
    PieceKind::General,
    PieceKind::Advisor,
    PieceKind::Elephant,
    PieceKind::Horse,
    PieceKind::Chariot,
];

/// Relative rank (from each side's own baseline) of the cannons.
pub const CANNON_RANK: i8 = 2;
/// Files the cannons start on.
pub const CANNON_FILES: [i8; 2] = [1, 7];
/// Relative rank of the soldiers; they start on every even file.
pub const SOLDIER_RANK: i8 = 3;
