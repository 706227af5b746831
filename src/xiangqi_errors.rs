//! Errors used throughout the Xiangqi engine.
//!
//! Expected game conditions are not errors: an off-board coordinate reads as
//! an empty square, "no legal moves" is reported through
//! `TerminalState`, and undoing an empty history returns `None`. The enums
//! below only cover requests the engine refuses (`MoveError`) and malformed
//! position strings (`FenError`).

use std::error::Error;
use std::fmt;

use crate::game_state::xiangqi_types::{Color, Square};

pub type MoveResult<T> = Result<T, MoveError>;
pub type FenResult<T> = Result<T, FenError>;

/// A move request that was refused. The game state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece stands on the origin square.
    EmptySquare(Square),
    /// The origin piece does not belong to the side to move.
    WrongSide { square: Square, side_to_move: Color },
    /// The destination is not among the origin piece's legal moves.
    IllegalMove { from: Square, to: Square },
    /// The session already has a result.
    GameOver,
    /// The session is waiting on the opponent (their turn, or not connected).
    NotYourTurn,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySquare(square) => write!(f, "no piece on {square}"),
            MoveError::WrongSide {
                square,
                side_to_move,
            } => write!(f, "piece on {square} does not belong to {side_to_move}"),
            MoveError::IllegalMove { from, to } => write!(f, "illegal move {from} -> {to}"),
            MoveError::GameOver => write!(f, "game is already over"),
            MoveError::NotYourTurn => write!(f, "not the local player's turn"),
        }
    }
}

impl Error for MoveError {}

/// Failure while parsing a Xiangqi FEN string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    MissingBoard,
    /// The board field must describe exactly ten ranks.
    WrongRankCount(usize),
    /// A rank did not add up to nine files. Payload: (rank, files counted).
    WrongRankWidth(i8, i8),
    InvalidPieceChar(char),
    InvalidSideToMove(String),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::MissingBoard => write!(f, "missing board layout in FEN"),
            FenError::WrongRankCount(count) => {
                write!(f, "board layout must contain 10 ranks, found {count}")
            }
            FenError::WrongRankWidth(rank, files) => {
                write!(f, "rank {rank} spans {files} files instead of 9")
            }
            FenError::InvalidPieceChar(ch) => write!(f, "invalid piece character '{ch}'"),
            FenError::InvalidSideToMove(side) => write!(f, "invalid side-to-move field: {side}"),
        }
    }
}

impl Error for FenError {}
