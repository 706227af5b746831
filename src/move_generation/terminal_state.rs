//! Terminal-state classification of a position.
//!
//! "No legal moves" is the normal end-of-game signal here, never an error.

use std::fmt;

use crate::game_state::xiangqi_types::*;
use crate::move_generation::legal_move_checks::{generals_facing, is_in_check};
use crate::move_generation::legal_move_generator::has_any_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalState {
    Ongoing,
    /// Side to move has no legal move and is in check.
    Checkmate { winner: Color },
    /// Side to move has no legal move and is not in check. A draw.
    Stalemate,
    /// The Generals face each other on an open file after a move that did not
    /// capture. The side that just moved forfeits.
    IllegalFacingGenerals { winner: Color },
}

impl TerminalState {
    #[inline]
    pub fn is_over(self) -> bool {
        self != TerminalState::Ongoing
    }

    /// `None` while ongoing and for a draw.
    pub fn winner(self) -> Option<Color> {
        match self {
            TerminalState::Checkmate { winner } | TerminalState::IllegalFacingGenerals { winner } => {
                Some(winner)
            }
            TerminalState::Ongoing | TerminalState::Stalemate => None,
        }
    }
}

impl fmt::Display for TerminalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalState::Ongoing => write!(f, "ongoing"),
            TerminalState::Checkmate { winner } => write!(f, "{winner} won by checkmate"),
            TerminalState::Stalemate => write!(f, "draw by stalemate"),
            TerminalState::IllegalFacingGenerals { winner } => {
                write!(f, "{winner} won: {} left the generals facing", winner.opposite())
            }
        }
    }
}

/// Classifies the position with `color_to_move` about to play.
///
/// The facing-Generals check runs even when nobody is capturing, so any move
/// that leaves the file open between the Generals forfeits for its mover. The
/// legal-move filter already keeps validated moves out of that state; it is
/// reachable through positions built or applied without validation.
pub fn classify(board: &Board, color_to_move: Color) -> TerminalState {
    if !has_any_legal_move(board, color_to_move) {
        return if is_in_check(board, color_to_move) {
            TerminalState::Checkmate {
                winner: color_to_move.opposite(),
            }
        } else {
            TerminalState::Stalemate
        };
    }

    if generals_facing(board) {
        return TerminalState::IllegalFacingGenerals {
            winner: color_to_move,
        };
    }

    TerminalState::Ongoing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::apply_move_unchecked;
    use crate::move_generation::legal_move_generator::legal_moves;

    fn sq(file: i8, rank: i8) -> Square {
        Square::new(file, rank).expect("test square should be on the board")
    }

    fn red(kind: PieceKind) -> Piece {
        Piece::new(Color::Red, kind)
    }

    fn black(kind: PieceKind) -> Piece {
        Piece::new(Color::Black, kind)
    }

    #[test]
    fn start_position_is_ongoing() {
        assert_eq!(classify(&Board::initial(), Color::Red), TerminalState::Ongoing);
    }

    #[test]
    fn double_chariot_mate_is_won_by_red() {
        let mut board = Board::empty();
        board.place(sq(5, 0), red(PieceKind::General));
        board.place(sq(0, 9), red(PieceKind::Chariot));
        board.place(sq(0, 8), red(PieceKind::Chariot));
        board.place(sq(3, 9), black(PieceKind::General));

        assert!(is_in_check(&board, Color::Black));
        assert!(legal_moves(&board, sq(3, 9)).is_empty());

        let state = classify(&board, Color::Black);
        assert_eq!(state, TerminalState::Checkmate { winner: Color::Red });
        assert_eq!(state.winner(), Some(Color::Red));
        assert!(state.is_over());
    }

    #[test]
    fn boxed_in_general_without_check_is_stalemate() {
        let mut board = Board::empty();
        board.place(sq(3, 0), red(PieceKind::General));
        board.place(sq(5, 8), red(PieceKind::Chariot));
        board.place(sq(4, 9), black(PieceKind::General));

        assert!(!is_in_check(&board, Color::Black));
        let state = classify(&board, Color::Black);
        assert_eq!(state, TerminalState::Stalemate);
        assert_eq!(state.winner(), None);
        assert!(state.is_over());
    }

    #[test]
    fn passive_face_off_forfeits_for_the_side_that_moved() {
        let mut game = GameState::from_board(Board::empty(), Color::Black);
        game.board.place(sq(4, 0), red(PieceKind::General));
        game.board.place(sq(4, 9), black(PieceKind::General));
        game.board.place(sq(4, 5), black(PieceKind::Soldier));
        game.board.place(sq(0, 0), red(PieceKind::Chariot));
        assert_eq!(game.classify(), TerminalState::Ongoing);

        // Black steps its soldier off the file; only a trusting apply allows it.
        apply_move_unchecked(&mut game, sq(4, 5), sq(4, 4)).expect("origin occupied");
        apply_move_unchecked(&mut game, sq(0, 0), sq(0, 1)).expect("origin occupied");
        apply_move_unchecked(&mut game, sq(4, 4), sq(3, 4)).expect("origin occupied");

        assert_eq!(game.side_to_move, Color::Red);
        assert_eq!(
            game.classify(),
            TerminalState::IllegalFacingGenerals { winner: Color::Red }
        );
    }

    #[test]
    fn missing_general_degrades_into_checkmate() {
        let mut board = Board::empty();
        board.place(sq(4, 0), red(PieceKind::General));
        board.place(sq(0, 9), black(PieceKind::Chariot));
        assert_eq!(
            classify(&board, Color::Black),
            TerminalState::Checkmate { winner: Color::Red }
        );
    }
}
