//! Owned game state: board, side to move and the applied-move history.
//!
//! `GameState` is the single mutable value a peer holds for a game. It is
//! changed only through `apply_move` / `undo_move`, which keep the history
//! invariant: replaying `history` from the starting layout reproduces `board`
//! and `side_to_move` alternates with every applied move.

use crate::game_state::xiangqi_types::*;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::terminal_state::{classify, TerminalState};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::xiangqi_errors::{FenResult, MoveResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Starting layout, Red to move, empty history.
    #[inline]
    pub fn new_game() -> Self {
        Self::from_board(Board::initial(), Color::Red)
    }

    /// Arbitrary position with an empty history. Used for tests and analysis;
    /// the history invariant then holds relative to `board` instead of the
    /// starting layout.
    #[inline]
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> FenResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Rebuilds a game from the starting layout by applying `moves` in order.
    /// Stops at the first illegal move.
    pub fn replay(moves: &[Move]) -> MoveResult<Self> {
        let mut state = Self::new_game();
        for mv in moves {
            apply_move(&mut state, mv.from, mv.to)?;
        }
        Ok(state)
    }

    #[inline]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    pub fn moves_played(&self) -> Vec<Move> {
        self.history.iter().map(MoveRecord::as_move).collect()
    }

    #[inline]
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        legal_moves(&self.board, from)
    }

    #[inline]
    pub fn in_check(&self) -> bool {
        is_in_check(&self.board, self.side_to_move)
    }

    #[inline]
    pub fn classify(&self) -> TerminalState {
        classify(&self.board, self.side_to_move)
    }

    #[inline]
    pub fn apply_move(&mut self, from: Square, to: Square) -> MoveResult<MoveRecord> {
        apply_move(self, from, to)
    }

    #[inline]
    pub fn undo_move(&mut self) -> Option<MoveRecord> {
        undo_move(self)
    }
}
