//! Per-peer match lifecycle around a `GameState`.
//!
//! Each peer owns one `MatchSession` for its local color. The session turns
//! transport events (a remote move, an accepted undo, a game-over notice, a
//! presence change) into engine calls and tracks whether the game is still
//! running. It performs no I/O: whatever carries `{from, to}`, `{accepted}`
//! and `{winner, reason}` payloads between peers calls into it.

use std::fmt;

use log::{debug, info};

use crate::game_state::xiangqi_types::*;
use crate::move_generation::legal_move_apply::{apply_move, apply_move_unchecked, undo_round};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::terminal_state::{classify, TerminalState};
use crate::xiangqi_errors::{MoveError, MoveResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Re-derive legality of moves received from the opponent. Off by default:
    /// the remote peer is trusted to run the same rules.
    pub validate_remote_moves: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    Checkmate,
    Stalemate,
    IllegalFacingGenerals,
    Surrender,
    OpponentDisconnected,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            EndReason::Checkmate => "checkmate",
            EndReason::Stalemate => "stalemate",
            EndReason::IllegalFacingGenerals => "illegal move (flying general)",
            EndReason::Surrender => "surrender",
            EndReason::OpponentDisconnected => "opponent disconnected",
        };
        write!(f, "{text}")
    }
}

/// Final result. `winner == None` is a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Option<Color>,
    pub reason: EndReason,
}

impl GameResult {
    fn from_terminal(state: TerminalState) -> Option<Self> {
        let reason = match state {
            TerminalState::Ongoing => return None,
            TerminalState::Checkmate { .. } => EndReason::Checkmate,
            TerminalState::Stalemate => EndReason::Stalemate,
            TerminalState::IllegalFacingGenerals { .. } => EndReason::IllegalFacingGenerals,
        };
        Some(Self {
            winner: state.winner(),
            reason,
        })
    }
}

/// What happened after a move was applied through the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub record: MoveRecord,
    pub terminal: TerminalState,
    /// The side now to move is in check (and the game goes on).
    pub gives_check: bool,
}

#[derive(Debug, Clone)]
pub struct MatchSession {
    state: GameState,
    local_color: Color,
    opponent_connected: bool,
    result: Option<GameResult>,
    config: SessionConfig,
}

impl MatchSession {
    pub fn new(local_color: Color) -> Self {
        Self::with_config(local_color, SessionConfig::default())
    }

    pub fn with_config(local_color: Color, config: SessionConfig) -> Self {
        Self::from_state(local_color, GameState::new_game(), config)
    }

    /// Session over an existing game, e.g. one rebuilt with `GameState::replay`.
    pub fn from_state(local_color: Color, state: GameState, config: SessionConfig) -> Self {
        Self {
            state,
            local_color,
            opponent_connected: false,
            result: None,
            config,
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn local_color(&self) -> Color {
        self.local_color
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.result.is_none()
    }

    #[inline]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[inline]
    pub fn opponent_connected(&self) -> bool {
        self.opponent_connected
    }

    pub fn is_my_turn(&self) -> bool {
        self.is_active() && self.opponent_connected && self.state.side_to_move == self.local_color
    }

    /// Presence update. Losing a connected opponent mid-game wins it for the
    /// local player.
    pub fn set_opponent_connected(&mut self, connected: bool) {
        let was_connected = self.opponent_connected;
        self.opponent_connected = connected;

        if !was_connected && connected {
            info!("opponent connected");
        } else if was_connected && !connected && self.is_active() {
            info!("opponent disconnected");
            self.finish(GameResult {
                winner: Some(self.local_color),
                reason: EndReason::OpponentDisconnected,
            });
        }
    }

    /// Legal destinations for a local piece on `square`; empty for anything
    /// else or when it is not the local player's turn.
    pub fn select(&self, square: Square) -> Vec<Square> {
        let own_piece = self
            .state
            .board
            .piece_at(square)
            .is_some_and(|piece| piece.color == self.local_color);
        if !self.is_my_turn() || !own_piece {
            return Vec::new();
        }
        legal_moves(&self.state.board, square)
    }

    pub fn play_local(&mut self, from: Square, to: Square) -> MoveResult<MoveOutcome> {
        if !self.is_active() {
            return Err(MoveError::GameOver);
        }
        if !self.is_my_turn() {
            return Err(MoveError::NotYourTurn);
        }

        let record = apply_move(&mut self.state, from, to)?;
        Ok(self.after_move(record))
    }

    /// Applies the opponent's move as received. Unless configured otherwise
    /// the move is trusted and only an empty origin or a move onto its own
    /// square is refused.
    pub fn apply_remote(&mut self, from: Square, to: Square) -> MoveResult<MoveOutcome> {
        if !self.is_active() {
            return Err(MoveError::GameOver);
        }

        let record = if self.config.validate_remote_moves {
            apply_move(&mut self.state, from, to)?
        } else if from == to {
            return Err(MoveError::IllegalMove { from, to });
        } else {
            apply_move_unchecked(&mut self.state, from, to).ok_or(MoveError::EmptySquare(from))?
        };
        Ok(self.after_move(record))
    }

    /// The local player may ask for an undo on their own turn once anything
    /// has been played.
    pub fn can_request_undo(&self) -> bool {
        self.is_my_turn() && !self.state.history.is_empty()
    }

    /// Both peers call this once the undo request is accepted. Reverts the
    /// opponent's reply and the requester's move; returns the plies undone.
    pub fn accept_undo(&mut self) -> usize {
        if !self.is_active() {
            return 0;
        }
        let undone = undo_round(&mut self.state);
        debug!("undo accepted, reverted {undone} plies");
        undone
    }

    pub fn surrender(&mut self) {
        self.finish(GameResult {
            winner: Some(self.local_color.opposite()),
            reason: EndReason::Surrender,
        });
    }

    /// Game-over notice from the opponent. Ignored once a result exists.
    pub fn remote_game_over(&mut self, winner: Option<Color>, reason: EndReason) {
        self.finish(GameResult { winner, reason });
    }

    fn after_move(&mut self, record: MoveRecord) -> MoveOutcome {
        let side = self.state.side_to_move;
        let terminal = classify(&self.state.board, side);
        let gives_check = !terminal.is_over() && is_in_check(&self.state.board, side);

        if let Some(result) = GameResult::from_terminal(terminal) {
            self.finish(result);
        }

        MoveOutcome {
            record,
            terminal,
            gives_check,
        }
    }

    fn finish(&mut self, result: GameResult) {
        if self.result.is_some() {
            return;
        }
        match result.winner {
            Some(winner) => info!("game over: {winner} wins by {}", result.reason),
            None => info!("game over: draw by {}", result.reason),
        }
        self.result = Some(result);
    }
}
