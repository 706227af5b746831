//! Crate root module declarations for the Xiangqi core engine.
//!
//! Exposes the board and piece model, the rule engine, the move history and
//! the per-peer match session so controllers, tests and tooling can import
//! stable module paths. The most used entry points are re-exported here.

pub mod xiangqi_errors;

pub mod game_state {
    pub mod board;
    pub mod game_state;
    pub mod move_record;
    pub mod xiangqi_rules;
    pub mod xiangqi_types;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_advisor;
    pub mod legal_moves_cannon;
    pub mod legal_moves_chariot;
    pub mod legal_moves_elephant;
    pub mod legal_moves_general;
    pub mod legal_moves_horse;
    pub mod legal_moves_soldier;
    pub mod perft;
    pub mod pseudo_legal;
    pub mod terminal_state;
}

pub mod session {
    pub mod match_session;
}

pub mod utils {
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod random_playout;
    pub mod render_game_state;
}

pub use game_state::board::{initial_board, Board};
pub use game_state::game_state::GameState;
pub use game_state::move_record::MoveRecord;
pub use game_state::xiangqi_types::{Color, Move, Piece, PieceKind, Square};
pub use move_generation::legal_move_apply::{apply_move, apply_move_unchecked, undo_move, undo_round};
pub use move_generation::legal_move_checks::is_in_check;
pub use move_generation::legal_move_generator::{all_legal_moves, legal_moves};
pub use move_generation::legal_move_shared::count_on_path;
pub use move_generation::pseudo_legal::is_pseudo_legal;
pub use move_generation::terminal_state::{classify, TerminalState};
pub use xiangqi_errors::{FenError, MoveError};
