//! Seeded random playouts.
//!
//! Plays uniformly random legal moves until the game ends or a ply limit is
//! hit. Used to drive property checks over many reachable positions and as
//! the workload of the demo binary and benches.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::game_state::xiangqi_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::move_generation::terminal_state::{classify, TerminalState};
use crate::xiangqi_errors::MoveResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutReport {
    pub plies: usize,
    pub captures: usize,
    /// `Ongoing` when the ply limit stopped the game.
    pub terminal: TerminalState,
}

/// Picks one legal move of the side to move, or `None` when there is none.
pub fn choose_random_move<R: Rng + ?Sized>(game_state: &GameState, rng: &mut R) -> Option<Move> {
    all_legal_moves(&game_state.board, game_state.side_to_move)
        .choose(rng)
        .copied()
}

pub fn random_playout<R: Rng + ?Sized>(
    game_state: &mut GameState,
    rng: &mut R,
    max_plies: usize,
) -> MoveResult<PlayoutReport> {
    let mut report = PlayoutReport {
        plies: 0,
        captures: 0,
        terminal: TerminalState::Ongoing,
    };

    while report.plies < max_plies {
        report.terminal = classify(&game_state.board, game_state.side_to_move);
        if report.terminal.is_over() {
            break;
        }

        let Some(mv) = choose_random_move(game_state, rng) else {
            break;
        };
        let record = apply_move(game_state, mv.from, mv.to)?;
        report.plies += 1;
        if record.is_capture() {
            report.captures += 1;
        }
    }

    debug!(
        "playout finished after {} plies ({} captures): {}",
        report.plies, report.captures, report.terminal
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::move_generation::legal_move_apply::undo_move;
    use crate::move_generation::legal_move_checks::is_in_check;
    use crate::move_generation::legal_move_generator::legal_moves;

    #[test]
    fn playouts_replay_from_history_and_unwind_to_start() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..4 {
            let mut game = GameState::new_game();
            let report = random_playout(&mut game, &mut rng, 120).expect("playout should run");
            assert_eq!(report.plies, game.ply());

            let replayed = GameState::replay(&game.moves_played()).expect("history should replay");
            assert_eq!(replayed, game);

            while undo_move(&mut game).is_some() {}
            assert_eq!(game, GameState::new_game());
        }
    }

    #[test]
    fn reachable_positions_never_offer_self_check() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = GameState::new_game();
        for _ in 0..6 {
            let report = random_playout(&mut game, &mut rng, 15).expect("playout should run");

            for (from, piece) in game.board.iter_pieces() {
                for to in legal_moves(&game.board, from) {
                    let mut next = game.board;
                    next.clear(from);
                    next.place(to, piece);
                    assert!(!is_in_check(&next, piece.color));
                }
            }

            if report.terminal.is_over() {
                break;
            }
        }
    }

    #[test]
    fn zero_ply_limit_plays_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = GameState::new_game();
        let report = random_playout(&mut game, &mut rng, 0).expect("playout should run");
        assert_eq!(report.plies, 0);
        assert_eq!(game, GameState::new_game());
    }
}
