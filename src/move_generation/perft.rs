//! Perft node counting over the legal move generator.
//!
//! Walks the game tree with `apply_move` / `undo_move`, so it exercises the
//! history stack as well as move generation. The counts from the starting
//! position are used as regression baselines.

use crate::game_state::xiangqi_types::*;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{all_legal_moves, has_any_legal_move};
use crate::xiangqi_errors::MoveResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> MoveResult<PerftCounts> {
    let mut scratch = game_state.clone();
    perft_recurse(&mut scratch, depth)
}

/// Node count below each root move, in generation order.
pub fn perft_divide(game_state: &GameState, depth: u8) -> MoveResult<Vec<(Move, usize)>> {
    let mut scratch = game_state.clone();
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }

    for mv in all_legal_moves(&scratch.board, scratch.side_to_move) {
        apply_move(&mut scratch, mv.from, mv.to)?;
        let below = perft_recurse(&mut scratch, depth - 1)?;
        undo_move(&mut scratch);
        out.push((mv, below.nodes));
    }

    Ok(out)
}

fn perft_recurse(game_state: &mut GameState, depth: u8) -> MoveResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in all_legal_moves(&game_state.board, game_state.side_to_move) {
        let record = apply_move(game_state, mv.from, mv.to)?;

        if depth == 1 {
            total.nodes += 1;
            if record.is_capture() {
                total.captures += 1;
            }
            let defender = game_state.side_to_move;
            if is_in_check(&game_state.board, defender) {
                total.checks += 1;
                if !has_any_legal_move(&game_state.board, defender) {
                    total.checkmates += 1;
                }
            }
        } else {
            total.merge(perft_recurse(game_state, depth - 1)?);
        }

        undo_move(game_state);
    }

    Ok(total)
}
