//! Applying and reverting moves on a `GameState`.
//!
//! Policy for illegal requests: `apply_move` re-validates against
//! `legal_moves` and refuses with a `MoveError`, leaving the state untouched.
//! `apply_move_unchecked` is the trusting path for a controller that applies
//! a remote peer's move verbatim.

use log::{debug, warn};

use crate::game_state::xiangqi_types::*;
use crate::move_generation::legal_move_generator::is_legal_move;
use crate::xiangqi_errors::{MoveError, MoveResult};

pub fn apply_move(game_state: &mut GameState, from: Square, to: Square) -> MoveResult<MoveRecord> {
    let piece = game_state
        .board
        .piece_at(from)
        .ok_or(MoveError::EmptySquare(from))?;

    if piece.color != game_state.side_to_move {
        warn!("refused {from} -> {to}: {piece} moved out of turn");
        return Err(MoveError::WrongSide {
            square: from,
            side_to_move: game_state.side_to_move,
        });
    }

    if !is_legal_move(&game_state.board, from, to) {
        warn!("refused {from} -> {to}: not a legal move for {piece}");
        return Err(MoveError::IllegalMove { from, to });
    }

    Ok(commit_move(game_state, from, to, piece))
}

/// Applies the move without deriving legality. Returns `None` when `from` is
/// empty or equals `to`, in which case nothing changes.
pub fn apply_move_unchecked(
    game_state: &mut GameState,
    from: Square,
    to: Square,
) -> Option<MoveRecord> {
    if from == to {
        return None;
    }
    let piece = game_state.board.piece_at(from)?;
    Some(commit_move(game_state, from, to, piece))
}

/// Pops the last move and restores the board and side to move exactly.
pub fn undo_move(game_state: &mut GameState) -> Option<MoveRecord> {
    let record = game_state.history.pop()?;

    // Destination first, so the mover always ends up back on `from`.
    match record.captured_piece {
        Some(captured) => game_state.board.place(record.to, captured),
        None => {
            game_state.board.clear(record.to);
        }
    }
    game_state.board.place(record.from, record.moved_piece);
    game_state.side_to_move = game_state.side_to_move.opposite();

    debug!("undid {} {} -> {}", record.moved_piece, record.from, record.to);
    Some(record)
}

/// Reverts one full round (the opponent's reply and the requester's own move).
/// Returns how many plies were actually undone.
pub fn undo_round(game_state: &mut GameState) -> usize {
    (0..2)
        .take_while(|_| undo_move(game_state).is_some())
        .count()
}

/// Copy of `board` with the move played. Used for self-check simulation.
#[inline]
pub fn simulate_move(board: &Board, from: Square, to: Square) -> Board {
    let mut next = *board;
    move_piece(&mut next, from, to);
    next
}

/// Overwrites `to` with the piece on `from` and clears `from`. Returns the
/// piece that stood on `to`.
fn move_piece(board: &mut Board, from: Square, to: Square) -> Option<Piece> {
    let moving = board.clear(from)?;
    let captured = board.piece_at(to);
    board.place(to, moving);
    captured
}

fn commit_move(game_state: &mut GameState, from: Square, to: Square, piece: Piece) -> MoveRecord {
    let captured_piece = move_piece(&mut game_state.board, from, to);
    let record = MoveRecord {
        from,
        to,
        moved_piece: piece,
        captured_piece,
    };

    game_state.history.push(record);
    game_state.side_to_move = game_state.side_to_move.opposite();

    match captured_piece {
        Some(captured) => debug!("applied {piece} {from} -> {to} capturing {captured}"),
        None => debug!("applied {piece} {from} -> {to}"),
    }
    record
}

#[cfg(test)]
mod tests {
    use rand::prelude::IndexedRandom;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::move_generation::legal_move_generator::all_legal_moves;

    fn sq(file: i8, rank: i8) -> Square {
        Square::new(file, rank).expect("test square should be on the board")
    }

    #[test]
    fn capture_is_recorded_and_restored() {
        let mut game = GameState::new_game();
        let before = game.clone();

        let record = apply_move(&mut game, sq(1, 2), sq(1, 9)).expect("cannon capture is legal");
        assert_eq!(
            record.captured_piece,
            Some(Piece::new(Color::Black, PieceKind::Horse))
        );
        assert_eq!(game.side_to_move, Color::Black);
        assert_eq!(game.board.piece_at(sq(1, 2)), None);
        assert_eq!(game.history.len(), 1);

        assert_eq!(undo_move(&mut game), Some(record));
        assert_eq!(game, before);
    }

    #[test]
    fn refused_moves_leave_state_untouched() {
        let mut game = GameState::new_game();
        let before = game.clone();

        assert_eq!(
            apply_move(&mut game, sq(4, 4), sq(4, 5)),
            Err(MoveError::EmptySquare(sq(4, 4)))
        );
        assert!(matches!(
            apply_move(&mut game, sq(0, 6), sq(0, 5)),
            Err(MoveError::WrongSide { .. })
        ));
        assert_eq!(
            apply_move(&mut game, sq(0, 0), sq(0, 4)),
            Err(MoveError::IllegalMove {
                from: sq(0, 0),
                to: sq(0, 4)
            })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut game = GameState::new_game();
        assert_eq!(undo_move(&mut game), None);
        assert_eq!(undo_round(&mut game), 0);
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn undo_round_reverts_two_plies() {
        let mut game = GameState::new_game();
        apply_move(&mut game, sq(7, 2), sq(4, 2)).expect("legal");
        let after_first = game.clone();
        apply_move(&mut game, sq(1, 9), sq(2, 7)).expect("legal");
        apply_move(&mut game, sq(7, 0), sq(6, 2)).expect("legal");

        assert_eq!(undo_round(&mut game), 2);
        assert_eq!(game, after_first);
        assert_eq!(undo_round(&mut game), 1);
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn unchecked_apply_trusts_the_caller() {
        let mut game = GameState::new_game();
        assert_eq!(apply_move_unchecked(&mut game, sq(4, 4), sq(4, 5)), None);

        let record = apply_move_unchecked(&mut game, sq(4, 3), sq(4, 6)).expect("origin occupied");
        assert_eq!(
            record.captured_piece,
            Some(Piece::new(Color::Black, PieceKind::Soldier))
        );
        assert_eq!(game.side_to_move, Color::Black);
        undo_move(&mut game);
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn unchecked_apply_refuses_a_move_onto_its_own_square() {
        let mut game = GameState::new_game();
        assert_eq!(apply_move_unchecked(&mut game, sq(4, 0), sq(4, 0)), None);
        assert_eq!(game, GameState::new_game());
        assert_eq!(undo_move(&mut game), None);
        assert_eq!(
            game.board.piece_at(sq(4, 0)),
            Some(Piece::new(Color::Red, PieceKind::General))
        );
    }

    #[test]
    fn undo_puts_the_mover_back_even_for_a_self_targeted_record() {
        let mut game = GameState::new_game();
        let general = Piece::new(Color::Red, PieceKind::General);
        game.history.push(MoveRecord {
            from: sq(4, 0),
            to: sq(4, 0),
            moved_piece: general,
            captured_piece: None,
        });
        game.side_to_move = Color::Black;

        undo_move(&mut game);
        assert_eq!(game.board.piece_at(sq(4, 0)), Some(general));
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn apply_then_undo_is_identity_along_random_games() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..8 {
            let mut game = GameState::new_game();
            for _ in 0..60 {
                let moves = all_legal_moves(&game.board, game.side_to_move);
                let Some(mv) = moves.choose(&mut rng).copied() else {
                    break;
                };

                for candidate in &moves {
                    let before = game.clone();
                    apply_move(&mut game, candidate.from, candidate.to).expect("generated move is legal");
                    undo_move(&mut game);
                    assert_eq!(game, before);
                }

                apply_move(&mut game, mv.from, mv.to).expect("generated move is legal");
            }
        }
    }
}
