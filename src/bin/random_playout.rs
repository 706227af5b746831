//! Two-peer random self-play.
//!
//! Each game runs two `MatchSession`s, one per color, the way two browser
//! clients would: the mover plays locally and the other peer applies the move
//! as received. Both copies must agree after every ply. Occasionally the side
//! to move asks for a paired undo, which both peers accept.
//!
//! Usage: `random_playout [games] [seed] [max_plies]`; verbosity via `RUST_LOG`.

use std::env;
use std::io::Write;
use std::process::ExitCode;

use chrono::Local;
use log::{error, info, warn, LevelFilter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use xiangqi_core::session::match_session::MatchSession;
use xiangqi_core::utils::random_playout::choose_random_move;
use xiangqi_core::utils::render_game_state::render_game_state;
use xiangqi_core::Color;

const UNDO_PROBABILITY: f64 = 0.02;

fn parse_arg<T: std::str::FromStr>(args: &[String], idx: usize, default: T) -> T {
    args.get(idx)
        .and_then(|s| s.parse::<T>().ok())
        .unwrap_or(default)
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{:5}] {}",
                Local::now().format("%T%.3f"),
                record.level(),
                record.args(),
            )
        })
        .init();

    let args: Vec<String> = env::args().collect();
    let games: usize = parse_arg(&args, 1, 4usize);
    let seed: u64 = parse_arg(&args, 2, 2024u64);
    let max_plies: usize = parse_arg(&args, 3, 300usize);

    info!("random self-play: games={games} seed={seed} max_plies={max_plies}");
    let mut rng = StdRng::seed_from_u64(seed);

    for game in 1..=games {
        if !play_one(game, &mut rng, max_plies) {
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

/// Returns false if the two peers ever disagree.
fn play_one(game: usize, rng: &mut StdRng, max_plies: usize) -> bool {
    let mut red = MatchSession::new(Color::Red);
    let mut black = MatchSession::new(Color::Black);
    red.set_opponent_connected(true);
    black.set_opponent_connected(true);

    let mut plies = 0usize;
    while red.is_active() && plies < max_plies {
        let side = red.state().side_to_move;
        let (mover, receiver) = match side {
            Color::Red => (&mut red, &mut black),
            Color::Black => (&mut black, &mut red),
        };

        if mover.can_request_undo() && rng.random_bool(UNDO_PROBABILITY) {
            let undone = mover.accept_undo();
            receiver.accept_undo();
            info!("game {game}: {} took back {undone} plies", mover.local_color());
            continue;
        }

        let Some(mv) = choose_random_move(mover.state(), rng) else {
            warn!("game {game}: no legal move but session still active");
            break;
        };

        let outcome = match mover.play_local(mv.from, mv.to) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("game {game}: generated move {mv} was refused: {e}");
                return false;
            }
        };
        if let Err(e) = receiver.apply_remote(mv.from, mv.to) {
            error!("game {game}: remote peer refused {mv}: {e}");
            return false;
        }
        if red.state() != black.state() {
            error!("game {game}: peers diverged after {mv}");
            return false;
        }

        if outcome.gives_check {
            info!("game {game}: {} is in check", red.state().side_to_move);
        }
        plies += 1;
    }

    match red.result() {
        Some(result) => match result.winner {
            Some(winner) => info!("game {game}: {winner} wins by {} after {plies} plies", result.reason),
            None => info!("game {game}: draw by {} after {plies} plies", result.reason),
        },
        None => info!("game {game}: unfinished after {plies} plies"),
    }
    info!("game {game} final position:\n{}", render_game_state(red.state()));

    true
}
