//! Terminal-oriented board renderer.
//!
//! Draws the board with traditional glyphs, Black's baseline on top, for
//! debugging, tests and the demo binary.

use crate::game_state::xiangqi_types::*;

/// Render the board, rank 9 first, with file and rank labels.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("   0  1  2  3  4  5  6  7  8\n");

    for rank in (0..BOARD_RANKS).rev() {
        out.push(char::from(b'0' + rank as u8));
        out.push(' ');

        for file in 0..BOARD_FILES {
            match board.piece_at_xy(file, rank) {
                Some(piece) => out.push(piece.glyph()),
                None => out.push_str(" ·"),
            }

            if file < BOARD_FILES - 1 {
                out.push(' ');
            }
        }

        out.push('\n');
        if rank == 5 {
            out.push_str("  ~~~~~~~~~~~~~~~~~~~~~~~~~~\n");
        }
    }

    out.push_str("   0  1  2  3  4  5  6  7  8");

    out
}

/// Board plus a status line naming the side to move and the last move.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = render_board(&game_state.board);
    out.push('\n');
    out.push_str(&format!("{} to move", game_state.side_to_move));

    if let Some(last) = game_state.last_move() {
        out.push_str(&format!(
            " - ({}) {} {} -> {}",
            game_state.ply(),
            last.moved_piece.glyph(),
            last.from,
            last.to
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{render_board, render_game_state};
    use crate::game_state::xiangqi_types::*;

    #[test]
    fn render_shows_both_generals_and_the_river() {
        let text = render_board(&Board::initial());
        assert!(text.contains('帥'));
        assert!(text.contains('將'));
        assert!(text.contains('~'));
        assert_eq!(text.lines().count(), 13);
    }

    #[test]
    fn status_line_names_side_and_last_move() {
        let mut game = GameState::new_game();
        let from = Square::new(1, 2).expect("valid square");
        let to = Square::new(4, 2).expect("valid square");
        game.apply_move(from, to).expect("legal");
        let text = render_game_state(&game);
        assert!(text.ends_with("black to move - (1) 炮 (1, 2) -> (4, 2)"));
    }
}
