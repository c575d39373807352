use crate::game::FrameGame;
use crate::game::random::RandomSource;
use crate::game::tictactoe::board::check_winner;
use crate::game::tictactoe::render::render_board;
use crate::game::tictactoe::state::{create_initial_state, play_turn};
use crate::game::tictactoe::types::{GameState, Mark, Position};

/// Tic-tac-toe against the computer, one frame per human move.
pub struct TicTacToe;

impl FrameGame for TicTacToe {
    type State = GameState;

    const SLUG: &'static str = "tictactoe";
    const TITLE: &'static str = "Tic-Tac-Toe";

    fn initial_state() -> GameState {
        create_initial_state()
    }

    fn is_consistent(state: &GameState) -> bool {
        let x = state.board.count(Mark::X);
        let o = state.board.count(Mark::O);
        // X moves first and the computer answers within the same turn, so an
        // active game is always X's move. The finishing player stays current.
        let marks_ok = if state.game_over {
            (x == o || x == o + 1) && (x == o + 1) == (state.current_player == Mark::X)
        } else {
            x == o && state.current_player == Mark::X
        };

        marks_ok && state.winner == check_winner(&state.board) && state.game_over == state.winner.is_some()
    }

    fn on_button(state: &GameState, button: u32, rng: &mut impl RandomSource) -> GameState {
        if state.game_over {
            return if button == 1 { create_initial_state() } else { *state };
        }
        match Position::from_button(button) {
            Some(pos) => play_turn(state, pos, rng),
            None => *state,
        }
    }

    fn buttons(state: &GameState) -> Vec<String> {
        if state.game_over {
            return vec!["Play Again".to_string()];
        }
        Position::all()
            .map(|pos| match state.board.get(pos) {
                Some(Mark::X) => "X".to_string(),
                Some(Mark::O) => "O".to_string(),
                None => pos.button().to_string(),
            })
            .collect()
    }

    fn render_svg(state: &GameState) -> String {
        render_board(state)
    }
}
