use crate::config::game::{RPS_MAX_ROUNDS, RPS_WINNING_SCORE};
use crate::game::FrameGame;
use crate::game::random::RandomSource;
use crate::game::rps::render::render_round;
use crate::game::rps::state::{
    create_initial_state, determine_winner, is_game_over, make_choice, next_round, play_again,
};
use crate::game::rps::types::{Choice, GameState};

/// Rock-paper-scissors, best of five. Each frame either shows the three
/// choices, the result of the last round ("Next Round"), or the final score.
pub struct RockPaperScissors;

impl FrameGame for RockPaperScissors {
    type State = GameState;

    const SLUG: &'static str = "rps";
    const TITLE: &'static str = "Rock Paper Scissors";

    fn initial_state() -> GameState {
        create_initial_state()
    }

    fn is_consistent(state: &GameState) -> bool {
        let Some(played) = state.round.checked_sub(1) else {
            return false;
        };
        played <= RPS_MAX_ROUNDS
            && state.player_score <= RPS_WINNING_SCORE
            && state.computer_score <= RPS_WINNING_SCORE
            && state.player_score + state.computer_score <= played
            && state.player_choice.is_some() == state.computer_choice.is_some()
            && (state.player_choice.is_none() || played > 0)
            && state.result == determine_winner(state.player_choice, state.computer_choice)
            && state.game_over == is_game_over(state.round, state.player_score, state.computer_score)
    }

    fn on_button(state: &GameState, button: u32, rng: &mut impl RandomSource) -> GameState {
        if state.game_over {
            return if button == 1 { play_again() } else { *state };
        }
        if state.player_choice.is_some() {
            return if button == 1 { next_round(state) } else { *state };
        }
        match Choice::from_button(button) {
            Some(choice) => make_choice(state, choice, rng),
            None => *state,
        }
    }

    fn buttons(state: &GameState) -> Vec<String> {
        if state.game_over {
            vec!["Play Again".to_string()]
        } else if state.player_choice.is_none() {
            Choice::ALL
                .iter()
                .map(|choice| format!("{} {}", choice.emoji(), choice.label()))
                .collect()
        } else {
            vec!["Next Round".to_string()]
        }
    }

    fn render_svg(state: &GameState) -> String {
        render_round(state)
    }
}
