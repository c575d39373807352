use crate::config::game::{RPS_MAX_ROUNDS, RPS_WINNING_SCORE};
use crate::game::random::RandomSource;
use crate::game::rps::types::{Choice, GameState, RoundResult};

pub fn create_initial_state() -> GameState {
    GameState {
        player_choice: None,
        computer_choice: None,
        result: None,
        round: 1,
        player_score: 0,
        computer_score: 0,
        game_over: false,
    }
}

pub fn play_again() -> GameState {
    create_initial_state()
}

/// Uniform draw over the three choices.
pub fn random_choice(rng: &mut impl RandomSource) -> Choice {
    Choice::ALL[rng.pick_index(Choice::ALL.len())]
}

/// `None` if either side has not chosen yet.
pub fn determine_winner(player: Option<Choice>, computer: Option<Choice>) -> Option<RoundResult> {
    let (player, computer) = (player?, computer?);
    Some(if player == computer {
        RoundResult::Draw
    } else if player.beats(computer) {
        RoundResult::Win
    } else {
        RoundResult::Lose
    })
}

pub fn is_game_over(round: u32, player_score: u32, computer_score: u32) -> bool {
    round > RPS_MAX_ROUNDS || player_score >= RPS_WINNING_SCORE || computer_score >= RPS_WINNING_SCORE
}

/// Plays a round against a random computer choice. No-op once the game is over.
pub fn make_choice(state: &GameState, player_choice: Choice, rng: &mut impl RandomSource) -> GameState {
    if state.game_over {
        return *state;
    }
    let computer_choice = random_choice(rng);
    resolve_round(state, player_choice, computer_choice)
}

/// Plays a round with both choices known.
pub fn resolve_round(state: &GameState, player_choice: Choice, computer_choice: Choice) -> GameState {
    if state.game_over {
        return *state;
    }
    let result = determine_winner(Some(player_choice), Some(computer_choice));

    let mut player_score = state.player_score;
    let mut computer_score = state.computer_score;
    match result {
        Some(RoundResult::Win) => player_score += 1,
        Some(RoundResult::Lose) => computer_score += 1,
        Some(RoundResult::Draw) | None => {}
    }

    let round = state.round + 1;
    GameState {
        player_choice: Some(player_choice),
        computer_choice: Some(computer_choice),
        result,
        round,
        player_score,
        computer_score,
        game_over: is_game_over(round, player_score, computer_score),
    }
}

/// Clears the last round's choices so the player can choose again.
/// Round and scores are kept.
pub fn next_round(state: &GameState) -> GameState {
    if state.game_over {
        return *state;
    }
    GameState {
        player_choice: None,
        computer_choice: None,
        result: None,
        ..*state
    }
}
