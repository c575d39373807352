use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

use super::*;
use crate::game::FrameGame;
use crate::game::random::testing::Scripted;

const ROCK: usize = 0;
const PAPER: usize = 1;
const SCISSORS: usize = 2;

#[test]
fn test_initial_state() {
    let state = create_initial_state();
    assert_eq!(state.round, 1);
    assert_eq!((state.player_score, state.computer_score), (0, 0));
    assert_eq!((state.player_choice, state.computer_choice, state.result), (None, None, None));
    assert!(!state.game_over);
    assert_eq!(play_again(), state);
}

#[test]
fn test_determine_winner() {
    assert_eq!(determine_winner(Some(Choice::Rock), Some(Choice::Scissors)), Some(RoundResult::Win));
    assert_eq!(determine_winner(Some(Choice::Scissors), Some(Choice::Rock)), Some(RoundResult::Lose));
    assert_eq!(determine_winner(Some(Choice::Paper), Some(Choice::Paper)), Some(RoundResult::Draw));
    assert_eq!(determine_winner(Some(Choice::Paper), Some(Choice::Rock)), Some(RoundResult::Win));
    assert_eq!(determine_winner(Some(Choice::Scissors), Some(Choice::Paper)), Some(RoundResult::Win));
    assert_eq!(determine_winner(None, Some(Choice::Rock)), None);
    assert_eq!(determine_winner(Some(Choice::Rock), None), None);
}

#[test]
fn test_forced_computer_choice() {
    let mut rng = Scripted::new(&[SCISSORS]);
    let state = make_choice(&create_initial_state(), Choice::Rock, &mut rng);

    assert_eq!(state.computer_choice, Some(Choice::Scissors));
    assert_eq!(state.result, Some(RoundResult::Win));
    assert_eq!(state.player_score, 1);
    assert_eq!(state.computer_score, 0);
    assert_eq!(state.round, 2);
    assert!(!state.game_over);
}

#[test]
fn test_loss_and_draw_scoring() {
    let lost = resolve_round(&create_initial_state(), Choice::Paper, Choice::Scissors);
    assert_eq!(lost.result, Some(RoundResult::Lose));
    assert_eq!((lost.player_score, lost.computer_score), (0, 1));

    let drawn = resolve_round(&lost, Choice::Rock, Choice::Rock);
    assert_eq!(drawn.result, Some(RoundResult::Draw));
    assert_eq!((drawn.player_score, drawn.computer_score), (0, 1));
    assert_eq!(drawn.round, 3);
}

#[test]
fn test_three_wins_end_the_game_early() {
    let mut rng = Scripted::new(&[SCISSORS, SCISSORS, SCISSORS]);
    let mut state = create_initial_state();
    for _ in 0..3 {
        state = make_choice(&state, Choice::Rock, &mut rng);
    }
    assert!(state.game_over);
    assert_eq!(state.player_score, 3);
    assert_eq!(state.round, 4);
}

#[test]
fn test_five_draws_end_the_game() {
    let mut state = create_initial_state();
    for _ in 0..5 {
        assert!(!state.game_over);
        state = resolve_round(&state, Choice::Paper, Choice::Paper);
    }
    assert!(state.game_over);
    assert_eq!(state.round, 6);
    assert_eq!((state.player_score, state.computer_score), (0, 0));
}

#[test]
fn test_choice_after_game_over_is_noop() {
    let mut rng = Scripted::new(&[ROCK, ROCK, ROCK, ROCK]);
    let mut state = create_initial_state();
    for _ in 0..3 {
        state = make_choice(&state, Choice::Scissors, &mut rng);
    }
    assert!(state.game_over);
    assert_eq!(state.computer_score, 3);
    assert_eq!(make_choice(&state, Choice::Paper, &mut rng), state);
    assert_eq!(next_round(&state), state);
}

#[test]
fn test_next_round_keeps_scores() {
    let state = resolve_round(&create_initial_state(), Choice::Rock, Choice::Scissors);
    let next = next_round(&state);

    assert_eq!((next.player_choice, next.computer_choice, next.result), (None, None, None));
    assert_eq!(next.round, 2);
    assert_eq!(next.player_score, 1);
}

#[test]
fn test_random_choice_follows_source() {
    let mut rng = Scripted::new(&[ROCK, PAPER, SCISSORS]);
    assert_eq!(random_choice(&mut rng), Choice::Rock);
    assert_eq!(random_choice(&mut rng), Choice::Paper);
    assert_eq!(random_choice(&mut rng), Choice::Scissors);
}

#[test]
fn test_frame_flow() {
    let mut rng = Scripted::new(&[PAPER]);
    let initial = RockPaperScissors::initial_state();
    assert_eq!(RockPaperScissors::buttons(&initial).len(), 3);

    // Button 3 is scissors, which beats the computer's paper.
    let played = RockPaperScissors::on_button(&initial, 3, &mut rng);
    assert_eq!(played.player_choice, Some(Choice::Scissors));
    assert_eq!(played.result, Some(RoundResult::Win));
    assert_eq!(RockPaperScissors::buttons(&played), vec!["Next Round".to_string()]);

    // Only "Next Round" is live while a result is shown.
    assert_eq!(RockPaperScissors::on_button(&played, 2, &mut rng), played);
    let next = RockPaperScissors::on_button(&played, 1, &mut rng);
    assert_eq!(next, next_round(&played));

    let mut over = next;
    while !over.game_over {
        over = resolve_round(&over, Choice::Rock, Choice::Paper);
    }
    assert_eq!(RockPaperScissors::buttons(&over), vec!["Play Again".to_string()]);
    assert_eq!(RockPaperScissors::on_button(&over, 1, &mut rng), create_initial_state());
}

#[test]
fn test_consistency_check() {
    let played = resolve_round(&create_initial_state(), Choice::Rock, Choice::Scissors);
    assert!(RockPaperScissors::is_consistent(&create_initial_state()));
    assert!(RockPaperScissors::is_consistent(&played));
    assert!(RockPaperScissors::is_consistent(&next_round(&played)));

    assert!(!RockPaperScissors::is_consistent(&GameState { round: 0, ..create_initial_state() }));
    assert!(!RockPaperScissors::is_consistent(&GameState { player_score: 4, ..played }));
    assert!(!RockPaperScissors::is_consistent(&GameState { result: Some(RoundResult::Lose), ..played }));
    assert!(!RockPaperScissors::is_consistent(&GameState { game_over: true, ..played }));
}

#[test]
fn test_wire_format() {
    let state = resolve_round(&create_initial_state(), Choice::Rock, Choice::Scissors);
    assert_eq!(
        serde_json::to_value(state).unwrap(),
        serde_json::json!({
            "playerChoice": "rock",
            "computerChoice": "scissors",
            "result": "win",
            "round": 2,
            "playerScore": 1,
            "computerScore": 0,
            "gameOver": false,
        })
    );
}

fn any_choice() -> impl Strategy<Value = Choice> {
    prop_oneof![Just(Choice::Rock), Just(Choice::Paper), Just(Choice::Scissors)]
}

proptest! {
    #[test]
    fn prop_game_ends_within_five_rounds(
        choices in prop::collection::vec(any_choice(), 5),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = create_initial_state();
        for choice in &choices {
            if state.game_over {
                break;
            }
            state = make_choice(&state, *choice, &mut rng);
            prop_assert!(RockPaperScissors::is_consistent(&state));
        }
        prop_assert!(state.game_over);
        prop_assert!(state.round <= 6);

        let after = make_choice(&state, Choice::Rock, &mut rng);
        prop_assert_eq!(after, state);
    }
}
