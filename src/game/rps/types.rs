use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Rock beats scissors, scissors beats paper, paper beats rock.
    pub fn beats(self, other: Choice) -> bool {
        matches!(
            (self, other),
            (Choice::Rock, Choice::Scissors)
                | (Choice::Scissors, Choice::Paper)
                | (Choice::Paper, Choice::Rock)
        )
    }

    /// Button 1 is rock, 2 paper, 3 scissors.
    pub fn from_button(index: u32) -> Option<Self> {
        match index {
            1 => Some(Choice::Rock),
            2 => Some(Choice::Paper),
            3 => Some(Choice::Scissors),
            _ => None,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Choice::Rock => "👊",
            Choice::Paper => "✋",
            Choice::Scissors => "✌️",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        }
    }
}

/// Result of a round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundResult {
    Win,
    Lose,
    Draw,
}

pub fn result_text(result: Option<RoundResult>) -> &'static str {
    match result {
        Some(RoundResult::Win) => "You win!",
        Some(RoundResult::Lose) => "You lose!",
        Some(RoundResult::Draw) => "It's a draw!",
        None => "Choose your move!",
    }
}

/// One rock-paper-scissors snapshot. `round` is the round about to be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub player_choice: Option<Choice>,
    pub computer_choice: Option<Choice>,
    pub result: Option<RoundResult>,
    pub round: u32,
    pub player_score: u32,
    pub computer_score: u32,
    pub game_over: bool,
}
