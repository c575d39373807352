//! Game engines.
//!
//! Each variant is a set of pure state-transition functions over a small,
//! serializable state value. [`FrameGame`] is the seam the HTTP layer drives
//! them through.

pub mod random;
pub mod tictactoe;
pub mod rps;

use std::fmt;

use serde::{Serialize, de::DeserializeOwned};

use crate::game::random::RandomSource;

/// A game playable through a stateless frame: the client echoes the state
/// back with the index of the button it pressed, and gets the next state.
pub trait FrameGame {
    type State: Serialize + DeserializeOwned + Copy + fmt::Debug;

    /// Path segment of the game's routes.
    const SLUG: &'static str;
    const TITLE: &'static str;

    fn initial_state() -> Self::State;

    /// Rejects decoded states no sequence of transitions can produce.
    fn is_consistent(state: &Self::State) -> bool;

    /// Applies the whole turn triggered by pressing button `button` (1-based).
    fn on_button(state: &Self::State, button: u32, rng: &mut impl RandomSource) -> Self::State;

    /// Button labels; label `i` belongs to button `i + 1`.
    fn buttons(state: &Self::State) -> Vec<String>;

    /// SVG image of the state.
    fn render_svg(state: &Self::State) -> String;
}

/// The game variants the server can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    TicTacToe,
    RockPaperScissors,
}

impl GameKind {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug.trim().to_ascii_lowercase().as_str() {
            "tictactoe" | "tic-tac-toe" => Some(GameKind::TicTacToe),
            "rps" | "rock-paper-scissors" => Some(GameKind::RockPaperScissors),
            _ => None,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            GameKind::TicTacToe => tictactoe::TicTacToe::SLUG,
            GameKind::RockPaperScissors => rps::RockPaperScissors::SLUG,
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
