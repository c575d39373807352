//! Rock-paper-scissors engine.
//!
//! Best of five against a uniformly random computer: the game ends after the
//! fifth round or as soon as one side reaches three points.

pub mod types;
pub mod state;
pub mod render;
pub mod frame;

#[cfg(test)]
mod tests;

pub use types::*;
pub use state::{
    create_initial_state, determine_winner, make_choice, next_round, play_again, random_choice,
    resolve_round,
};
pub use frame::RockPaperScissors;
