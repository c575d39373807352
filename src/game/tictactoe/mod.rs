//! Tic-tac-toe engine.
//!
//! Pure state transitions over a 3x3 board: win/draw detection, move
//! application and the heuristic computer opponent that plays `O`.
//! The human always plays `X` and moves first.

pub mod types;
pub mod board;
pub mod state;
pub mod computer;
pub mod render;
pub mod frame;


pub use types::*;
pub use board::check_winner;
pub use state::{create_initial_state, make_move, play_turn};
pub use computer::get_computer_move;
pub use frame::TicTacToe;
