/// Game configuration constants.
/// 
/// This module defines the gameplay parameters of both game variants and
/// the dimensions of the image rendered for every frame.
pub const BOARD_SIZE: usize = 3; // Side length of the tic-tac-toe board.

/// Number of rounds in a rock-paper-scissors game.
pub const RPS_MAX_ROUNDS: u32 = 5;

/// Score that ends a rock-paper-scissors game before the last round.
pub const RPS_WINNING_SCORE: u32 = 3;

/// Side length (in pixels) of the square frame image.
pub const IMAGE_SIZE: u32 = 600;
