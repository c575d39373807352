//! Computer opponent.
//!
//! A fixed priority list rather than a full search: win now, block the
//! opponent, take the center, take a corner, take anything. Ties inside a tier
//! are broken by the injected random source.

use crate::game::random::RandomSource;
use crate::game::tictactoe::board::completes_line;
use crate::game::tictactoe::types::{GameState, Mark, Position};

/// Picks the move for `O`, or `None` if it is not `O`'s turn in an active game.
pub fn get_computer_move(state: &GameState, rng: &mut impl RandomSource) -> Option<Position> {
    if state.game_over || state.current_player != Mark::O {
        return None;
    }
    let free = state.board.empty_positions();

    let winning = lines_completed_by(state, &free, Mark::O);
    if let Some(pos) = rng.choose(&winning) {
        return Some(pos);
    }

    let blocking = lines_completed_by(state, &free, Mark::X);
    if let Some(pos) = rng.choose(&blocking) {
        return Some(pos);
    }

    if free.contains(&Position::CENTER) {
        return Some(Position::CENTER);
    }

    let corners: Vec<Position> = Position::CORNERS
        .into_iter()
        .filter(|corner| free.contains(corner))
        .collect();
    rng.choose(&corners).or_else(|| rng.choose(&free))
}

fn lines_completed_by(state: &GameState, free: &[Position], mark: Mark) -> Vec<Position> {
    free.iter()
        .copied()
        .filter(|&pos| completes_line(&state.board, pos, mark))
        .collect()
}
