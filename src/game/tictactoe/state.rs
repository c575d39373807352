use crate::game::random::RandomSource;
use crate::game::tictactoe::board::check_winner;
use crate::game::tictactoe::computer::get_computer_move;
use crate::game::tictactoe::types::{Board, GameState, Mark, Position};

/// Fresh game: empty board, `X` to move.
pub fn create_initial_state() -> GameState {
    GameState {
        board: Board::default(),
        current_player: Mark::X,
        winner: None,
        game_over: false,
    }
}

/// Places the current player's mark at (`row`, `col`).
///
/// Returns the input unchanged if the game is over or the cell is occupied or
/// off the board. The player who ends the game stays `current_player` in the
/// terminal snapshot.
pub fn make_move(state: &GameState, row: usize, col: usize) -> GameState {
    let Some(pos) = Position::new(row, col) else {
        return *state;
    };
    if state.game_over || state.board.get(pos).is_some() {
        return *state;
    }

    let board = state.board.with_mark(pos, state.current_player);
    let winner = check_winner(&board);
    let game_over = winner.is_some();
    let current_player = if game_over {
        state.current_player
    } else {
        state.current_player.opponent()
    };

    GameState {
        board,
        current_player,
        winner,
        game_over,
    }
}

/// One frame turn: the human (`X`) move at `pos`, then the computer reply.
///
/// Nothing happens unless it is `X`'s turn and `pos` is free.
pub fn play_turn(state: &GameState, pos: Position, rng: &mut impl RandomSource) -> GameState {
    if state.game_over || state.current_player != Mark::X || state.board.get(pos).is_some() {
        return *state;
    }

    let next = make_move(state, pos.row, pos.col);
    if next.game_over || next.current_player != Mark::O {
        return next;
    }
    match get_computer_move(&next, rng) {
        Some(reply) => make_move(&next, reply.row, reply.col),
        None => next,
    }
}
