use serde::{Serialize, Deserialize};

use crate::config::game::BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A board cell: empty or holding a mark.
pub type Cell = Option<Mark>;

/// Outcome of a finished game. An unfinished game has no winner (`None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    X,
    O,
    #[serde(rename = "draw")]
    Draw,
}

impl From<Mark> for Winner {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Winner::X,
            Mark::O => Winner::O,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const CENTER: Position = Position { row: 1, col: 1 };

    pub const CORNERS: [Position; 4] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 2 },
    ];

    /// Returns the position if it lies on the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Position { row, col })
    }

    /// Maps a frame button (1-9, row-major) to its cell.
    pub fn from_button(index: u32) -> Option<Self> {
        let index = usize::try_from(index).ok()?.checked_sub(1)?;
        Position::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    /// Frame button index of this cell (inverse of [`Position::from_button`]).
    pub fn button(self) -> u32 {
        (self.row * BOARD_SIZE + self.col + 1) as u32
    }

    /// Every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

/// The 3x3 grid. Never mutated in place: placing a mark yields a new board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board(pub [[Cell; BOARD_SIZE]; BOARD_SIZE]);

impl Board {
    pub fn get(&self, pos: Position) -> Cell {
        self.0[pos.row][pos.col]
    }

    /// Returns a copy of the board with `mark` placed at `pos`.
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Board {
        let mut cells = self.0;
        cells[pos.row][pos.col] = Some(mark);
        Board(cells)
    }

    pub fn empty_positions(&self) -> Vec<Position> {
        Position::all().filter(|&pos| self.get(pos).is_none()).collect()
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().flatten().all(Option::is_some)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().flatten().filter(|&&cell| cell == Some(mark)).count()
    }
}

/// One tic-tac-toe snapshot, echoed back and forth by the frame client.
///
/// `game_over` is true exactly when `winner` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub board: Board,
    pub current_player: Mark,
    pub winner: Option<Winner>,
    pub game_over: bool,
}
