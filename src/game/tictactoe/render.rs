//! SVG rendering of a tic-tac-toe snapshot.

use crate::config::game::{BOARD_SIZE, IMAGE_SIZE};
use crate::game::tictactoe::types::{GameState, Mark, Position, Winner};

const CELL: u32 = 120;
const ORIGIN: u32 = (IMAGE_SIZE - CELL * BOARD_SIZE as u32) / 2;

pub fn status_text(state: &GameState) -> &'static str {
    match state.winner {
        Some(Winner::X) => "You win!",
        Some(Winner::O) => "Computer wins!",
        Some(Winner::Draw) => "It's a draw!",
        None => "Your move (X)",
    }
}

pub fn render_board(state: &GameState) -> String {
    let size = IMAGE_SIZE;
    let end = ORIGIN + CELL * BOARD_SIZE as u32;
    let mut svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">
<rect width="{size}" height="{size}" fill="#1e1b4b"/>
<text x="{half}" y="80" font-family="sans-serif" font-size="40" fill="#f8fafc" text-anchor="middle">{status}</text>
"##,
        half = size / 2,
        status = status_text(state),
    );

    for i in 1..BOARD_SIZE as u32 {
        let offset = ORIGIN + CELL * i;
        svg.push_str(&format!(
            r##"<line x1="{offset}" y1="{ORIGIN}" x2="{offset}" y2="{end}" stroke="#a5b4fc" stroke-width="6"/>
<line x1="{ORIGIN}" y1="{offset}" x2="{end}" y2="{offset}" stroke="#a5b4fc" stroke-width="6"/>
"##
        ));
    }

    for pos in Position::all() {
        let cx = ORIGIN + CELL * pos.col as u32 + CELL / 2;
        let cy = ORIGIN + CELL * pos.row as u32 + CELL / 2;
        svg.push_str(&match state.board.get(pos) {
            Some(Mark::X) => draw_x(cx, cy),
            Some(Mark::O) => draw_o(cx, cy),
            None => format!(
                r##"<text x="{cx}" y="{y}" font-family="sans-serif" font-size="28" fill="#6366f1" text-anchor="middle">{n}</text>
"##,
                y = cy + 10,
                n = pos.button(),
            ),
        });
    }

    let hint = if state.game_over { "Press Play Again" } else { "Pick a cell with buttons 1-9" };
    svg.push_str(&format!(
        r##"<text x="{half}" y="{y}" font-family="sans-serif" font-size="26" fill="#c7d2fe" text-anchor="middle">{hint}</text>
</svg>"##,
        half = size / 2,
        y = end + 70,
    ));
    svg
}

fn draw_x(cx: u32, cy: u32) -> String {
    let r = 35;
    format!(
        r##"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#f472b6" stroke-width="12" stroke-linecap="round"/>
<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#f472b6" stroke-width="12" stroke-linecap="round"/>
"##,
        cx - r, cy - r, cx + r, cy + r,
        cx + r, cy - r, cx - r, cy + r,
    )
}

fn draw_o(cx: u32, cy: u32) -> String {
    format!(
        r##"<circle cx="{cx}" cy="{cy}" r="38" fill="none" stroke="#34d399" stroke-width="12"/>
"##
    )
}
