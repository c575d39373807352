//! SVG rendering of a rock-paper-scissors snapshot.

use std::cmp::Ordering;

use crate::config::game::{IMAGE_SIZE, RPS_MAX_ROUNDS};
use crate::game::rps::types::{GameState, result_text};

pub fn final_text(state: &GameState) -> &'static str {
    match state.player_score.cmp(&state.computer_score) {
        Ordering::Greater => "You won the game!",
        Ordering::Less => "The computer won the game!",
        Ordering::Equal => "The game is a tie!",
    }
}

pub fn render_round(state: &GameState) -> String {
    let size = IMAGE_SIZE;
    let half = size / 2;
    let heading = if state.game_over {
        "Game over".to_string()
    } else {
        format!("Round {} of {}", state.round, RPS_MAX_ROUNDS)
    };

    let mut svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">
<rect width="{size}" height="{size}" fill="#0f172a"/>
<text x="{half}" y="70" font-family="sans-serif" font-size="40" fill="#f8fafc" text-anchor="middle">Rock Paper Scissors</text>
<text x="{half}" y="125" font-family="sans-serif" font-size="30" fill="#94a3b8" text-anchor="middle">{heading}</text>
<text x="{half}" y="180" font-family="sans-serif" font-size="32" fill="#e2e8f0" text-anchor="middle">You {player} - {computer} Computer</text>
"##,
        player = state.player_score,
        computer = state.computer_score,
    );

    if let (Some(player), Some(computer)) = (state.player_choice, state.computer_choice) {
        svg.push_str(&format!(
            r##"<text x="150" y="320" font-size="110" text-anchor="middle">{}</text>
<text x="{half}" y="305" font-family="sans-serif" font-size="36" fill="#94a3b8" text-anchor="middle">vs</text>
<text x="450" y="320" font-size="110" text-anchor="middle">{}</text>
<text x="150" y="370" font-family="sans-serif" font-size="26" fill="#e2e8f0" text-anchor="middle">{}</text>
<text x="450" y="370" font-family="sans-serif" font-size="26" fill="#e2e8f0" text-anchor="middle">{}</text>
"##,
            player.emoji(),
            computer.emoji(),
            player.label(),
            computer.label(),
        ));
    }

    svg.push_str(&format!(
        r##"<text x="{half}" y="450" font-family="sans-serif" font-size="40" fill="#facc15" text-anchor="middle">{}</text>
"##,
        result_text(state.result),
    ));
    if state.game_over {
        svg.push_str(&format!(
            r##"<text x="{half}" y="520" font-family="sans-serif" font-size="34" fill="#4ade80" text-anchor="middle">{}</text>
"##,
            final_text(state),
        ));
    }
    svg.push_str("</svg>");
    svg
}
