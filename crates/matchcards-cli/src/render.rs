//! Plain-text board rendering.

use matchcards_core::{CellView, GameMode, MatchSession, Player};
use owo_colors::OwoColorize;

/// Status line: whose turn, errors, clock.
pub fn format_status(session: &MatchSession) -> String {
    let mut parts = Vec::new();
    if session.mode() == GameMode::TwoPlayer {
        let active = session.active_player();
        parts.push(format!(
            "{} to play ({}: {}, {}: {})",
            player_label(session, active),
            player_label(session, Player::One),
            session.score(Player::One),
            player_label(session, Player::Two),
            session.score(Player::Two),
        ));
    }
    parts.push(format!(
        "pairs {}/{}",
        session.matched_pairs(),
        session.total_pairs()
    ));
    parts.push(format!("errors {}", session.errors()));
    parts.push(match session.time_limit() {
        Some(limit) => format!("time {:.1}s / {:.0}s", session.elapsed(), limit),
        None => format!("time {:.1}s", session.elapsed()),
    });
    parts.join(" | ")
}

/// Grid of cells. Hidden cards show their number, revealed cards their face.
pub fn render_board(session: &MatchSession, colored: bool) -> String {
    let columns = session.rules().columns.max(1);
    let width = session
        .cells()
        .map(|cell| match cell {
            CellView::FaceUp(token) | CellView::Matched(token) => token.as_str().chars().count(),
            CellView::FaceDown => 0,
        })
        .chain([session.len().to_string().len()])
        .max()
        .unwrap_or(1);

    let mut lines = Vec::new();
    let mut row = Vec::new();
    for (index, cell) in session.cells().enumerate() {
        let label = match cell {
            CellView::FaceDown => format!("{:^width$}", index + 1),
            CellView::FaceUp(token) | CellView::Matched(token) => {
                format!("{:^width$}", token.as_str())
            }
        };
        let label = match (cell, colored) {
            (CellView::FaceUp(_), true) => label.yellow().bold().to_string(),
            (CellView::Matched(_), true) => label.green().dimmed().to_string(),
            (CellView::FaceDown, true) => label.blue().to_string(),
            (_, false) => label,
        };
        row.push(format!("[{}]", label));
        if row.len() == columns {
            lines.push(row.join(" "));
            row.clear();
        }
    }
    if !row.is_empty() {
        lines.push(row.join(" "));
    }
    lines.join("\n")
}

fn player_label(session: &MatchSession, player: Player) -> String {
    session
        .players()
        .get(player.index())
        .cloned()
        .unwrap_or_else(|| player.to_string())
}
