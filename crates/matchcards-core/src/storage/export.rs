//! Ranking export formats (TSV, JSON, console).

use serde::Serialize;

use crate::error::Result;
use crate::game::GameMode;
use crate::storage::ScoreEntry;

#[derive(Debug, Clone, Serialize)]
pub struct RankingJson {
    pub mode: String,
    pub entries: Vec<RankingEntryJson>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankingEntryJson {
    pub rank: usize,
    pub player: String,
    pub elapsed_seconds: f64,
    pub errors: u32,
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub highlighted: bool,
}

pub fn format_ranking_tsv_header() -> String {
    ["Rank", "Player", "Time", "Errors", "Difficulty"].join("\t")
}

pub fn format_ranking_tsv_row(rank: usize, entry: &ScoreEntry) -> String {
    format!(
        "{}\t{}\t{:.2}\t{}\t{}",
        rank,
        entry.player_name(),
        entry.elapsed_seconds(),
        entry.error_count(),
        difficulty_label(entry)
    )
}

pub fn generate_ranking_tsv(entries: &[ScoreEntry]) -> String {
    let mut output = format_ranking_tsv_header();
    output.push('\n');
    for (i, entry) in entries.iter().enumerate() {
        output.push_str(&format_ranking_tsv_row(i + 1, entry));
        output.push('\n');
    }
    output
}

pub fn generate_ranking_json(
    mode: GameMode,
    entries: &[ScoreEntry],
    highlight: Option<usize>,
) -> Result<String> {
    let ranking = RankingJson {
        mode: mode.to_string(),
        entries: entries
            .iter()
            .enumerate()
            .map(|(i, entry)| RankingEntryJson {
                rank: i + 1,
                player: entry.player_name().to_string(),
                elapsed_seconds: entry.elapsed_seconds(),
                errors: entry.error_count(),
                difficulty: entry.difficulty().map(|d| d.to_string()),
                highlighted: highlight == Some(i),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&ranking)?)
}

/// Fixed-width table for terminals; the highlighted row is marked with `>`.
pub fn format_ranking_table(entries: &[ScoreEntry], highlight: Option<usize>) -> String {
    let name_width = entries
        .iter()
        .map(|e| e.player_name().chars().count())
        .chain(std::iter::once("Player".len()))
        .max()
        .unwrap_or(0);

    let mut lines = vec![format!(
        "  {:>4}  {:<name_width$}  {:>8}  {:>6}  {}",
        "#", "Player", "Time", "Errors", "Difficulty"
    )];
    for (i, entry) in entries.iter().enumerate() {
        let marker = if highlight == Some(i) { '>' } else { ' ' };
        lines.push(format!(
            "{} {:>4}  {:<name_width$}  {:>8.2}  {:>6}  {}",
            marker,
            i + 1,
            entry.player_name(),
            entry.elapsed_seconds(),
            entry.error_count(),
            difficulty_label(entry)
        ));
    }
    lines.join("\n")
}

fn difficulty_label(entry: &ScoreEntry) -> &'static str {
    entry.difficulty().map(|d| d.short_name()).unwrap_or("-")
}
