//! Leaderboard command.

use anyhow::{Context, Result};
use matchcards_core::{
    GameConfig, GameMode, ScoreStore, format_ranking_table, generate_ranking_json,
    generate_ranking_tsv, highlight_index,
};
use owo_colors::OwoColorize;
use tracing::warn;

use crate::cli::ExportFormat;

/// Render the `mode` ranking in `format`.
///
/// `highlight` marks the first row matching a player name and time.
pub fn render(
    store: &ScoreStore,
    mode: GameMode,
    format: ExportFormat,
    highlight: Option<(&str, f64)>,
) -> Result<String> {
    let ranking = store.ranking_for(mode);
    let marked = highlight.and_then(|(name, time)| {
        let index = highlight_index(&ranking, name, time);
        if index.is_none() {
            warn!("No {} run for {} at {:.2}s", mode, name, time);
        }
        index
    });

    Ok(match format {
        ExportFormat::Table if ranking.is_empty() => format!("No {} scores yet.", mode),
        ExportFormat::Table => format_ranking_table(&ranking, marked),
        ExportFormat::Tsv => generate_ranking_tsv(&ranking),
        ExportFormat::Json => generate_ranking_json(mode, &ranking, marked)?,
    })
}

pub fn run(
    config: &GameConfig,
    mode: GameMode,
    format: ExportFormat,
    highlight: Option<(&str, f64)>,
    colored: bool,
) -> Result<()> {
    let store = ScoreStore::load(&config.score_file).with_context(|| {
        format!(
            "Failed to load scores from {}",
            config.score_file.display()
        )
    })?;

    if format == ExportFormat::Table {
        let title = format!("{} player ranking", mode.short_name());
        if colored {
            println!("{}", title.bold());
        } else {
            println!("{}", title);
        }
    }
    let content = render(&store, mode, format, highlight)?;
    print!("{}", content);
    if !content.ends_with('\n') {
        println!();
    }
    Ok(())
}
