//! Score storage and ranking.
//!
//! - **Entries**: one validated row per finished game
//! - **Format**: tab-separated score file codec (4- and 5-field layouts)
//! - **Store**: sorted, lock-guarded leaderboard persisted on every change
//! - **Export**: TSV, JSON and console renderings of a ranking

mod entry;
mod export;
mod format;
mod store;

pub use entry::*;
pub use export::{
    RankingEntryJson, RankingJson, format_ranking_table, format_ranking_tsv_header,
    format_ranking_tsv_row, generate_ranking_json, generate_ranking_tsv,
};
pub use format::{FIELD_COUNT, LEGACY_FIELD_COUNT, format_score_line, parse_score_line};
pub use store::*;
