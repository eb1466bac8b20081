//! Score file line codec.
//!
//! One entry per line, tab-separated:
//!
//! ```text
//! name <TAB> elapsed <TAB> errors <TAB> isSinglePlayer [<TAB> difficulty]
//! ```
//!
//! The 4-field layout predates difficulty tracking. Lines are always written
//! in the 5-field layout, with an empty difficulty when it is unknown.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::game::{Difficulty, GameMode};
use crate::storage::ScoreEntry;

pub const LEGACY_FIELD_COUNT: usize = 4;
pub const FIELD_COUNT: usize = 5;

pub fn parse_score_line(line: &str) -> Result<ScoreEntry> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != LEGACY_FIELD_COUNT && fields.len() != FIELD_COUNT {
        return Err(Error::malformed(format!(
            "expected {} or {} fields, found {}",
            LEGACY_FIELD_COUNT,
            FIELD_COUNT,
            fields.len()
        )));
    }

    let name = fields[0];
    let elapsed: f64 = fields[1]
        .trim()
        .parse()
        .map_err(|_| Error::malformed(format!("invalid elapsed time {:?}", fields[1])))?;
    let errors: u32 = fields[2]
        .trim()
        .parse()
        .map_err(|_| Error::malformed(format!("invalid error count {:?}", fields[2])))?;
    let single = match fields[3].trim() {
        "true" => true,
        "false" => false,
        other => {
            return Err(Error::malformed(format!(
                "invalid single-player flag {:?}",
                other
            )));
        }
    };
    let difficulty = match fields.get(4).map(|s| s.trim()) {
        None | Some("") => None,
        Some(raw) => Some(
            Difficulty::from_str(raw)
                .map_err(|_| Error::malformed(format!("unknown difficulty {:?}", raw)))?,
        ),
    };

    ScoreEntry::new(
        name,
        elapsed,
        errors,
        GameMode::from_single_player(single),
        difficulty,
    )
    .map_err(|e| Error::malformed(e.to_string()))
}

pub fn format_score_line(entry: &ScoreEntry) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        entry.player_name(),
        entry.elapsed_seconds(),
        entry.error_count(),
        entry.mode().is_single_player(),
        entry.difficulty().map(|d| d.short_name()).unwrap_or("")
    )
}
