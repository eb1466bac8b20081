use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::game::{Difficulty, GameMode};

/// One finished game on the leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    player_name: String,
    elapsed_seconds: f64,
    error_count: u32,
    mode: GameMode,
    difficulty: Option<Difficulty>,
}

impl ScoreEntry {
    /// Validate and build an entry.
    ///
    /// Tabs and line breaks in the name are replaced with spaces so the
    /// entry always fits on one score-file line.
    pub fn new(
        player_name: &str,
        elapsed_seconds: f64,
        error_count: u32,
        mode: GameMode,
        difficulty: Option<Difficulty>,
    ) -> Result<Self> {
        let player_name: String = player_name
            .chars()
            .map(|c| if matches!(c, '\t' | '\r' | '\n') { ' ' } else { c })
            .collect();
        if player_name.trim().is_empty() {
            return Err(Error::InvalidScoreEntry("player name is empty".to_string()));
        }
        if !elapsed_seconds.is_finite() || elapsed_seconds < 0.0 {
            return Err(Error::InvalidScoreEntry(format!(
                "elapsed time must be a non-negative number, got {}",
                elapsed_seconds
            )));
        }
        Ok(Self {
            player_name,
            elapsed_seconds,
            error_count,
            mode,
            difficulty,
        })
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    pub fn error_count(&self) -> u32 {
        self.error_count
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Leaderboard order: faster first, then fewer errors.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.elapsed_seconds
            .total_cmp(&other.elapsed_seconds)
            .then(self.error_count.cmp(&other.error_count))
    }
}
