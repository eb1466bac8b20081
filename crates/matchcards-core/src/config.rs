//! Game configuration.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use matchcards_core::config::GameConfig;
//!
//! let config = GameConfig::builder()
//!     .score_file("my_scores.txt")
//!     .reveal_delay(Duration::from_millis(750))
//!     .build();
//! assert_eq!(config.reveal_delay, Duration::from_millis(750));
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::game::{Catalog, Token};

/// Settings shared by the session driver and the score store.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Leaderboard file
    pub score_file: PathBuf,
    /// How long a mismatched pair stays face up
    pub reveal_delay: Duration,
    /// Interval between clock ticks
    pub tick_interval: Duration,
    pub catalog: Catalog,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            score_file: PathBuf::from("scores.txt"),
            reveal_delay: Duration::from_millis(1000),
            tick_interval: Duration::from_millis(100),
            catalog: Catalog::default(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration builder
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::default()
    }
}

/// Builder for GameConfig
#[derive(Debug, Clone, Default)]
pub struct GameConfigBuilder {
    score_file: Option<PathBuf>,
    reveal_delay: Option<Duration>,
    tick_interval: Option<Duration>,
    faces: Option<Vec<Token>>,
    back: Option<Token>,
}

impl GameConfigBuilder {
    pub fn score_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.score_file = Some(path.into());
        self
    }

    pub fn reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = Some(delay);
        self
    }

    /// Zero intervals are ignored.
    pub fn tick_interval(mut self, interval: Duration) -> Self {
        if !interval.is_zero() {
            self.tick_interval = Some(interval);
        }
        self
    }

    /// Card faces to deal from; an empty list keeps the default catalog.
    pub fn faces<I, T>(mut self, faces: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        let faces: Vec<Token> = faces.into_iter().map(Into::into).collect();
        if !faces.is_empty() {
            self.faces = Some(faces);
        }
        self
    }

    pub fn back(mut self, back: impl Into<Token>) -> Self {
        self.back = Some(back.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> GameConfig {
        let default = GameConfig::default();
        GameConfig {
            score_file: self.score_file.unwrap_or(default.score_file),
            reveal_delay: self.reveal_delay.unwrap_or(default.reveal_delay),
            tick_interval: self.tick_interval.unwrap_or(default.tick_interval),
            catalog: Catalog {
                faces: self.faces.unwrap_or(default.catalog.faces),
                back: self.back.unwrap_or(default.catalog.back),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        assert_eq!(GameConfig::builder().build(), GameConfig::default());
    }

    #[test]
    fn test_builder_overrides() {
        let config = GameConfig::builder()
            .score_file("/tmp/s.txt")
            .tick_interval(Duration::from_millis(50))
            .faces(["sun", "moon"])
            .back("cover")
            .build();
        assert_eq!(config.score_file, PathBuf::from("/tmp/s.txt"));
        assert_eq!(config.tick_interval, Duration::from_millis(50));
        assert_eq!(config.reveal_delay, Duration::from_millis(1000));
        assert_eq!(config.catalog.faces.len(), 2);
        assert_eq!(config.catalog.back.as_str(), "cover");
    }

    #[test]
    fn test_builder_ignores_empty_values() {
        let config = GameConfig::builder()
            .tick_interval(Duration::ZERO)
            .faces(Vec::<String>::new())
            .build();
        assert_eq!(config.tick_interval, Duration::from_millis(100));
        assert_eq!(config.catalog, Catalog::default());
    }
}
