//! Optional TOML configuration file.
//!
//! ```toml
//! score_file = "/home/me/.local/share/matchcards/scores.txt"
//! reveal_delay_ms = 800
//! tick_interval_ms = 100
//! faces = ["fire", "water", "grass"]
//! back = "back"
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use matchcards_core::GameConfig;
use serde::Deserialize;
use tracing::{debug, info, warn};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    score_file: Option<PathBuf>,
    reveal_delay_ms: Option<u64>,
    tick_interval_ms: Option<u64>,
    faces: Option<Vec<String>>,
    back: Option<String>,
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("matchcards").join("config.toml"))
}

/// Parse a settings document on top of the defaults.
pub fn parse_settings(content: &str) -> Result<GameConfig, toml::de::Error> {
    let settings: FileSettings = toml::from_str(content)?;

    let mut builder = GameConfig::builder();
    if let Some(path) = settings.score_file {
        builder = builder.score_file(path);
    }
    if let Some(ms) = settings.reveal_delay_ms {
        builder = builder.reveal_delay(Duration::from_millis(ms));
    }
    if let Some(ms) = settings.tick_interval_ms {
        builder = builder.tick_interval(Duration::from_millis(ms));
    }
    if let Some(faces) = settings.faces {
        builder = builder.faces(faces);
    }
    if let Some(back) = settings.back {
        builder = builder.back(back);
    }
    Ok(builder.build())
}

/// Load settings from `path` (or the per-user default location).
///
/// A missing file means defaults; an unreadable or invalid file is
/// reported and also falls back to defaults.
pub fn load_config(path: Option<&Path>) -> GameConfig {
    let Some(path) = path.map(Path::to_path_buf).or_else(default_config_path) else {
        return GameConfig::default();
    };

    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No config file at {}", path.display());
            return GameConfig::default();
        }
        Err(e) => {
            warn!("Failed to read config {}: {}, using defaults", path.display(), e);
            return GameConfig::default();
        }
    };

    match parse_settings(&content) {
        Ok(config) => {
            info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            warn!("Failed to parse config {}: {}, using defaults", path.display(), e);
            GameConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_empty_is_default() {
        assert_eq!(parse_settings("").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_parse_all_keys() {
        let config = parse_settings(
            r#"
            score_file = "board.txt"
            reveal_delay_ms = 750
            tick_interval_ms = 50
            faces = ["sun", "moon", "star"]
            back = "cover"
            "#,
        )
        .unwrap();
        assert_eq!(config.score_file, PathBuf::from("board.txt"));
        assert_eq!(config.reveal_delay, Duration::from_millis(750));
        assert_eq!(config.tick_interval, Duration::from_millis(50));
        assert_eq!(config.catalog.faces.len(), 3);
        assert_eq!(config.catalog.back.as_str(), "cover");
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        assert!(parse_settings("colour = \"red\"").is_err());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("absent.toml")));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_invalid_file_is_default() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "reveal_delay_ms = \"soon\"").unwrap();
        assert_eq!(load_config(Some(file.path())), GameConfig::default());
    }

    #[test]
    fn test_load_file() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "reveal_delay_ms = 250").unwrap();
        let config = load_config(Some(file.path()));
        assert_eq!(config.reveal_delay, Duration::from_millis(250));
    }
}
