use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::game::{GameMode, GameResult};
use crate::storage::{ScoreEntry, format_score_line, parse_score_line};

/// Times closer than this are considered the same run.
pub const HIGHLIGHT_EPSILON: f64 = 0.01;

/// Sorted leaderboard backed by a flat text file.
///
/// Every mutation rewrites the whole file before returning. All access is
/// serialized through one lock, so a store can be shared across threads.
#[derive(Debug)]
pub struct ScoreStore {
    path: PathBuf,
    entries: Mutex<Vec<ScoreEntry>>,
}

impl ScoreStore {
    /// Load the store from `path`. A missing file yields an empty store.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = read_entries(&path)?;
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Replace the in-memory list with the file's current contents.
    pub fn reload(&self) -> Result<()> {
        let mut entries = self.lock();
        *entries = read_entries(&self.path)?;
        Ok(())
    }

    /// Append one entry, re-sort and persist.
    ///
    /// On a write failure the entry stays in the in-memory ranking and the
    /// error is returned so the caller can retry or warn.
    pub fn record(&self, entry: ScoreEntry) -> Result<()> {
        self.record_all(std::iter::once(entry))
    }

    /// Record every row of a won game with a single rewrite.
    pub fn record_result(&self, result: &GameResult) -> Result<()> {
        self.record_all(result.score_entries()?)
    }

    fn record_all<I: IntoIterator<Item = ScoreEntry>>(&self, new_entries: I) -> Result<()> {
        let mut entries = self.lock();
        let before = entries.len();
        entries.extend(new_entries);
        // Stable sort keeps insertion order among equal keys.
        entries.sort_by(ScoreEntry::rank_cmp);
        debug!("Recorded {} score entries", entries.len() - before);

        write_entries(&self.path, &entries).inspect_err(|e| {
            warn!("Failed to save scores to {}: {}", self.path.display(), e);
        })
    }

    /// Entries for `mode`, in leaderboard order.
    pub fn ranking_for(&self, mode: GameMode) -> Vec<ScoreEntry> {
        self.lock()
            .iter()
            .filter(|e| e.mode() == mode)
            .cloned()
            .collect()
    }

    /// First entry in leaderboard order matching a just-finished run.
    pub fn highlight_key(&self, player_name: &str, elapsed_seconds: f64) -> Option<ScoreEntry> {
        let entries = self.lock();
        highlight_index(&entries, player_name, elapsed_seconds).map(|i| entries[i].clone())
    }

    pub fn entries(&self) -> Vec<ScoreEntry> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ScoreEntry>> {
        // A panic mid-record leaves a sorted prefix at worst; keep serving it.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Position of the first entry with exactly `player_name` and a time within
/// [`HIGHLIGHT_EPSILON`] of `elapsed_seconds`.
pub fn highlight_index(
    entries: &[ScoreEntry],
    player_name: &str,
    elapsed_seconds: f64,
) -> Option<usize> {
    entries.iter().position(|e| {
        e.player_name() == player_name
            && (e.elapsed_seconds() - elapsed_seconds).abs() < HIGHLIGHT_EPSILON
    })
}

fn read_entries(path: &Path) -> Result<Vec<ScoreEntry>> {
    let content = match fs::read(path).map_err(Error::from) {
        Ok(c) => c,
        Err(e) if e.is_not_found() => {
            info!("No score file at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    // Decoded per line so one bad byte only costs its own line.
    let mut entries = Vec::new();
    for (number, raw) in content.split(|&b| b == b'\n').enumerate() {
        let Ok(line) = std::str::from_utf8(raw) else {
            warn!("Skipping score line {}: not valid UTF-8", number + 1);
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_score_line(line) {
            Ok(entry) => entries.push(entry),
            Err(e) => warn!("Skipping score line {}: {}", number + 1, e),
        }
    }
    entries.sort_by(ScoreEntry::rank_cmp);

    info!(
        "Loaded {} score entries from {}",
        entries.len(),
        path.display()
    );
    Ok(entries)
}

fn write_entries(path: &Path, entries: &[ScoreEntry]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut content = String::new();
    for entry in entries {
        content.push_str(&format_score_line(entry));
        content.push('\n');
    }
    fs::write(path, content)?;
    debug!("Saved {} score entries to {}", entries.len(), path.display());
    Ok(())
}
