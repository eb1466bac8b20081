use serde::Serialize;

use crate::error::Result;
use crate::game::{Difficulty, GameMode, Player};
use crate::storage::ScoreEntry;

/// Outcome of a won game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameResult {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub elapsed_seconds: f64,
    pub errors: u32,
    /// Pairs claimed per player; only counted in two-player mode.
    pub scores: [u32; 2],
    pub players: Vec<String>,
}

impl GameResult {
    /// Rows to append to the score store.
    ///
    /// Two-player games produce one row per player, both carrying the shared
    /// elapsed time and error count.
    pub fn score_entries(&self) -> Result<Vec<ScoreEntry>> {
        self.players
            .iter()
            .take(self.mode.player_count())
            .map(|name| {
                ScoreEntry::new(
                    name.as_str(),
                    self.elapsed_seconds,
                    self.errors,
                    self.mode,
                    Some(self.difficulty),
                )
            })
            .collect()
    }

    /// Player with more pairs; `None` in single-player or on a tie.
    pub fn winner(&self) -> Option<Player> {
        if self.mode.is_single_player() {
            return None;
        }
        match self.scores[0].cmp(&self.scores[1]) {
            std::cmp::Ordering::Greater => Some(Player::One),
            std::cmp::Ordering::Less => Some(Player::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn player_name(&self, player: Player) -> Option<&str> {
        self.players.get(player.index()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_player_result(scores: [u32; 2]) -> GameResult {
        GameResult {
            mode: GameMode::TwoPlayer,
            difficulty: Difficulty::Medium,
            elapsed_seconds: 31.5,
            errors: 4,
            scores,
            players: vec!["Alice".to_string(), "Bob".to_string()],
        }
    }

    #[test]
    fn test_single_player_entries() {
        let result = GameResult {
            mode: GameMode::SinglePlayer,
            difficulty: Difficulty::Easy,
            elapsed_seconds: 12.0,
            errors: 1,
            scores: [0, 0],
            players: vec!["Alice".to_string()],
        };
        let entries = result.score_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].player_name(), "Alice");
        assert_eq!(entries[0].mode(), GameMode::SinglePlayer);
        assert_eq!(entries[0].difficulty(), Some(Difficulty::Easy));
        assert_eq!(result.winner(), None);
    }

    #[test]
    fn test_two_player_entries_are_symmetric() {
        let entries = two_player_result([5, 3]).score_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].player_name(), "Alice");
        assert_eq!(entries[1].player_name(), "Bob");
        for entry in &entries {
            assert_eq!(entry.elapsed_seconds(), 31.5);
            assert_eq!(entry.error_count(), 4);
            assert_eq!(entry.mode(), GameMode::TwoPlayer);
        }
    }

    #[test]
    fn test_winner() {
        assert_eq!(two_player_result([5, 3]).winner(), Some(Player::One));
        assert_eq!(two_player_result([2, 6]).winner(), Some(Player::Two));
        assert_eq!(two_player_result([4, 4]).winner(), None);
        assert_eq!(
            two_player_result([4, 4]).player_name(Player::Two),
            Some("Bob")
        );
    }
}
