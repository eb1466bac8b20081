use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    #[default]
    #[strum(to_string = "single", serialize = "single-player", serialize = "1p")]
    SinglePlayer,
    #[strum(to_string = "two", serialize = "two-player", serialize = "2p")]
    TwoPlayer,
}

impl GameMode {
    pub fn is_single_player(&self) -> bool {
        matches!(self, Self::SinglePlayer)
    }

    pub fn from_single_player(single: bool) -> Self {
        if single {
            Self::SinglePlayer
        } else {
            Self::TwoPlayer
        }
    }

    pub fn player_count(&self) -> usize {
        match self {
            Self::SinglePlayer => 1,
            Self::TwoPlayer => 2,
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

/// Board size and countdown for one game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameRules {
    pub rows: usize,
    pub columns: usize,
    /// `None` means the game never times out.
    pub time_limit: Option<f64>,
}

impl GameRules {
    pub fn cells(&self) -> usize {
        self.rows * self.columns
    }

    pub fn pairs(&self) -> usize {
        self.cells() / 2
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn rules(&self) -> GameRules {
        match self {
            Self::Easy => GameRules {
                rows: 3,
                columns: 4,
                time_limit: None,
            },
            Self::Medium => GameRules {
                rows: 4,
                columns: 4,
                time_limit: Some(50.0),
            },
            Self::Hard => GameRules {
                rows: 4,
                columns: 5,
                time_limit: Some(40.0),
            },
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, IntoStaticStr, Display,
)]
pub enum Player {
    #[default]
    #[strum(serialize = "Player 1")]
    One,
    #[strum(serialize = "Player 2")]
    Two,
}

impl Player {
    pub fn index(&self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoStaticStr, Display)]
pub enum SessionPhase {
    #[default]
    Setup,
    Playing,
    Won,
    TimedOut,
    Abandoned,
}

impl SessionPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Won | Self::TimedOut | Self::Abandoned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_difficulty_table() {
        let easy = Difficulty::Easy.rules();
        assert_eq!((easy.rows, easy.columns), (3, 4));
        assert_eq!(easy.pairs(), 6);
        assert_eq!(easy.time_limit, None);

        let medium = Difficulty::Medium.rules();
        assert_eq!(medium.cells(), 16);
        assert_eq!(medium.time_limit, Some(50.0));

        let hard = Difficulty::Hard.rules();
        assert_eq!((hard.rows, hard.columns), (4, 5));
        assert_eq!(hard.pairs(), 10);
        assert_eq!(hard.time_limit, Some(40.0));
    }

    #[test]
    fn test_every_difficulty_has_even_grid() {
        for difficulty in Difficulty::iter() {
            assert_eq!(difficulty.rules().cells() % 2, 0, "{difficulty}");
        }
    }

    #[test]
    fn test_difficulty_parse_case_insensitive() {
        assert_eq!(Difficulty::from_str("medium").unwrap(), Difficulty::Medium);
        assert_eq!(Difficulty::from_str("HARD").unwrap(), Difficulty::Hard);
        assert!(Difficulty::from_str("expert").is_err());
        assert_eq!(Difficulty::Easy.to_string(), "Easy");
    }

    #[test]
    fn test_game_mode_parse() {
        assert_eq!(GameMode::from_str("single").unwrap(), GameMode::SinglePlayer);
        assert_eq!(GameMode::from_str("Two-Player").unwrap(), GameMode::TwoPlayer);
        assert_eq!(GameMode::from_str("2p").unwrap(), GameMode::TwoPlayer);
        assert_eq!(GameMode::TwoPlayer.to_string(), "two");
        assert_eq!(GameMode::from_single_player(false), GameMode::TwoPlayer);
    }

    #[test]
    fn test_player_other() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
        assert_eq!(Player::Two.index(), 1);
        assert_eq!(Player::One.to_string(), "Player 1");
    }

    #[test]
    fn test_terminal_phases() {
        assert!(!SessionPhase::Setup.is_terminal());
        assert!(!SessionPhase::Playing.is_terminal());
        assert!(SessionPhase::Won.is_terminal());
        assert!(SessionPhase::TimedOut.is_terminal());
        assert!(SessionPhase::Abandoned.is_terminal());
    }
}
