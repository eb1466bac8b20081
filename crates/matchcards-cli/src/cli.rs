use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use matchcards_core::{Difficulty, GameMode};

#[derive(Parser)]
#[command(name = "matchcards")]
#[command(about = "Memory matching card game", version)]
pub struct Args {
    /// Configuration file (defaults to the per-user config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Score file, overriding the configuration
    #[arg(long, global = true, env = "MATCHCARDS_SCORE_FILE")]
    pub score_file: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// single or two
        #[arg(short, long, default_value = "single")]
        mode: GameMode,

        /// easy, medium or hard
        #[arg(short, long, default_value = "easy")]
        difficulty: Difficulty,

        /// Player name; repeat for the second player
        #[arg(short, long = "player")]
        players: Vec<String>,

        /// Seed for a reproducible layout
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the leaderboard
    Scores {
        /// single or two
        #[arg(short, long, default_value = "single")]
        mode: GameMode,

        #[arg(short, long, value_enum, default_value_t = ExportFormat::Table)]
        format: ExportFormat,

        /// Mark the first row for this player...
        #[arg(long, requires = "time")]
        highlight: Option<String>,

        /// ...with this time in seconds
        #[arg(long, requires = "highlight")]
        time: Option<f64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Table,
    Tsv,
    Json,
}
