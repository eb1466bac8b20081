//! # matchcards-core
//!
//! Core library for the matchcards memory game.
//!
//! This crate provides:
//! - Deck construction and uniform shuffling
//! - The per-game state machine (`MatchSession`) with observer notifications
//! - Leaderboard persistence in the tab-separated score file format
//! - Ranking export (TSV, JSON, console table)
//!
//! Rendering, sound and timers belong to the caller: a presentation feeds
//! selections, clock ticks and reveal-delay expiries into a session from a
//! single event loop.

pub mod config;
pub mod error;
pub mod game;
pub mod storage;

pub use config::{GameConfig, GameConfigBuilder};
pub use error::{Error, Result};
pub use game::{
    Catalog, CellView, DEFAULT_BACK, DEFAULT_CATALOG, Deck, Difficulty, GameMode, GameResult,
    GameRules, MatchSession, NullObserver, Player, SelectOutcome, SessionEvent, SessionObserver,
    SessionPhase, Token,
};
pub use storage::{
    HIGHLIGHT_EPSILON, ScoreEntry, ScoreStore, format_ranking_table, format_score_line,
    generate_ranking_json, generate_ranking_tsv, highlight_index, parse_score_line,
};
