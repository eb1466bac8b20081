//! Terminal game.
//!
//! One loop consumes events from the input reader, the ticker and the
//! Ctrl+C handler, strictly one at a time, and forwards them to the session.
//! The mismatch reveal delay is a deadline owned by the presenter and
//! checked on every tick.

use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use matchcards_core::{
    Difficulty, GameConfig, GameMode, GameResult, MatchSession, Player, ScoreStore,
    SelectOutcome, SessionObserver, SessionPhase, Token, format_ranking_table, highlight_index,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::clock::Ticker;
use crate::input::{self, Event};
use crate::render::{format_status, render_board};

/// Prints session notifications and owns the reveal-delay timer.
pub struct TerminalPresenter {
    reveal_delay: Duration,
    reveal_deadline: Option<Instant>,
    colored: bool,
}

impl TerminalPresenter {
    pub fn new(reveal_delay: Duration, colored: bool) -> Self {
        Self {
            reveal_delay,
            reveal_deadline: None,
            colored,
        }
    }

    /// Whether a pending mismatch should be turned back down at `now`.
    /// Clears the deadline when it fires.
    pub fn reveal_due(&mut self, now: Instant) -> bool {
        match self.reveal_deadline {
            Some(deadline) if now >= deadline => {
                self.reveal_deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl SessionObserver for TerminalPresenter {
    fn cell_flipped(&mut self, index: usize, token: &Token) {
        println!("Card {} is {}", index + 1, token);
    }

    fn pair_matched(&mut self, _first: usize, _second: usize) {
        println!("Match!");
    }

    fn pair_mismatched(&mut self, _first: usize, _second: usize) {
        println!("No match.");
        self.reveal_deadline = Some(Instant::now() + self.reveal_delay);
    }

    fn turn_changed(&mut self, player: Player) {
        println!("{}'s turn", player);
    }

    fn game_won(&mut self, result: &GameResult) {
        println!(
            "All pairs found in {:.2}s with {} errors!",
            result.elapsed_seconds, result.errors
        );
    }

    fn game_timed_out(&mut self) {
        println!("Time's up!");
    }

    fn errors_changed(&mut self, count: u32) {
        debug!("Errors: {}", count);
    }
}

/// Fill in default names so each player of `mode` has one.
pub fn player_names(mode: GameMode, mut given: Vec<String>) -> Vec<String> {
    let count = mode.player_count();
    if given.len() > count {
        warn!(
            "{} player names given for {} mode, ignoring extras",
            given.len(),
            mode
        );
        given.truncate(count);
    }
    for player in [Player::One, Player::Two].into_iter().take(count).skip(given.len()) {
        given.push(player.to_string());
    }
    given
}

/// Drive `session` until it reaches a terminal phase.
///
/// A closed channel counts as quitting.
pub fn run_session(
    session: &mut MatchSession,
    events: &Receiver<Event>,
    presenter: &mut TerminalPresenter,
) {
    let mut last_tick = Instant::now();
    print_board(session, presenter.colored);

    while session.phase() == SessionPhase::Playing {
        let Ok(event) = events.recv() else {
            session.abandon();
            break;
        };

        match event {
            Event::Tick => {
                let now = Instant::now();
                let delta = now.duration_since(last_tick);
                last_tick = now;
                session.tick(delta.as_secs_f64(), presenter);
                if presenter.reveal_due(now)
                    && session.resolve_mismatch(presenter)
                    && session.phase() == SessionPhase::Playing
                {
                    print_board(session, presenter.colored);
                }
            }
            Event::Select(index) => match session.select_card(index, presenter) {
                SelectOutcome::Rejected => {
                    println!("Card {} can't be picked right now.", index + 1)
                }
                SelectOutcome::Won => {}
                _ => print_board(session, presenter.colored),
            },
            Event::Quit => {
                session.abandon();
            }
            Event::Invalid(hint) => println!("{}", hint),
        }
    }
}

fn print_board(session: &MatchSession, colored: bool) {
    println!();
    println!("{}", render_board(session, colored));
    println!("{}", format_status(session));
}

pub fn run(
    config: &GameConfig,
    mode: GameMode,
    difficulty: Difficulty,
    players: Vec<String>,
    seed: Option<u64>,
    colored: bool,
) -> Result<()> {
    let store = ScoreStore::load(&config.score_file).with_context(|| {
        format!(
            "Failed to load scores from {}",
            config.score_file.display()
        )
    })?;

    let mut session = MatchSession::new(player_names(mode, players));
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    session
        .start(mode, difficulty, &config.catalog, &mut rng)
        .context("Failed to start game")?;
    info!("Starting {} game on {}", mode, difficulty);

    let rules = session.rules();
    let (tx, rx) = mpsc::channel();

    let quit_tx = tx.clone();
    ctrlc::set_handler(move || {
        let _ = quit_tx.send(Event::Quit);
    })?;

    let ticker = Ticker::spawn(tx.clone(), config.tick_interval);
    // The reader blocks on stdin and is left running on exit.
    let _reader = input::spawn_line_reader(tx, rules.rows, rules.columns);

    println!(
        "{}x{} grid, {} pairs. Pick cards by number (or row and column), q to quit.",
        rules.rows,
        rules.columns,
        rules.pairs()
    );

    let mut presenter = TerminalPresenter::new(config.reveal_delay, colored);
    run_session(&mut session, &rx, &mut presenter);

    ticker.stop();

    match session.phase() {
        SessionPhase::Won => {
            if let Some(result) = session.result() {
                report_win(&store, result);
            }
        }
        SessionPhase::TimedOut => println!(
            "Found {} of {} pairs before time ran out.",
            session.matched_pairs(),
            session.total_pairs()
        ),
        SessionPhase::Abandoned => println!("Game abandoned."),
        SessionPhase::Setup | SessionPhase::Playing => {}
    }
    Ok(())
}

fn report_win(store: &ScoreStore, result: &GameResult) {
    if result.mode == GameMode::TwoPlayer {
        match result.winner().and_then(|p| result.player_name(p)) {
            Some(name) => println!(
                "{} wins {} to {}.",
                name,
                result.scores.iter().max().copied().unwrap_or(0),
                result.scores.iter().min().copied().unwrap_or(0)
            ),
            None => println!("It's a draw, {} pairs each.", result.scores[0]),
        }
    }

    if let Err(e) = store.record_result(result) {
        warn!("Score not saved: {}", e);
        eprintln!("Could not save the score to {}: {}", store.path().display(), e);
    }

    let ranking = store.ranking_for(result.mode);
    let highlight = result
        .player_name(Player::One)
        .and_then(|name| highlight_index(&ranking, name, result.elapsed_seconds));
    println!();
    println!("{}", format_ranking_table(&ranking, highlight));
}
