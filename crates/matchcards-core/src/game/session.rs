//! State machine for one game.
//!
//! A [`MatchSession`] owns the grid, the pending selection, scores and the
//! clock. It never blocks and never reads the wall clock: the presentation
//! feeds it selections, `tick` deltas and `resolve_mismatch` calls from a
//! single event loop, and receives notifications through a
//! [`SessionObserver`].

use rand::Rng;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::game::{
    Catalog, Deck, Difficulty, GameMode, GameResult, GameRules, Player, SessionObserver,
    SessionPhase, Token,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardState {
    FaceDown,
    FaceUp,
    Matched,
}

#[derive(Debug, Clone)]
struct Card {
    token: Token,
    state: CardState,
}

/// What the presentation may show for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView<'a> {
    FaceDown,
    FaceUp(&'a Token),
    Matched(&'a Token),
}

impl CellView<'_> {
    pub fn is_face_down(&self) -> bool {
        matches!(self, Self::FaceDown)
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

/// Effect of a single `select_card` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing changed.
    Rejected,
    /// First card of a pair turned up.
    Flipped,
    Matched,
    /// Both cards stay up until `resolve_mismatch`.
    Mismatched,
    /// The last pair was matched.
    Won,
}

#[derive(Debug, Clone)]
pub struct MatchSession {
    players: Vec<String>,
    mode: GameMode,
    difficulty: Difficulty,
    rules: GameRules,
    back: Token,
    cards: Vec<Card>,
    first_pick: Option<usize>,
    pending_mismatch: Option<(usize, usize)>,
    scores: [u32; 2],
    errors: u32,
    active: Player,
    matched_pairs: usize,
    elapsed: f64,
    phase: SessionPhase,
    result: Option<GameResult>,
}

impl MatchSession {
    /// Create a session in `Setup` for the given player names.
    pub fn new<I, S>(players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            rules: Difficulty::default().rules(),
            back: Catalog::default().back,
            cards: Vec::new(),
            first_pick: None,
            pending_mismatch: None,
            scores: [0; 2],
            errors: 0,
            active: Player::One,
            matched_pairs: 0,
            elapsed: 0.0,
            phase: SessionPhase::Setup,
            result: None,
        }
    }

    /// Deal a shuffled deck and begin play.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        mode: GameMode,
        difficulty: Difficulty,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Result<()> {
        self.check_can_start(mode)?;
        let deck = Deck::new(&difficulty.rules(), catalog, rng)?;
        self.begin(mode, difficulty, deck);
        Ok(())
    }

    /// Begin play with a fixed layout instead of a shuffled one.
    pub fn start_arranged(
        &mut self,
        mode: GameMode,
        difficulty: Difficulty,
        deck: Deck,
    ) -> Result<()> {
        self.check_can_start(mode)?;
        let rules = difficulty.rules();
        if deck.len() != rules.cells() {
            return Err(Error::InvalidGrid {
                rows: rules.rows,
                columns: rules.columns,
            });
        }
        self.begin(mode, difficulty, deck);
        Ok(())
    }

    fn check_can_start(&self, mode: GameMode) -> Result<()> {
        if self.phase != SessionPhase::Setup {
            return Err(Error::InvalidPhase {
                expected: SessionPhase::Setup,
                actual: self.phase,
            });
        }
        if self.players.len() < mode.player_count() {
            return Err(Error::MissingPlayer);
        }
        Ok(())
    }

    fn begin(&mut self, mode: GameMode, difficulty: Difficulty, deck: Deck) {
        let (tokens, back) = deck.into_parts();
        self.mode = mode;
        self.difficulty = difficulty;
        self.rules = difficulty.rules();
        self.back = back;
        self.cards = tokens
            .into_iter()
            .map(|token| Card {
                token,
                state: CardState::FaceDown,
            })
            .collect();
        self.first_pick = None;
        self.pending_mismatch = None;
        self.scores = [0; 2];
        self.errors = 0;
        self.active = Player::One;
        self.matched_pairs = 0;
        self.elapsed = 0.0;
        self.result = None;
        self.phase = SessionPhase::Playing;
        debug!(
            "Session started: mode={}, difficulty={}, cells={}",
            mode,
            difficulty,
            self.cards.len()
        );
    }

    /// Advance the clock. Returns `true` if this tick ended the game.
    pub fn tick(&mut self, delta_seconds: f64, observer: &mut dyn SessionObserver) -> bool {
        if self.phase != SessionPhase::Playing || !delta_seconds.is_finite() || delta_seconds < 0.0
        {
            return false;
        }
        self.elapsed += delta_seconds;

        match self.rules.time_limit {
            Some(limit) if self.elapsed >= limit => {
                self.phase = SessionPhase::TimedOut;
                info!(
                    "Time is up after {:.2}s ({} of {} pairs)",
                    self.elapsed,
                    self.matched_pairs,
                    self.total_pairs()
                );
                observer.game_timed_out();
                true
            }
            _ => false,
        }
    }

    /// Turn up the card at `index` and resolve the pair if it is the second pick.
    pub fn select_card(
        &mut self,
        index: usize,
        observer: &mut dyn SessionObserver,
    ) -> SelectOutcome {
        if self.phase != SessionPhase::Playing || self.pending_mismatch.is_some() {
            return SelectOutcome::Rejected;
        }
        let Some(card) = self.cards.get_mut(index) else {
            return SelectOutcome::Rejected;
        };
        if card.state != CardState::FaceDown {
            return SelectOutcome::Rejected;
        }

        card.state = CardState::FaceUp;
        observer.cell_flipped(index, &card.token);

        let Some(first) = self.first_pick.take() else {
            self.first_pick = Some(index);
            return SelectOutcome::Flipped;
        };

        if self.cards[first].token == self.cards[index].token {
            self.cards[first].state = CardState::Matched;
            self.cards[index].state = CardState::Matched;
            self.matched_pairs += 1;
            if self.mode == GameMode::TwoPlayer {
                self.scores[self.active.index()] += 1;
            }
            observer.pair_matched(first, index);

            if self.cards.iter().all(|c| c.state == CardState::Matched) {
                self.finish_won(observer);
                return SelectOutcome::Won;
            }
            SelectOutcome::Matched
        } else {
            self.errors += 1;
            observer.errors_changed(self.errors);
            observer.pair_mismatched(first, index);
            self.pending_mismatch = Some((first, index));
            SelectOutcome::Mismatched
        }
    }

    /// Turn a mismatched pair back down and pass the turn.
    ///
    /// Returns `false` if no mismatch was pending.
    pub fn resolve_mismatch(&mut self, observer: &mut dyn SessionObserver) -> bool {
        let Some((first, second)) = self.pending_mismatch.take() else {
            return false;
        };
        for index in [first, second] {
            if self.cards[index].state == CardState::FaceUp {
                self.cards[index].state = CardState::FaceDown;
            }
        }
        if self.mode == GameMode::TwoPlayer && self.phase == SessionPhase::Playing {
            self.active = self.active.other();
            observer.turn_changed(self.active);
        }
        true
    }

    /// Leave the game without a result.
    pub fn abandon(&mut self) -> bool {
        if self.phase.is_terminal() {
            return false;
        }
        debug!("Session abandoned in {}", self.phase);
        self.phase = SessionPhase::Abandoned;
        true
    }

    fn finish_won(&mut self, observer: &mut dyn SessionObserver) {
        self.phase = SessionPhase::Won;
        let result = GameResult {
            mode: self.mode,
            difficulty: self.difficulty,
            elapsed_seconds: self.elapsed,
            errors: self.errors,
            scores: self.scores,
            players: self
                .players
                .iter()
                .take(self.mode.player_count())
                .cloned()
                .collect(),
        };
        info!(
            "Game won in {:.2}s with {} errors",
            result.elapsed_seconds, result.errors
        );
        observer.game_won(&result);
        self.result = Some(result);
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn rules(&self) -> GameRules {
        self.rules
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn back(&self) -> &Token {
        &self.back
    }

    pub fn cell(&self, index: usize) -> Option<CellView<'_>> {
        self.cards.get(index).map(|card| match card.state {
            CardState::FaceDown => CellView::FaceDown,
            CardState::FaceUp => CellView::FaceUp(&card.token),
            CardState::Matched => CellView::Matched(&card.token),
        })
    }

    pub fn cells(&self) -> impl Iterator<Item = CellView<'_>> + '_ {
        (0..self.cards.len()).filter_map(|i| self.cell(i))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Face-up cells that are not yet matched.
    pub fn selection(&self) -> Vec<usize> {
        match (self.pending_mismatch, self.first_pick) {
            (Some((a, b)), _) => vec![a, b],
            (None, Some(a)) => vec![a],
            (None, None) => Vec::new(),
        }
    }

    pub fn has_pending_mismatch(&self) -> bool {
        self.pending_mismatch.is_some()
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn time_limit(&self) -> Option<f64> {
        self.rules.time_limit
    }

    /// Seconds left before timeout; `None` when the game is unbounded.
    pub fn remaining(&self) -> Option<f64> {
        self.rules
            .time_limit
            .map(|limit| (limit - self.elapsed).max(0.0))
    }

    pub fn errors(&self) -> u32 {
        self.errors
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Set once the session is `Won`.
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }
}
