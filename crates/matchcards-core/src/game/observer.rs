//! Notifications from a session to its presentation layer.

use crate::game::{GameResult, Player, Token};

/// Receives state changes from a [`MatchSession`](crate::game::MatchSession).
///
/// All methods default to no-ops so a presentation only implements what it
/// renders.
pub trait SessionObserver {
    fn cell_flipped(&mut self, _index: usize, _token: &Token) {}

    fn pair_matched(&mut self, _first: usize, _second: usize) {}

    /// The presentation should start its reveal-delay timer and call
    /// `resolve_mismatch` when it fires.
    fn pair_mismatched(&mut self, _first: usize, _second: usize) {}

    fn turn_changed(&mut self, _player: Player) {}

    fn game_won(&mut self, _result: &GameResult) {}

    fn game_timed_out(&mut self) {}

    fn errors_changed(&mut self, _count: u32) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SessionObserver for NullObserver {}

/// Owned copy of one notification.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    CellFlipped { index: usize, token: Token },
    PairMatched(usize, usize),
    PairMismatched(usize, usize),
    TurnChanged(Player),
    GameWon(GameResult),
    GameTimedOut,
    ErrorsChanged(u32),
}

impl SessionObserver for Vec<SessionEvent> {
    fn cell_flipped(&mut self, index: usize, token: &Token) {
        self.push(SessionEvent::CellFlipped {
            index,
            token: token.clone(),
        });
    }

    fn pair_matched(&mut self, first: usize, second: usize) {
        self.push(SessionEvent::PairMatched(first, second));
    }

    fn pair_mismatched(&mut self, first: usize, second: usize) {
        self.push(SessionEvent::PairMismatched(first, second));
    }

    fn turn_changed(&mut self, player: Player) {
        self.push(SessionEvent::TurnChanged(player));
    }

    fn game_won(&mut self, result: &GameResult) {
        self.push(SessionEvent::GameWon(result.clone()));
    }

    fn game_timed_out(&mut self) {
        self.push(SessionEvent::GameTimedOut);
    }

    fn errors_changed(&mut self, count: u32) {
        self.push(SessionEvent::ErrorsChanged(count));
    }
}
