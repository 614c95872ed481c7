//! Study session state
//!
//! One timed pass through a deck. The last card in the sequence is the
//! one on top of the stack and the only interactive one; the session
//! ends when the stack empties or the countdown reaches zero.

use crate::card::Card;
use crate::session::clock::SessionClock;

/// A running (or finished) study session: a session-local copy of the
/// deck plus the countdown clock. The shell polls accessors and redraws
/// after each event it delivers; there is no observer plumbing.
#[derive(Debug, Clone)]
pub struct Session {
    cards: Vec<Card>,
    clock: SessionClock,
}

impl Session {
    /// Start a session over the given deck, usually the persisted deck
    /// loaded once at this point. An empty deck begins paused and
    /// already over.
    pub fn start(deck: Vec<Card>) -> Self {
        let mut clock = SessionClock::new();
        if deck.is_empty() {
            clock.pause();
        }
        log::info!("Session started with {} cards", deck.len());
        Self { cards: deck, clock }
    }

    /// Throw away the current state and start over with a fresh deck
    pub fn restart(&mut self, deck: Vec<Card>) {
        *self = Self::start(deck);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The frontmost, interactive card
    pub fn top_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn remaining(&self) -> u32 {
        self.clock.remaining()
    }

    pub fn is_active(&self) -> bool {
        self.clock.is_active()
    }

    /// Seconds spent so far, for the end-of-session readout
    pub fn elapsed(&self) -> u32 {
        self.clock.elapsed()
    }

    /// Session over: stack empty or time up
    pub fn is_over(&self) -> bool {
        self.cards.is_empty() || self.clock.remaining() == 0
    }

    /// Swipe the top card away. Emptying the stack stops the clock.
    /// No-op when the stack is already empty.
    pub fn remove_top_card(&mut self) {
        if self.cards.pop().is_some() && self.cards.is_empty() {
            self.clock.pause();
        }
    }

    /// Explicit correct/incorrect action for the assistive path. Nothing
    /// is scored either way; the card just leaves the stack.
    pub fn mark_top(&mut self, correct: bool) {
        log::debug!("Top card marked {}", if correct { "correct" } else { "wrong" });
        self.remove_top_card();
    }

    /// Timer tick from the shell, nominally one per second
    pub fn on_tick(&mut self) {
        self.clock.tick();
    }

    /// App is resigning active (tab hidden, window blurred)
    pub fn on_background(&mut self) {
        self.clock.pause();
    }

    /// App returned to the foreground. A finished (empty) session stays
    /// paused; there is nothing left to time.
    pub fn on_foreground(&mut self) {
        if !self.cards.is_empty() {
            self.clock.resume();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_deck(count: usize) -> Vec<Card> {
        vec![Card::example(); count]
    }

    #[test]
    fn test_emptying_the_stack_ends_the_session() {
        let mut session = Session::start(example_deck(10));
        assert!(!session.is_over());

        for _ in 0..10 {
            session.remove_top_card();
        }
        // Over via the empty stack, independent of the clock
        assert!(session.is_over());
        assert_eq!(session.remaining(), 100);
        assert!(!session.is_active());

        // Extra removals are harmless
        session.remove_top_card();
        assert!(session.cards().is_empty());
    }

    #[test]
    fn test_timeout_ends_the_session() {
        let mut session = Session::start(example_deck(3));
        for _ in 0..100 {
            session.on_tick();
        }
        assert!(session.is_over());
        assert_eq!(session.remaining(), 0);
        assert_eq!(session.cards().len(), 3);
        assert_eq!(session.elapsed(), 100);
    }

    #[test]
    fn test_background_pauses_foreground_resumes() {
        let mut session = Session::start(example_deck(2));
        session.on_tick();
        session.on_background();
        for _ in 0..10 {
            session.on_tick();
        }
        assert_eq!(session.remaining(), 99);

        session.on_foreground();
        session.on_tick();
        assert_eq!(session.remaining(), 98);
    }

    #[test]
    fn test_foreground_does_not_revive_finished_session() {
        let mut session = Session::start(example_deck(1));
        session.remove_top_card();
        assert!(!session.is_active());

        session.on_foreground();
        assert!(!session.is_active());

        session.on_tick();
        assert_eq!(session.remaining(), 100);
    }

    #[test]
    fn test_empty_deck_starts_over_and_paused() {
        let session = Session::start(Vec::new());
        assert!(session.is_over());
        assert!(!session.is_active());
        assert!(session.top_card().is_none());
    }

    #[test]
    fn test_mark_top_removes_either_way() {
        let mut session = Session::start(example_deck(2));
        session.mark_top(true);
        assert_eq!(session.cards().len(), 1);
        session.mark_top(false);
        assert!(session.cards().is_empty());
        assert!(session.is_over());
    }

    #[test]
    fn test_restart_refills_deck_and_clock() {
        let mut session = Session::start(example_deck(1));
        session.on_tick();
        session.remove_top_card();
        assert!(session.is_over());

        session.restart(example_deck(4));
        assert!(!session.is_over());
        assert!(session.is_active());
        assert_eq!(session.remaining(), 100);
        assert_eq!(session.cards().len(), 4);
    }
}
