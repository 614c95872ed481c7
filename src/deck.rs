//! Card storage with best-effort JSON persistence
//!
//! The deck is an ordered sequence of cards: position 0 is the editor's
//! "newest" slot, the last position is the card on top of the session
//! stack. Every mutation writes the whole deck back to storage; load and
//! save failures are absorbed silently.

use std::collections::BTreeSet;

use crate::card::Card;
use crate::platform::Storage;

/// Ordered card sequence bound to a storage backend
#[derive(Debug)]
pub struct CardStore<S: Storage> {
    cards: Vec<Card>,
    storage: S,
}

impl<S: Storage> CardStore<S> {
    /// Storage key for the serialized deck
    const STORAGE_KEY: &'static str = "flashdeck_cards";

    /// Create an empty store bound to a backend
    pub fn new(storage: S) -> Self {
        Self {
            cards: Vec::new(),
            storage,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Access the underlying storage backend
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Replace the in-memory deck from storage. Absent keys and malformed
    /// payloads leave the current deck unchanged.
    pub fn load(&mut self) {
        if let Some(json) = self.storage.get(Self::STORAGE_KEY) {
            match serde_json::from_str::<Vec<Card>>(&json) {
                Ok(cards) => {
                    log::info!("Loaded {} cards", cards.len());
                    self.cards = cards;
                }
                Err(_) => log::debug!("Ignoring malformed saved deck"),
            }
        } else {
            log::info!("No saved deck found");
        }
    }

    /// Write the deck to storage. Best-effort, no retry.
    pub fn save(&mut self) {
        if let Ok(json) = serde_json::to_string(&self.cards) {
            self.storage.set(Self::STORAGE_KEY, &json);
        }
    }

    /// Prepend a card and persist
    pub fn insert_front(&mut self, card: Card) {
        self.cards.insert(0, card);
        self.save();
    }

    /// Delete the card at `index` and persist; out-of-range is a no-op
    pub fn remove_at(&mut self, index: usize) {
        if index >= self.cards.len() {
            return;
        }
        self.cards.remove(index);
        self.save();
    }

    /// Delete every listed position in one pass and persist. Indices are
    /// interpreted against the deck as it was before any deletion;
    /// out-of-range members are ignored.
    pub fn remove_many(&mut self, indices: &BTreeSet<usize>) {
        let mut position = 0;
        self.cards.retain(|_| {
            let keep = !indices.contains(&position);
            position += 1;
            keep
        });
        self.save();
    }
}
