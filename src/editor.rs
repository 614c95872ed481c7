//! Card editor
//!
//! Two draft text fields and the add/delete operations over the store.
//! Validation is minimal: both fields must be non-empty after trimming,
//! and a rejected add changes nothing at all.

use std::collections::BTreeSet;

use crate::card::Card;
use crate::deck::CardStore;
use crate::platform::Storage;

/// Edit-screen state: the two entry fields
#[derive(Debug, Clone, Default)]
pub struct Editor {
    pub draft_prompt: String,
    pub draft_answer: String,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim both drafts and insert a new card at the front of the deck.
    /// An empty prompt or answer after trimming rejects the add silently
    /// and leaves the drafts in place for correction.
    pub fn add_card<S: Storage>(&mut self, store: &mut CardStore<S>) {
        let prompt = self.draft_prompt.trim();
        let answer = self.draft_answer.trim();
        if prompt.is_empty() || answer.is_empty() {
            return;
        }

        store.insert_front(Card::new(prompt, answer));
        self.draft_prompt.clear();
        self.draft_answer.clear();
    }

    /// Delete the selected rows, interpreted against the current list
    pub fn delete_cards<S: Storage>(&self, store: &mut CardStore<S>, indices: &BTreeSet<usize>) {
        store.remove_many(indices);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStorage;

    #[test]
    fn test_add_card_trims_and_prepends() {
        let mut store = CardStore::new(MemoryStorage::new());
        let mut editor = Editor::new();
        editor.draft_prompt = "  Q  ".into();
        editor.draft_answer = "\tA\n".into();
        editor.add_card(&mut store);

        assert_eq!(store.cards(), &[Card::new("Q", "A")]);
        assert_eq!(store.storage().writes(), 1);
        // Successful add clears the entry fields
        assert!(editor.draft_prompt.is_empty());
        assert!(editor.draft_answer.is_empty());
    }

    #[test]
    fn test_add_card_rejects_blank_fields() {
        let mut store = CardStore::new(MemoryStorage::new());
        let mut editor = Editor::new();
        editor.draft_prompt = "   ".into();
        editor.draft_answer = "answer".into();
        editor.add_card(&mut store);

        assert!(store.is_empty());
        assert_eq!(store.storage().writes(), 0);
        // Rejected adds keep the drafts for correction
        assert_eq!(editor.draft_answer, "answer");

        editor.draft_prompt = "prompt".into();
        editor.draft_answer = String::new();
        editor.add_card(&mut store);
        assert!(store.is_empty());
    }

    #[test]
    fn test_new_cards_stack_at_front() {
        let mut store = CardStore::new(MemoryStorage::new());
        let mut editor = Editor::new();
        for (p, a) in [("q0", "a0"), ("q1", "a1")] {
            editor.draft_prompt = p.into();
            editor.draft_answer = a.into();
            editor.add_card(&mut store);
        }
        assert_eq!(store.cards()[0].prompt, "q1");
        assert_eq!(store.cards()[1].prompt, "q0");
    }

    #[test]
    fn test_delete_cards_delegates_to_store() {
        let mut store = CardStore::new(MemoryStorage::new());
        let mut editor = Editor::new();
        for i in 0..4 {
            editor.draft_prompt = format!("q{i}");
            editor.draft_answer = format!("a{i}");
            editor.add_card(&mut store);
        }
        // Front-to-back order is q3, q2, q1, q0
        editor.delete_cards(&mut store, &BTreeSet::from([0, 2]));
        let prompts: Vec<&str> = store.cards().iter().map(|c| c.prompt.as_str()).collect();
        assert_eq!(prompts, ["q2", "q0"]);
    }
}
