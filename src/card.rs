//! The flashcard value type

use serde::{Deserialize, Serialize};

/// A single flashcard: a prompt shown to the player and the answer
/// revealed on tap. Pure value, never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Question text shown face-up
    pub prompt: String,
    /// Answer text revealed on demand
    pub answer: String,
}

impl Card {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    /// Placeholder card used to demo an empty deck and in tests
    pub fn example() -> Self {
        Self::new(
            "Who played the 13th Doctor in Doctor Who?",
            "Jodie Whittaker",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_example_card() {
        let card = Card::example();
        assert_eq!(card.prompt, "Who played the 13th Doctor in Doctor Who?");
        assert_eq!(card.answer, "Jodie Whittaker");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&Card::new("Q", "A")).unwrap();
        assert_eq!(json, r#"{"prompt":"Q","answer":"A"}"#);
    }

    proptest! {
        #[test]
        fn test_json_round_trip(prompt in "\\PC*", answer in "\\PC*") {
            let card = Card::new(prompt, answer);
            let json = serde_json::to_string(&card).unwrap();
            let back: Card = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, card);
        }
    }
}
