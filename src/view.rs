//! Card stack presentation helpers
//!
//! Pure layout/appearance decisions, kept out of the DOM shell so they
//! can be unit tested. The shell turns these into CSS.

use crate::card::Card;
use crate::consts::STACK_SPACING;
use crate::settings::Settings;
use crate::swipe::DragState;

/// Vertical offset of a card within the stack. Cards lower in the deck
/// sit further down, so the stack reads as a pile.
pub fn stacked_offset(position: usize, total: usize) -> f32 {
    (total - position) as f32 * STACK_SPACING
}

/// Which text a card shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace<'a> {
    /// One large text, prompt or answer (assistive mode reads one thing
    /// at a time)
    Single(&'a str),
    /// Prompt, with the answer revealed below it on demand
    Full {
        prompt: &'a str,
        answer: Option<&'a str>,
    },
}

/// Pick the face for a card given the reveal toggle and settings
pub fn card_face<'a>(card: &'a Card, showing_answer: bool, settings: &Settings) -> CardFace<'a> {
    if settings.accessibility_enabled {
        CardFace::Single(if showing_answer {
            &card.answer
        } else {
            &card.prompt
        })
    } else {
        CardFace::Full {
            prompt: &card.prompt,
            answer: showing_answer.then_some(card.answer.as_str()),
        }
    }
}

/// Directional tint behind the fading card fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Green,
    Red,
}

/// Tint for the current drag, or None when color is not used to carry
/// meaning (explicit mark buttons take over instead)
pub fn swipe_tint(drag_x: f32, settings: &Settings) -> Option<Tint> {
    if settings.differentiate_without_color {
        return None;
    }
    Some(if drag_x > 0.0 { Tint::Green } else { Tint::Red })
}

/// Opacity of the white card fill. Fades to expose the tint while
/// dragging, except when the tint is suppressed; then it stays opaque.
pub fn card_fill_opacity(drag: &DragState, settings: &Settings) -> f32 {
    if settings.differentiate_without_color {
        1.0
    } else {
        drag.fill_opacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_stacked_offsets_pile_downward() {
        // Top card (last position) sits highest
        assert_eq!(stacked_offset(9, 10), 10.0);
        assert_eq!(stacked_offset(0, 10), 100.0);
        assert_eq!(stacked_offset(0, 1), 10.0);
    }

    #[test]
    fn test_card_face_default_mode() {
        let card = Card::new("Q", "A");
        let settings = Settings::default();

        assert_eq!(
            card_face(&card, false, &settings),
            CardFace::Full {
                prompt: "Q",
                answer: None
            }
        );
        assert_eq!(
            card_face(&card, true, &settings),
            CardFace::Full {
                prompt: "Q",
                answer: Some("A")
            }
        );
    }

    #[test]
    fn test_card_face_assistive_mode() {
        let card = Card::new("Q", "A");
        let settings = Settings {
            accessibility_enabled: true,
            ..Default::default()
        };

        assert_eq!(card_face(&card, false, &settings), CardFace::Single("Q"));
        assert_eq!(card_face(&card, true, &settings), CardFace::Single("A"));
    }

    #[test]
    fn test_tint_follows_drag_direction() {
        let settings = Settings::default();
        assert_eq!(swipe_tint(40.0, &settings), Some(Tint::Green));
        assert_eq!(swipe_tint(-40.0, &settings), Some(Tint::Red));
        assert_eq!(swipe_tint(0.0, &settings), Some(Tint::Red));
    }

    #[test]
    fn test_differentiate_without_color_suppresses_tint() {
        let settings = Settings {
            differentiate_without_color: true,
            ..Default::default()
        };
        assert_eq!(swipe_tint(120.0, &settings), None);

        let mut drag = DragState::default();
        drag.drag_to(Vec2::new(120.0, 0.0));
        assert_eq!(card_fill_opacity(&drag, &settings), 1.0);
        assert_eq!(card_fill_opacity(&drag, &Settings::default()), 0.0);
    }
}
