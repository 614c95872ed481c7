//! Pure gesture layer
//!
//! Classifies a finished drag and exposes the drag-driven presentation
//! math (tilt, translation, fades) so the card view stays a dumb
//! renderer. No DOM or animation types in here.

use glam::Vec2;

use crate::consts::{FADE_DISTANCE, SWIPE_THRESHOLD};

/// What a finished drag means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Released inside the threshold; the card snaps back
    None,
    /// Swiped right: answered correctly
    MarkCorrect,
    /// Swiped left: answered incorrectly
    MarkIncorrect,
}

/// Haptic/audio cue for a completed swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Success,
    Error,
}

impl SwipeOutcome {
    /// Cue to fire when the swipe completes, if any
    pub fn feedback(self) -> Option<Feedback> {
        match self {
            SwipeOutcome::None => None,
            SwipeOutcome::MarkCorrect => Some(Feedback::Success),
            SwipeOutcome::MarkIncorrect => Some(Feedback::Error),
        }
    }
}

/// Classify a horizontal drag distance. The threshold is strict: a
/// release at exactly ±100 units snaps back.
pub fn classify_swipe(drag_x: f32) -> SwipeOutcome {
    if drag_x > SWIPE_THRESHOLD {
        SwipeOutcome::MarkCorrect
    } else if drag_x < -SWIPE_THRESHOLD {
        SwipeOutcome::MarkIncorrect
    } else {
        SwipeOutcome::None
    }
}

/// Transient state of the top card while the user interacts with it
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    /// Finger offset from the drag origin
    pub offset: Vec2,
    /// Answer revealed (tap toggles)
    pub showing_answer: bool,
}

impl DragState {
    /// Track the finger during a drag
    pub fn drag_to(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Finish the drag: classify it, snapping back when it didn't count
    pub fn release(&mut self) -> SwipeOutcome {
        let outcome = classify_swipe(self.offset.x);
        if outcome == SwipeOutcome::None {
            self.offset = Vec2::ZERO;
        }
        outcome
    }

    /// Reset for the next card
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Tap toggles between prompt and answer
    pub fn toggle_answer(&mut self) {
        self.showing_answer = !self.showing_answer;
    }

    /// Card tilt, in degrees
    pub fn rotation_degrees(&self) -> f32 {
        self.offset.x / 5.0
    }

    /// Horizontal translation; the card leads the finger
    pub fn x_translation(&self) -> f32 {
        self.offset.x * 2.0
    }

    /// Whole-card opacity: solid until one fade length out, gone at two
    pub fn card_opacity(&self) -> f32 {
        (2.0 - self.offset.x.abs() / FADE_DISTANCE).clamp(0.0, 1.0)
    }

    /// Opacity of the white fill drawn over the directional tint
    pub fn fill_opacity(&self) -> f32 {
        (1.0 - self.offset.x.abs() / FADE_DISTANCE).clamp(0.0, 1.0)
    }
}
