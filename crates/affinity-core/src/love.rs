//! # Love
//!
//! The emotion spanning hate to love.
//!
//! `Love` walks the comparison chain from the extremes inwards:
//!
//! 1. below `-strong` is HATE
//! 2. below `-mild` is DISLIKE
//! 3. above `strong` is LOVE
//! 4. above `mild` is LIKE
//! 5. anything left is NONE
//!
//! Comparisons happen in `f32` against `f32` cut points, so a level written as
//! the same literal as a cut point lands exactly on it. NaN fails every
//! comparison and falls through to NONE; the infinities land in HATE and LOVE.
//! Use [`Emotion::try_evaluate`] to reject those inputs instead.

use crate::emotion::Emotion;
use crate::error::Result;
use crate::report::Evaluation;
use crate::state::EmotionalState;
use crate::thresholds::Thresholds;

/// Threshold classifier for the hate-love axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Love {
    thresholds: Thresholds,
}

impl Love {
    /// Name reported by [`Emotion::name`].
    pub const NAME: &'static str = "love";

    /// Create a classifier with custom cut points.
    #[must_use]
    pub const fn with_thresholds(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    #[must_use]
    pub const fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Classify and record the result.
    #[must_use]
    pub fn evaluation(&self, level: f32) -> Evaluation {
        Evaluation::new(Self::NAME, level, self.evaluate(level))
    }

    /// Strict variant of [`Love::evaluation`].
    pub fn try_evaluation(&self, level: f32) -> Result<Evaluation> {
        let state = self.try_evaluate(level)?;
        Ok(Evaluation::new(Self::NAME, level, state))
    }
}

impl Emotion for Love {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn evaluate(&self, level: f32) -> EmotionalState {
        let mild = self.thresholds.mild();
        let strong = self.thresholds.strong();

        if level < -strong {
            EmotionalState::Hate
        } else if level < -mild {
            EmotionalState::Dislike
        } else if level > strong {
            EmotionalState::Love
        } else if level > mild {
            EmotionalState::Like
        } else {
            EmotionalState::None
        }
    }
}

/// Classify a level on the hate-love axis with the default thresholds.
#[must_use]
pub fn classify(level: f32) -> EmotionalState {
    Love::default().evaluate(level)
}

// =============================================================================
// TESTS
// =============================================================================
