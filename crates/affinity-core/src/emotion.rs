//! # Emotion Trait
//!
//! The capability every emotion classifier provides.
//!
//! An emotion turns a level into a state. Implementations are independent
//! values with no shared base; each one only decides where its own cut points
//! sit.

use crate::error::{AffinityError, Result};
use crate::state::EmotionalState;

/// A classifier from emotional level to emotional state.
pub trait Emotion {
    /// Stable lower-case name, used in reports and API responses.
    fn name(&self) -> &'static str;

    /// Classify a level. Total: every `f32`, including NaN, yields a state.
    fn evaluate(&self, level: f32) -> EmotionalState;

    /// Classify a level, refusing NaN and infinities.
    fn try_evaluate(&self, level: f32) -> Result<EmotionalState> {
        if !level.is_finite() {
            return Err(AffinityError::NonFinite(level));
        }
        Ok(self.evaluate(level))
    }
}
