//! # Emotional Level
//!
//! The scalar intensity that gets classified.
//!
//! Levels are conventionally expected to lie in [-1.0, 1.0], but the range is
//! not enforced: any `f32` is a valid input to the total classifier. Only the
//! strict constructors refuse NaN and infinities.

use crate::error::{AffinityError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lower end of the conventional level range.
pub const CONVENTIONAL_MIN: f32 = -1.0;

/// Upper end of the conventional level range.
pub const CONVENTIONAL_MAX: f32 = 1.0;

/// An emotional intensity.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmotionalLevel(pub f32);

impl EmotionalLevel {
    /// Wrap any value, finite or not.
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Wrap a value, rejecting NaN and infinities.
    pub fn try_new(value: f32) -> Result<Self> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(AffinityError::NonFinite(value))
        }
    }

    /// Get the raw value.
    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Check whether the level lies in the conventional [-1.0, 1.0] range.
    #[must_use]
    pub fn is_conventional(self) -> bool {
        (CONVENTIONAL_MIN..=CONVENTIONAL_MAX).contains(&self.0)
    }
}

impl From<f32> for EmotionalLevel {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

impl From<EmotionalLevel> for f32 {
    fn from(level: EmotionalLevel) -> Self {
        level.0
    }
}

impl fmt::Display for EmotionalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for EmotionalLevel {
    type Err = AffinityError;

    /// Parse decimal text. "NaN" and "inf" parse successfully; finiteness is
    /// checked separately by the caller.
    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<f32>()
            .map(Self)
            .map_err(|_| AffinityError::ParseLevel(s.to_string()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
