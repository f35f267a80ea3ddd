//! # Emotional State
//!
//! The closed set of labels a level can be classified into.

use crate::error::AffinityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A discrete emotional state.
///
/// Variants are declared from most negative to most positive, so the derived
/// `Ord` follows the level axis: `Hate < Dislike < None < Like < Love`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmotionalState {
    Hate,
    Dislike,
    None,
    Like,
    Love,
}

impl EmotionalState {
    /// All states in level order.
    pub const ALL: [EmotionalState; 5] = [
        EmotionalState::Hate,
        EmotionalState::Dislike,
        EmotionalState::None,
        EmotionalState::Like,
        EmotionalState::Love,
    ];

    /// The upper-case label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EmotionalState::Hate => "HATE",
            EmotionalState::Dislike => "DISLIKE",
            EmotionalState::None => "NONE",
            EmotionalState::Like => "LIKE",
            EmotionalState::Love => "LOVE",
        }
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, EmotionalState::Like | EmotionalState::Love)
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, EmotionalState::Hate | EmotionalState::Dislike)
    }

    #[must_use]
    pub const fn is_neutral(self) -> bool {
        matches!(self, EmotionalState::None)
    }

    /// The state on the opposite side of zero (HATE <-> LOVE, DISLIKE <-> LIKE).
    #[must_use]
    pub const fn mirror(self) -> Self {
        match self {
            EmotionalState::Hate => EmotionalState::Love,
            EmotionalState::Dislike => EmotionalState::Like,
            EmotionalState::None => EmotionalState::None,
            EmotionalState::Like => EmotionalState::Dislike,
            EmotionalState::Love => EmotionalState::Hate,
        }
    }
}

impl fmt::Display for EmotionalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionalState {
    type Err = AffinityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        EmotionalState::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AffinityError::UnknownState(s.to_string()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
