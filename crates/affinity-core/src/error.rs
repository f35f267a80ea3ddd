//! # Error Module
//!
//! Errors raised by the strict entry points of the classifier.
//!
//! The total classifier (`Emotion::evaluate`) never fails. These errors only
//! come from validation: parsing text, checking thresholds, and the strict
//! `try_evaluate` path that refuses non-finite levels.

use thiserror::Error;

/// Errors from Affinity core operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AffinityError {
    /// The level is NaN or infinite.
    #[error("emotional level must be finite, got {0}")]
    NonFinite(f32),

    /// Thresholds violate `0.0 <= mild < strong`.
    #[error("invalid thresholds: mild={mild}, strong={strong} (expected 0 <= mild < strong)")]
    InvalidThresholds { mild: f32, strong: f32 },

    /// Text could not be parsed as a level.
    #[error("cannot parse emotional level from {0:?}")]
    ParseLevel(String),

    /// Text is not one of the known state labels.
    #[error("unknown emotional state {0:?}")]
    UnknownState(String),
}

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, AffinityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = AffinityError::ParseLevel("abc".to_string());
        assert_eq!(err.to_string(), "cannot parse emotional level from \"abc\"");

        let err = AffinityError::NonFinite(f32::INFINITY);
        assert!(err.to_string().contains("inf"));

        let err = AffinityError::InvalidThresholds {
            mild: 0.7,
            strong: 0.6,
        };
        assert!(err.to_string().contains("mild=0.7"));
    }
}
