//! # Affinity Core
//!
//! Classifies an emotional level into a discrete emotional state.
//!
//! ```text
//!   level: f32 ──► Emotion::evaluate ──► EmotionalState
//!                  (Love, thresholds)    HATE | DISLIKE | NONE | LIKE | LOVE
//! ```
//!
//! The crate is pure and synchronous: no I/O, no shared state, no logging.
//! Surfaces (CLI, HTTP) live in `apps/affinity`.
//!
//! ```
//! use affinity_core::{classify, EmotionalState};
//!
//! assert_eq!(classify(0.8), EmotionalState::Love);
//! assert_eq!(classify(-0.6), EmotionalState::Dislike);
//! assert_eq!(classify(0.1), EmotionalState::None);
//! ```

pub mod emotion;
pub mod error;
pub mod level;
pub mod love;
pub mod report;
pub mod state;
pub mod thresholds;

pub use emotion::Emotion;
pub use error::{AffinityError, Result};
pub use level::{CONVENTIONAL_MAX, CONVENTIONAL_MIN, EmotionalLevel};
pub use love::{Love, classify};
pub use report::{Evaluation, EvaluationReport, Rejection};
pub use state::EmotionalState;
pub use thresholds::{Band, Bound, DEFAULT_MILD, DEFAULT_STRONG, Thresholds};
