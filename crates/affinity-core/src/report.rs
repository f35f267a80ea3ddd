//! # Report Module
//!
//! Structured output for one or many classifications.
//!
//! - Every evaluation records the emotion, the input level and the state
//! - Every rejection records the raw input and why it was not classified
//! - Nothing is dropped silently: a batch report accounts for every input

use crate::state::EmotionalState;
use serde::{Deserialize, Serialize};

/// The outcome of classifying one level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Name of the emotion that produced the state.
    pub emotion: String,
    /// The level that was classified.
    pub level: f32,
    /// The resulting state.
    pub state: EmotionalState,
}

impl Evaluation {
    #[must_use]
    pub fn new(emotion: impl Into<String>, level: f32, state: EmotionalState) -> Self {
        Self {
            emotion: emotion.into(),
            level,
            state,
        }
    }
}

/// An input that was not classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// The raw input as received.
    pub input: String,
    /// Why the input was rejected.
    pub reason: String,
}

impl Rejection {
    #[must_use]
    pub fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Results of a batch, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub evaluations: Vec<Evaluation>,
    pub rejections: Vec<Rejection>,
}

impl EvaluationReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_evaluation(&mut self, evaluation: Evaluation) {
        self.evaluations.push(evaluation);
    }

    pub fn add_rejection(&mut self, rejection: Rejection) {
        self.rejections.push(rejection);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.evaluations.is_empty() && self.rejections.is_empty()
    }

    /// Number of evaluations that ended in `state`.
    #[must_use]
    pub fn count(&self, state: EmotionalState) -> usize {
        self.evaluations.iter().filter(|e| e.state == state).count()
    }

    /// Format as plain text with the standard template.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str("┌─────────────────────────────────────┐\n");
        output.push_str("│ EVALUATIONS                         │\n");

        if self.evaluations.is_empty() {
            output.push_str("│ - (none)                            │\n");
        } else {
            for eval in &self.evaluations {
                output.push_str(&format!(
                    "│ - {} → {} [{}]\n",
                    eval.level, eval.state, eval.emotion
                ));
            }
        }

        output.push_str("├─────────────────────────────────────┤\n");
        output.push_str("│ REJECTED                            │\n");

        if self.rejections.is_empty() {
            output.push_str("│ - (none)                            │\n");
        } else {
            for rej in &self.rejections {
                output.push_str(&format!("│ - {:?}: {}\n", rej.input, rej.reason));
            }
        }

        output.push_str("├─────────────────────────────────────┤\n");
        output.push_str("│ SUMMARY                             │\n");
        for state in EmotionalState::ALL {
            output.push_str(&format!("│ - {:<8} {}\n", state.as_str(), self.count(state)));
        }

        output.push_str("└─────────────────────────────────────┘\n");

        output
    }
}

// =============================================================================
// TESTS
// =============================================================================
