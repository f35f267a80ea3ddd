//! # Affinity Library
//!
//! This library exposes the Affinity modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod api;
pub mod cli;

// Re-export affinity_core for convenience
pub use affinity_core;
