//! `medtrack-fixtures` — the fixed demo dataset and its container.
//!
//! All domain records are loaded once at startup and never mutated. The
//! [`Dataset`] also owns foreign-reference resolution: a dangling id degrades
//! to the `"Unknown"` display placeholder with a warning, never a panic.

pub mod dataset;
pub mod seed;

pub use dataset::{Dataset, UNKNOWN};
pub use seed::seed;
