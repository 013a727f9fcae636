//! Common utility functions shared across the normalization pipeline.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **Minimal dependencies** - only serde/serde_json

pub mod emptiness;
pub mod lenient;

// Re-export commonly used functions at crate root for convenience
pub use emptiness::{check_key_empty, is_empty};
pub use lenient::{lenient_string, lenient_string_or_default};
