//! Common utility functions shared across the domain model.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **Minimal dependencies** - only serde for the lenient deserializers

pub mod lenient;
pub mod string;

pub use string::{is_blank, truncate_chars};
