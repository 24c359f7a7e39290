//! Shared test utilities for the precip-field workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Reference cameras and locations
//! - Deterministic sample point generators
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;
