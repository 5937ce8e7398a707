//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! money kernel test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built currencies, registries, and money values
//! - `assertions`: Custom assertion helpers for money values
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use assertions::*;
pub use generators::*;
