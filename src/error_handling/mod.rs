//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization and input loading
//! - Categorization of request failures into `NetworkErrorKind`
//!
//! Only initialization and load errors are fatal. Request failures are
//! carried as values inside validation results and fetch outcomes.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{InitializationError, LoadError, NetworkErrorKind};
