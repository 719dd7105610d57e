//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - HTTP clients (redirect-following and non-following)
//! - Logger
//! - Concurrency limiter for bulk fetches
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use client::{init_client, init_redirect_client};
pub use logger::init_logger_with;

/// Initializes a semaphore for controlling concurrency.
///
/// A `count` of zero means no limit and yields a semaphore with the maximum
/// number of permits, so callers can acquire unconditionally. Counts above
/// `Semaphore::MAX_PERMITS` are clamped to it.
///
/// # Arguments
///
/// * `count` - Maximum number of concurrent operations allowed (0 = unbounded)
///
/// # Returns
///
/// An `Arc<Semaphore>` that can be shared across multiple tasks.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    let permits = if count == 0 {
        Semaphore::MAX_PERMITS
    } else {
        count.min(Semaphore::MAX_PERMITS)
    };
    Arc::new(Semaphore::new(permits))
}
