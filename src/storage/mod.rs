//! Storage abstractions for the generated feed.
//!
//! The aggregator keeps no state between runs; the only thing ever
//! persisted is the output document itself.

pub mod local;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::Result;

// Re-export for convenience
pub use local::LocalStorage;

/// Trait for feed output backends.
#[async_trait]
pub trait FeedStorage: Send + Sync {
    /// Write a rendered feed under `key`, creating parent directories.
    ///
    /// Returns the location that was written.
    async fn write_feed(&self, key: &str, bytes: &[u8]) -> Result<PathBuf>;

    /// Read a previously written feed, or `None` if there is none yet.
    async fn read_feed(&self, key: &str) -> Result<Option<Vec<u8>>>;
}
