//! Fetch and run results.

use std::path::PathBuf;

use crate::error::FeedError;

use super::RawItem;

/// A source feed that was skipped, and why.
#[derive(Debug)]
pub struct FeedFailure {
    pub url: String,
    pub error: FeedError,
}

/// Everything gathered from one pass over the configured sources.
#[derive(Debug, Default)]
pub struct FetchReport {
    /// Items in feed order, then document order within each feed
    pub items: Vec<RawItem>,

    /// Sources that could not be used
    pub failures: Vec<FeedFailure>,

    /// Number of sources fetched and parsed successfully
    pub fetched: usize,
}

impl FetchReport {
    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }
}

/// How a run ended.
///
/// Every variant is a successful outcome for the scheduler; they only
/// differ in what gets reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No usable source URL was configured
    NoSources,

    /// Nothing was fetched, so no file was written
    NoItems { failed: usize },

    /// A new feed file was written
    Written {
        path: PathBuf,
        item_count: usize,
        failed: usize,
    },
}

impl RunOutcome {
    /// Whether an output file was produced.
    pub fn wrote_output(&self) -> bool {
        matches!(self, RunOutcome::Written { .. })
    }

    /// Number of sources that failed during the run.
    pub fn failed_feeds(&self) -> usize {
        match self {
            RunOutcome::NoSources => 0,
            RunOutcome::NoItems { failed } | RunOutcome::Written { failed, .. } => *failed,
        }
    }
}
