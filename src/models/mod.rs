// src/models/mod.rs

//! Domain models for the feed aggregator.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod channel;
mod config;
mod item;
mod report;

// Re-export all public types
pub use channel::OutputChannel;
pub use config::{ChannelConfig, Config, HttpConfig};
pub use item::{NormalizedItem, PUB_DATE_FORMAT, RawItem, min_timestamp, parse_pub_date};
pub use report::{FeedFailure, FetchReport, RunOutcome};
