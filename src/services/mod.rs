//! Service layer for the feed aggregator.
//!
//! This module contains the business logic for:
//! - Source feed fetching (`FeedFetcher`)
//! - Item merging, dedupe and ordering (`ItemAggregator`)
//! - RSS output generation (`FeedWriter`)

mod aggregator;
mod fetcher;
mod writer;

pub use aggregator::{ItemAggregator, dedupe, sort_by_date_desc};
pub use fetcher::{FeedFetcher, parse_items};
pub use writer::{FeedWriter, render};
