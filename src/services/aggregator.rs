// src/services/aggregator.rs

//! Item aggregation: dedupe, date sort and truncation.

use std::collections::HashSet;

use crate::models::{NormalizedItem, RawItem};

/// Merges raw items from all feeds into the final, ordered item list.
#[derive(Debug, Clone)]
pub struct ItemAggregator {
    max_items: usize,
}

impl ItemAggregator {
    pub fn new(max_items: usize) -> Self {
        Self { max_items }
    }

    /// Run the full aggregation over items in fetch order.
    pub fn aggregate(&self, raw: &[RawItem]) -> Vec<NormalizedItem> {
        let mut items = dedupe(raw);
        sort_by_date_desc(&mut items);
        items.truncate(self.max_items);
        items
    }
}

/// Normalize items and keep the first one seen for each dedupe key.
///
/// Items with neither a link nor a title are dropped.
pub fn dedupe(raw: &[RawItem]) -> Vec<NormalizedItem> {
    let mut seen = HashSet::new();
    let mut kept = Vec::new();

    for item in raw.iter().map(NormalizedItem::from_raw) {
        let Some(key) = item.dedupe_key() else {
            continue;
        };
        if seen.insert(key.to_string()) {
            kept.push(item);
        }
    }

    kept
}

/// Stable sort, newest first. Undated items end up last.
pub fn sort_by_date_desc(items: &mut [NormalizedItem]) {
    items.sort_by(|a, b| b.published.cmp(&a.published));
}
