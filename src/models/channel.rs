// src/models/channel.rs

use super::{ChannelConfig, NormalizedItem};

/// The merged channel that gets written out.
#[derive(Debug, Clone)]
pub struct OutputChannel {
    pub info: ChannelConfig,
    pub items: Vec<NormalizedItem>,
}

impl OutputChannel {
    pub fn new(info: ChannelConfig, items: Vec<NormalizedItem>) -> Self {
        Self { info, items }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
