// src/services/writer.rs

//! RSS 2.0 output generation.

use std::path::PathBuf;

use rss::{ChannelBuilder, ItemBuilder};

use crate::error::{AppError, Result};
use crate::models::{NormalizedItem, OutputChannel};
use crate::storage::FeedStorage;

/// Indentation of the pretty-printed output.
const INDENT_CHAR: u8 = b' ';
const INDENT_SIZE: usize = 2;

/// Renders the merged channel and hands it to a storage backend.
pub struct FeedWriter<'a> {
    storage: &'a dyn FeedStorage,
}

impl<'a> FeedWriter<'a> {
    pub fn new(storage: &'a dyn FeedStorage) -> Self {
        Self { storage }
    }

    /// Render `channel` and store it under `key`, returning the written path.
    pub async fn write(&self, channel: &OutputChannel, key: &str) -> Result<PathBuf> {
        let xml = render(channel)?;
        self.storage.write_feed(key, &xml).await
    }
}

/// Serialize the channel as a pretty-printed RSS 2.0 document.
///
/// Items carry only `title`, `link` and `pubDate`.
pub fn render(channel: &OutputChannel) -> Result<Vec<u8>> {
    let items: Vec<rss::Item> = channel.items.iter().map(to_rss_item).collect();

    let rss_channel = ChannelBuilder::default()
        .title(channel.info.title.clone())
        .link(channel.info.link.clone())
        .description(channel.info.description.clone())
        .language(Some(channel.info.language.clone()))
        .items(items)
        .build();

    rss_channel
        .pretty_write_to(Vec::new(), INDENT_CHAR, INDENT_SIZE)
        .map_err(AppError::serialize)
}

fn to_rss_item(item: &NormalizedItem) -> rss::Item {
    ItemBuilder::default()
        .title(Some(item.title.clone()))
        .link(Some(item.link.clone()))
        .pub_date(Some(item.pub_date.clone()))
        .build()
}
