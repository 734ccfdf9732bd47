// src/pipeline/info.rs

use crate::error::Result;
use crate::models::{Config, parse_pub_date};
use crate::storage::FeedStorage;
use crate::utils::log;

/// Show the configured sources and what the current output file holds.
pub async fn run_info(config: &Config, storage: &dyn FeedStorage) -> Result<()> {
    log::info(&format!("Configured sources: {}", config.sources.len()));

    let Some(bytes) = storage.read_feed(&config.output_file).await? else {
        log::info(&format!("No output yet at {}", config.output_file));
        return Ok(());
    };

    match rss::Channel::read_from(&bytes[..]) {
        Ok(channel) => {
            log::info(&format!("Output: {}", config.output_file));
            log::sub_item(&format!("Title: {}", channel.title()));
            log::sub_item(&format!("Items: {}", channel.items().len()));

            let newest = channel
                .items()
                .iter()
                .filter_map(|item| item.pub_date().and_then(parse_pub_date))
                .max();
            if let Some(ts) = newest {
                log::sub_item(&format!("Newest item: {}", ts.to_rfc2822()));
            }
        }
        Err(e) => log::warn(&format!(
            "Existing output {} is not valid RSS: {}",
            config.output_file, e
        )),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LocalStorage;

    #[tokio::test]
    async fn test_info_without_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());
        let config = Config::default();

        assert!(run_info(&config, &storage).await.is_ok());
    }

    #[tokio::test]
    async fn test_info_tolerates_invalid_output() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());
        let config = Config::default();
        storage
            .write_feed(&config.output_file, b"not xml")
            .await
            .unwrap();

        assert!(run_info(&config, &storage).await.is_ok());
    }
}
