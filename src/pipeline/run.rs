// src/pipeline/run.rs

//! Feed aggregation pipeline.

use crate::error::Result;
use crate::models::{Config, OutputChannel, RunOutcome};
use crate::services::{FeedFetcher, FeedWriter, ItemAggregator};
use crate::storage::FeedStorage;
use crate::utils::log::{self, Status};

const TOTAL_STEPS: usize = 3;

/// Run the full pipeline: fetch → aggregate → write.
///
/// Per-feed failures and empty results are reported through the returned
/// [`RunOutcome`]; only unexpected failures such as an unwritable output
/// path come back as errors.
pub async fn run_pipeline(config: &Config, storage: &dyn FeedStorage) -> Result<RunOutcome> {
    if !config.has_sources() {
        let outcome = RunOutcome::NoSources;
        emit_report(&outcome, 0);
        return Ok(outcome);
    }

    log::step(
        1,
        TOTAL_STEPS,
        &format!("Fetch - Downloading {} source feeds", config.sources.len()),
    );
    let fetcher = FeedFetcher::new(&config.http)?;
    let report = fetcher.fetch_all(&config.sources).await;

    if report.items.is_empty() {
        let outcome = RunOutcome::NoItems {
            failed: report.failed_count(),
        };
        emit_report(&outcome, config.sources.len());
        return Ok(outcome);
    }

    log::step(
        2,
        TOTAL_STEPS,
        &format!("Aggregate - Merging {} items", report.items.len()),
    );
    let items = ItemAggregator::new(config.max_items).aggregate(&report.items);
    ::log::debug!(
        "{} raw items reduced to {} after dedupe and truncation",
        report.items.len(),
        items.len()
    );

    log::step(3, TOTAL_STEPS, "Write - Generating RSS feed");
    let channel = OutputChannel::new(config.channel.clone(), items);
    let path = FeedWriter::new(storage)
        .write(&channel, &config.output_file)
        .await?;

    let outcome = RunOutcome::Written {
        path,
        item_count: channel.item_count(),
        failed: report.failed_count(),
    };
    emit_report(&outcome, config.sources.len());
    for failure in &report.failures {
        log::sub_item(&format!(
            "[{}] {}: {}",
            failure.error.kind(),
            failure.url,
            failure.error
        ));
    }

    log::summary(
        "Aggregation",
        &[
            ("Feeds fetched", report.fetched.to_string()),
            ("Feeds failed", report.failed_count().to_string()),
            ("Items written", channel.item_count().to_string()),
        ],
    );

    Ok(outcome)
}

/// Status lines describing how a run ended.
///
/// `total_feeds` is the number of configured sources the run attempted.
pub fn outcome_report(outcome: &RunOutcome, total_feeds: usize) -> Vec<(Status, String)> {
    match outcome {
        RunOutcome::NoSources => vec![(
            Status::Error,
            "No usable source_feeds or source_feed configured. Nothing to do.".to_string(),
        )],
        RunOutcome::NoItems { failed } => vec![(
            Status::Warn,
            format!(
                "No items fetched from {} feeds ({} failed). Output left untouched.",
                total_feeds, failed
            ),
        )],
        RunOutcome::Written { path, failed, .. } => {
            let mut lines = vec![(
                Status::Success,
                format!("RSS feed generated at {}", path.display()),
            )];
            if *failed > 0 {
                lines.push((
                    Status::Warn,
                    format!("{} of {} feeds failed", failed, total_feeds),
                ));
            }
            lines
        }
    }
}

fn emit_report(outcome: &RunOutcome, total_feeds: usize) {
    for (status, line) in outcome_report(outcome, total_feeds) {
        log::emit(status, &line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::log::format_status;
    use std::path::PathBuf;

    fn rendered(outcome: &RunOutcome, total: usize) -> Vec<String> {
        outcome_report(outcome, total)
            .iter()
            .map(|(status, line)| format_status(*status, line))
            .collect()
    }

    #[test]
    fn test_no_sources_is_reported_as_error() {
        let lines = rendered(&RunOutcome::NoSources, 0);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("❌ No usable source_feeds"));
    }

    #[test]
    fn test_no_items_warns_with_failed_count() {
        let lines = rendered(&RunOutcome::NoItems { failed: 2 }, 3);
        assert_eq!(
            lines,
            vec!["⚠️ No items fetched from 3 feeds (2 failed). Output left untouched.".to_string()]
        );
    }

    #[test]
    fn test_written_without_failures_has_single_line() {
        let outcome = RunOutcome::Written {
            path: PathBuf::from("docs/news-feed.xml"),
            item_count: 5,
            failed: 0,
        };
        assert_eq!(
            rendered(&outcome, 2),
            vec!["✅ RSS feed generated at docs/news-feed.xml".to_string()]
        );
    }

    #[test]
    fn test_written_with_failures_adds_warning() {
        let outcome = RunOutcome::Written {
            path: PathBuf::from("out.xml"),
            item_count: 1,
            failed: 1,
        };
        let report = outcome_report(&outcome, 4);
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].0, Status::Success);
        assert_eq!(report[1], (Status::Warn, "1 of 4 feeds failed".to_string()));
    }
}
