// src/services/fetcher.rs

//! Source feed fetcher.
//!
//! Downloads each configured feed once, one after another, and collects
//! its items. A feed that cannot be fetched or parsed is recorded as a
//! failure and skipped; it never stops the remaining feeds.

use quick_xml::Reader;
use quick_xml::events::Event;
use reqwest::{Client, StatusCode};

use crate::error::{FeedError, Result};
use crate::models::{FeedFailure, FetchReport, HttpConfig, RawItem};
use crate::utils::{http, log};

/// Service for fetching source feeds.
pub struct FeedFetcher {
    client: Client,
}

impl FeedFetcher {
    /// Create a fetcher with a client built from the HTTP settings.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = http::create_async_client(config)?;
        Ok(Self { client })
    }

    /// Create a fetcher around an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetch every source in order and accumulate their items.
    pub async fn fetch_all(&self, sources: &[String]) -> FetchReport {
        let mut report = FetchReport::default();

        for url in sources {
            match self.fetch_feed(url).await {
                Ok(items) => {
                    log::info(&format!("Fetched {} items from {}", items.len(), url));
                    report.items.extend(items);
                    report.fetched += 1;
                }
                Err(error) => {
                    match &error {
                        FeedError::Network(_) => {
                            log::error(&format!("Network error for {}: {}", url, error))
                        }
                        FeedError::Status(code) => log::warn(&format!(
                            "Feed {} returned HTTP {}. Skipping.",
                            url, code
                        )),
                        FeedError::Parse(_) => {
                            log::error(&format!("Could not parse feed {}: {}", url, error))
                        }
                    }
                    report.failures.push(FeedFailure {
                        url: url.clone(),
                        error,
                    });
                }
            }
        }

        report
    }

    /// Fetch a single feed and extract its items.
    pub async fn fetch_feed(&self, url: &str) -> std::result::Result<Vec<RawItem>, FeedError> {
        ::log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FeedError::Network)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(FeedError::Network)?;
        parse_items(&body)
    }
}

/// Parse an RSS document and return its `channel/item` entries in order.
///
/// The whole body must be well-formed XML, not only the part up to the
/// closing `</channel>`.
pub fn parse_items(body: &[u8]) -> std::result::Result<Vec<RawItem>, FeedError> {
    check_well_formed(body)?;
    let channel = rss::Channel::read_from(body).map_err(|e| FeedError::Parse(e.to_string()))?;
    Ok(channel.items().iter().map(RawItem::from).collect())
}

/// Read the body to EOF and require exactly one closed root element.
fn check_well_formed(body: &[u8]) -> std::result::Result<(), FeedError> {
    let mut reader = Reader::from_reader(body);
    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| FeedError::Parse(e.to_string()))?;

        match event {
            Event::Eof => break,
            Event::Start(_) if depth > 0 => depth += 1,
            Event::End(_) => depth = depth.saturating_sub(1),
            _ if depth > 0 => {}
            Event::Start(_) | Event::Empty(_) if seen_root => {
                return Err(FeedError::Parse("junk after document element".into()));
            }
            Event::Start(_) => {
                seen_root = true;
                depth = 1;
            }
            Event::Empty(_) => seen_root = true,
            Event::Text(text) if text.iter().all(u8::is_ascii_whitespace) => {}
            Event::Decl(_) | Event::PI(_) | Event::Comment(_) | Event::DocType(_) => {}
            _ => return Err(FeedError::Parse("text outside document element".into())),
        }
        buf.clear();
    }

    if !seen_root {
        return Err(FeedError::Parse("no element found".into()));
    }
    if depth > 0 {
        return Err(FeedError::Parse(format!(
            "{depth} unclosed element(s) at end of document"
        )));
    }
    Ok(())
}
