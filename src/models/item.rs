//! Feed item data structures.

use chrono::{DateTime, FixedOffset};

/// Format of a `pubDate` after its `<weekday>,` prefix.
///
/// Full dates look like `Wed, 01 Jan 2025 10:00:00 +0000`.
pub const PUB_DATE_FORMAT: &str = "%d %b %Y %H:%M:%S %z";

const WEEKDAYS: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// An item as it appears in a source feed, before any cleanup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub pub_date: Option<String>,
}

impl RawItem {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        pub_date: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            link: Some(link.into()),
            pub_date: Some(pub_date.into()),
        }
    }
}

impl From<&rss::Item> for RawItem {
    fn from(item: &rss::Item) -> Self {
        Self {
            title: item.title().map(str::to_string),
            link: item.link().map(str::to_string),
            pub_date: item.pub_date().map(str::to_string),
        }
    }
}

/// A trimmed item ready for output, with its parsed sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedItem {
    pub title: String,
    pub link: String,

    /// Raw date text, written back unchanged
    pub pub_date: String,

    /// Parsed `pub_date`, or [`min_timestamp`] when it could not be parsed
    pub published: DateTime<FixedOffset>,
}

impl NormalizedItem {
    /// Trim the raw fields and parse the publish date.
    pub fn from_raw(raw: &RawItem) -> Self {
        let title = trimmed(raw.title.as_deref());
        let link = trimmed(raw.link.as_deref());
        let pub_date = trimmed(raw.pub_date.as_deref());
        let published = parse_pub_date(&pub_date).unwrap_or_else(min_timestamp);

        Self {
            title,
            link,
            pub_date,
            published,
        }
    }

    /// Key used to collapse duplicates: the link, or the title without one.
    ///
    /// Returns `None` when both are empty.
    pub fn dedupe_key(&self) -> Option<&str> {
        if !self.link.is_empty() {
            Some(&self.link)
        } else if !self.title.is_empty() {
            Some(&self.title)
        } else {
            None
        }
    }
}

fn trimmed(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

/// Parse an RFC 2822 style `pubDate`.
///
/// The weekday has to be a weekday name but is not checked against the
/// calendar date; feeds often get it wrong.
pub fn parse_pub_date(text: &str) -> Option<DateTime<FixedOffset>> {
    let (weekday, rest) = text.trim().split_once(',')?;
    let weekday = weekday.trim().to_ascii_lowercase();
    if !WEEKDAYS.contains(&weekday.as_str()) {
        return None;
    }
    DateTime::<FixedOffset>::parse_from_str(rest.trim(), PUB_DATE_FORMAT).ok()
}

/// Sort key for items without a usable date.
pub fn min_timestamp() -> DateTime<FixedOffset> {
    DateTime::<chrono::Utc>::MIN_UTC.fixed_offset()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pub_date() {
        let parsed = parse_pub_date("Wed, 01 Jan 2025 10:00:00 +0000").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-01-01T10:00:00+00:00");

        let offset = parse_pub_date("Thu, 02 Jan 2025 10:00:00 +0900").unwrap();
        assert_eq!(offset.to_rfc3339(), "2025-01-02T10:00:00+09:00");
    }

    #[test]
    fn test_parse_pub_date_rejects_garbage() {
        assert!(parse_pub_date("").is_none());
        assert!(parse_pub_date("yesterday").is_none());
        assert!(parse_pub_date("2025-01-01T10:00:00Z").is_none());
        assert!(parse_pub_date("Wed, 01 Jan 2025 10:00:00 GMT").is_none());
        assert!(parse_pub_date("01 Jan 2025 10:00:00 +0000").is_none());
        assert!(parse_pub_date("Xyz, 01 Jan 2025 10:00:00 +0000").is_none());
        assert!(parse_pub_date("Wednesday, 01 Jan 2025 10:00:00 +0000").is_none());
    }

    #[test]
    fn test_parse_pub_date_ignores_wrong_weekday() {
        let parsed = parse_pub_date("Mon, 01 Jan 2025 10:00:00 +0000").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-01-01T10:00:00+00:00");

        let lowercase = parse_pub_date("fri, 02 Jan 2025 10:00:00 +0000").unwrap();
        assert_eq!(lowercase.to_rfc3339(), "2025-01-02T10:00:00+00:00");
    }

    #[test]
    fn test_from_raw_trims_fields() {
        let raw = RawItem::new(
            "  Title ",
            "\nhttps://example.com/a  ",
            " Wed, 01 Jan 2025 10:00:00 +0000 ",
        );
        let item = NormalizedItem::from_raw(&raw);
        assert_eq!(item.title, "Title");
        assert_eq!(item.link, "https://example.com/a");
        assert_eq!(item.pub_date, "Wed, 01 Jan 2025 10:00:00 +0000");
        assert!(item.published > min_timestamp());
    }

    #[test]
    fn test_missing_date_uses_min_timestamp() {
        let raw = RawItem {
            title: Some("Undated".into()),
            ..Default::default()
        };
        let item = NormalizedItem::from_raw(&raw);
        assert_eq!(item.pub_date, "");
        assert_eq!(item.published, min_timestamp());
    }

    #[test]
    fn test_dedupe_key() {
        let linked = NormalizedItem::from_raw(&RawItem::new("T", "L", ""));
        assert_eq!(linked.dedupe_key(), Some("L"));

        let titled = NormalizedItem::from_raw(&RawItem::new("T", "   ", ""));
        assert_eq!(titled.dedupe_key(), Some("T"));

        let empty = NormalizedItem::from_raw(&RawItem::default());
        assert_eq!(empty.dedupe_key(), None);
    }
}
