//! Folds the run's alert records into the single outgoing message.

use chrono::{DateTime, Utc};

use crate::models::signal::AlertRecord;

const HEADER_TITLE: &str = "🔔 *MARKET ALERT*";

pub struct Report;

impl Report {
    /// Concatenate alert texts in watchlist order. Empty texts are dropped.
    pub fn body(records: &[AlertRecord]) -> String {
        records
            .iter()
            .map(|r| r.text.trim())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Full message with the scan-time header, or `None` when nothing fired.
    pub fn compose(records: &[AlertRecord], scanned_at: DateTime<Utc>) -> Option<String> {
        let body = Self::body(records);
        if body.is_empty() {
            return None;
        }
        Some(format!(
            "{}\nScan time: {} UTC\n\n{}",
            HEADER_TITLE,
            scanned_at.format("%Y-%m-%d %H:%M"),
            body
        ))
    }
}
