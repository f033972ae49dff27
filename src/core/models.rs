use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::format::format_duration;

/// One row of the RescueTime productivity report.
///
/// On the wire a row is a 4-element array
/// `[rank, seconds_spent, number_of_people, productivity]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "(i64, u64, i64, i64)")]
pub struct ProductivityRow {
    pub rank: i64,
    pub seconds: u64,
    pub people: i64,
    pub productivity: i64,
}

impl From<(i64, u64, i64, i64)> for ProductivityRow {
    fn from((rank, seconds, people, productivity): (i64, u64, i64, i64)) -> Self {
        Self {
            rank,
            seconds,
            people,
            productivity,
        }
    }
}

impl ProductivityRow {
    pub fn is_productive(&self) -> bool {
        self.productivity > 0
    }

    pub fn is_distracting(&self) -> bool {
        self.productivity < 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductivityDataset {
    pub rows: Vec<ProductivityRow>,
}

impl ProductivityDataset {
    pub fn total_seconds(&self) -> u64 {
        self.rows.iter().map(|r| r.seconds).sum()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProductivityTotals {
    pub productive: u64,
    pub distracting: u64,
}

impl ProductivityTotals {
    pub fn summary(&self) -> String {
        format!(
            "P: {} D: {}",
            format_duration(self.productive),
            format_duration(self.distracting)
        )
    }
}

/// What the status bar shows, and until when it stays valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayPayload {
    pub full_text: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub cached_until: DateTime<Utc>,
}

#[derive(Clone)]
pub struct PollConfig {
    pub api_key: String,
    pub request_timeout: Duration,
    pub retry_interval: Duration,
    pub refresh_interval: Duration,
}

impl std::fmt::Debug for PollConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PollConfig")
            .field("api_key", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .field("retry_interval", &self.retry_interval)
            .field("refresh_interval", &self.refresh_interval)
            .finish()
    }
}
