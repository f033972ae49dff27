mod rescuetime;

use crate::core::models::ProductivityDataset;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;
use thiserror::Error;

pub use rescuetime::RescueTimeSource;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Supplies the productivity report for a single calendar date.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch_dataset(
        &self,
        date: NaiveDate,
        api_key: &str,
        timeout: Duration,
    ) -> Result<ProductivityDataset, FetchError>;
}
