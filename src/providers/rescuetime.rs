use crate::core::models::ProductivityDataset;
use crate::providers::{DatasetSource, FetchError};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://www.rescuetime.com";
const DATA_PATH: &str = "/anapi/data";

pub struct RescueTimeSource {
    client: reqwest::Client,
    base_url: String,
}

impl RescueTimeSource {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, DATA_PATH)
    }
}

impl Default for RescueTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            // without_url keeps the API key out of the message
            FetchError::Transport(err.without_url().to_string())
        }
    }
}

#[async_trait]
impl DatasetSource for RescueTimeSource {
    fn name(&self) -> &'static str {
        "RescueTime"
    }

    async fn fetch_dataset(
        &self,
        date: NaiveDate,
        api_key: &str,
        timeout: Duration,
    ) -> Result<ProductivityDataset, FetchError> {
        let date = date.format("%Y-%m-%d").to_string();
        tracing::debug!(%date, ?timeout, "Requesting RescueTime productivity data");

        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("rk", "productivity"),
                ("rb", date.as_str()),
                ("format", "json"),
                ("key", api_key),
            ])
            .timeout(timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}
