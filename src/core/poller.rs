use crate::core::clock::Clock;
use crate::core::models::{DisplayPayload, PollConfig, ProductivityDataset, ProductivityTotals};
use crate::providers::DatasetSource;

pub const NO_DATA_TEXT: &str = "No data";

/// Sums seconds into productive (score > 0) and distracting (score < 0).
/// Neutral rows count towards neither.
pub fn aggregate(dataset: &ProductivityDataset) -> ProductivityTotals {
    dataset
        .rows
        .iter()
        .fold(ProductivityTotals::default(), |mut totals, row| {
            if row.is_productive() {
                totals.productive = totals.productive.saturating_add(row.seconds);
            } else if row.is_distracting() {
                totals.distracting = totals.distracting.saturating_add(row.seconds);
            }
            totals
        })
}

/// Fetches today's report once and builds the status bar payload.
///
/// Never fails: any fetch error becomes [`NO_DATA_TEXT`] cached for the
/// retry interval, success is cached for the refresh interval.
pub async fn poll(
    config: &PollConfig,
    clock: &dyn Clock,
    source: &dyn DatasetSource,
) -> DisplayPayload {
    let now = clock.now();
    let date = clock.today();

    match source
        .fetch_dataset(date, &config.api_key, config.request_timeout)
        .await
    {
        Ok(dataset) => {
            let totals = aggregate(&dataset);
            tracing::debug!(
                source = source.name(),
                %date,
                rows = dataset.rows.len(),
                tracked = dataset.total_seconds(),
                productive = totals.productive,
                distracting = totals.distracting,
                "Fetched productivity data"
            );

            DisplayPayload {
                full_text: totals.summary(),
                cached_until: clock.add_seconds(now, config.refresh_interval),
            }
        }
        Err(e) => {
            tracing::warn!(
                source = source.name(),
                %date,
                error = %e,
                retry_in = ?config.retry_interval,
                "Failed to fetch productivity data"
            );

            DisplayPayload {
                full_text: NO_DATA_TEXT.to_string(),
                cached_until: clock.add_seconds(now, config.retry_interval),
            }
        }
    }
}
