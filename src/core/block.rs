use crate::core::clock::Clock;
use crate::core::models::{DisplayPayload, PollConfig};
use crate::core::poller::poll;
use crate::providers::DatasetSource;
use chrono::{DateTime, Utc};

/// Last payload shown in the bar. Polls again only once it has expired.
#[derive(Debug, Default)]
pub struct CachedBlock {
    current: Option<DisplayPayload>,
}

impl CachedBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        match &self.current {
            Some(payload) => now >= payload.cached_until,
            None => true,
        }
    }

    /// Returns the cached payload, polling first if it has expired.
    pub async fn refresh(
        &mut self,
        config: &PollConfig,
        clock: &dyn Clock,
        source: &dyn DatasetSource,
    ) -> &DisplayPayload {
        if self.is_stale(clock.now()) {
            self.current = None;
        }

        let payload = match self.current.take() {
            Some(payload) => payload,
            None => {
                let payload = poll(config, clock, source).await;
                tracing::debug!(cached_until = %payload.cached_until, "Block refreshed");
                payload
            }
        };

        self.current.insert(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::poller::testing::{config, noon, FixedClock, StubSource};
    use crate::core::poller::NO_DATA_TEXT;
    use crate::providers::FetchError;
    use std::time::Duration;

    #[test]
    fn test_empty_block_is_stale() {
        let block = CachedBlock::new();
        assert!(block.is_stale(noon()));
    }

    #[tokio::test]
    async fn test_skips_poll_until_cached_until() {
        let clock = FixedClock::at(noon());
        let source = StubSource::ok(&[(1, 3600, 1, 2)]);
        let mut block = CachedBlock::new();

        let text = block.refresh(&config(), &clock, &source).await.full_text.clone();
        assert_eq!(text, "P: 1h 0m D: 0h 0m");
        assert_eq!(source.calls(), 1);

        clock.advance(Duration::from_secs(599));
        assert!(!block.is_stale(clock.now()));
        block.refresh(&config(), &clock, &source).await;
        assert_eq!(source.calls(), 1);

        clock.advance(Duration::from_secs(1));
        assert!(block.is_stale(clock.now()));
        block.refresh(&config(), &clock, &source).await;
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_failure_retries_sooner() {
        let clock = FixedClock::at(noon());
        let source = StubSource::err(FetchError::Timeout);
        let mut block = CachedBlock::new();

        let payload = block.refresh(&config(), &clock, &source).await;
        assert_eq!(payload.full_text, NO_DATA_TEXT);

        clock.advance(Duration::from_secs(60));
        block.refresh(&config(), &clock, &source).await;
        assert_eq!(source.calls(), 2);
    }
}
