use anyhow::Result;
use rescue_bar::core::block::CachedBlock;
use rescue_bar::core::clock::{Clock, SystemClock};
use rescue_bar::core::settings::Settings;
use rescue_bar::providers::RescueTimeSource;
use std::io::Write;
use std::time::Duration;

const MIN_SLEEP: Duration = Duration::from_secs(1);

pub async fn run(settings: &Settings, json: bool) -> Result<()> {
    let config = settings.poll_config();
    let clock = SystemClock;
    let source = RescueTimeSource::new();
    let mut block = CachedBlock::new();

    tracing::info!(
        refresh_interval = ?config.refresh_interval,
        retry_interval = ?config.retry_interval,
        "Watching RescueTime productivity"
    );

    loop {
        let payload = block.refresh(&config, &clock, &source).await;
        let line = super::render(payload, json)?;
        let wait = (payload.cached_until - clock.now())
            .to_std()
            .unwrap_or(MIN_SLEEP)
            .max(MIN_SLEEP);

        {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", line)?;
            stdout.flush()?;
        }

        tokio::select! {
            _ = tokio::time::sleep(wait) => {}
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted, stopping");
                return Ok(());
            }
        }
    }
}
