use anyhow::Result;
use rescue_bar::core::clock::SystemClock;
use rescue_bar::core::poller::poll;
use rescue_bar::core::settings::Settings;
use rescue_bar::providers::RescueTimeSource;

pub async fn run(settings: &Settings, json: bool) -> Result<()> {
    let source = RescueTimeSource::new();
    let payload = poll(&settings.poll_config(), &SystemClock, &source).await;

    println!("{}", super::render(&payload, json)?);
    Ok(())
}
