pub mod status;
pub mod watch;

use anyhow::Result;
use rescue_bar::core::models::DisplayPayload;
use rescue_bar::core::settings::Settings;
use std::path::PathBuf;

/// Loads settings from `config` (or the default location) and applies
/// command-line overrides.
pub fn load_settings(config: Option<PathBuf>, api_key: Option<String>) -> Result<Settings> {
    let mut settings = match config {
        Some(path) => Settings::load_from(&path)?,
        None => Settings::load()?,
    };

    if let Some(key) = api_key {
        settings.api_key = key;
    }

    settings.validate()?;
    Ok(settings)
}

pub fn render(payload: &DisplayPayload, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(payload)?)
    } else {
        Ok(payload.full_text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io::Write;

    fn payload() -> DisplayPayload {
        DisplayPayload {
            full_text: "P: 1h 0m D: 0h 30m".to_string(),
            cached_until: Utc.timestamp_opt(1_709_294_400, 0).unwrap(),
        }
    }

    #[test]
    fn test_render_text() {
        assert_eq!(render(&payload(), false).unwrap(), "P: 1h 0m D: 0h 30m");
    }

    #[test]
    fn test_render_json() {
        assert_eq!(
            render(&payload(), true).unwrap(),
            r#"{"full_text":"P: 1h 0m D: 0h 30m","cached_until":1709294400}"#
        );
    }

    #[test]
    fn test_api_key_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key = \"from-file\"").unwrap();

        let settings =
            load_settings(Some(file.path().to_path_buf()), Some("from-flag".to_string())).unwrap();
        assert_eq!(settings.api_key, "from-flag");
    }

    #[test]
    fn test_missing_api_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_settings(Some(dir.path().join("config.toml")), None).is_err());
    }
}
