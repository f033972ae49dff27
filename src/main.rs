use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{
    layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

mod cli;

#[derive(Parser)]
#[command(name = "rescue-bar")]
#[command(author, version, about = "Today's RescueTime productivity summary for your status bar")]
struct Cli {
    /// Path to the config file (default: ~/.config/rescue-bar/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// RescueTime API key, overrides the config file
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll once and print the summary
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Keep polling, printing a line whenever the cached summary expires
    Watch {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

type LogHandle = reload::Handle<EnvFilter, Registry>;

fn default_filter(debug: bool) -> &'static str {
    if debug {
        "rescue_bar=debug,info"
    } else {
        "info"
    }
}

fn init_logging(debug: bool) -> LogHandle {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));
    let (filter, handle) = reload::Layer::new(filter);

    // stdout belongs to the status bar
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    handle
}

/// Raises the log level once `debug = true` is read from the config file.
/// An explicit `RUST_LOG` always wins.
fn apply_config_debug(handle: &LogHandle, debug: bool) {
    if !debug || std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return;
    }

    if let Err(e) = handle.reload(EnvFilter::new(default_filter(true))) {
        tracing::warn!(error = %e, "Failed to enable debug logging");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Status { json } => {
            let log_handle = init_logging(cli.debug);
            let settings = cli::load_settings(cli.config, cli.api_key)?;
            apply_config_debug(&log_handle, settings.debug);
            cli::status::run(&settings, json).await
        }
        Commands::Watch { json } => {
            let log_handle = init_logging(cli.debug);
            let settings = cli::load_settings(cli.config, cli.api_key)?;
            apply_config_debug(&log_handle, settings.debug);
            cli::watch::run(&settings, json).await
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current_filter(handle: &LogHandle) -> String {
        handle.with_current(|f| f.to_string()).unwrap()
    }

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "info");
        assert_eq!(default_filter(true), "rescue_bar=debug,info");
    }

    #[test]
    fn test_config_debug_raises_level() {
        let (filter, handle) = reload::Layer::<EnvFilter, Registry>::new(EnvFilter::new("info"));
        let _subscriber = tracing_subscriber::registry().with(filter);

        apply_config_debug(&handle, true);

        if std::env::var_os(EnvFilter::DEFAULT_ENV).is_none() {
            assert_eq!(
                current_filter(&handle),
                EnvFilter::new(default_filter(true)).to_string()
            );
        }
    }

    #[test]
    fn test_config_debug_off_keeps_level() {
        let (filter, handle) = reload::Layer::<EnvFilter, Registry>::new(EnvFilter::new("info"));
        let _subscriber = tracing_subscriber::registry().with(filter);

        apply_config_debug(&handle, false);

        assert_eq!(current_filter(&handle), EnvFilter::new("info").to_string());
    }

    #[test]
    fn test_cli_parses_global_flags() {
        let cli = Cli::try_parse_from([
            "rescue-bar", "status", "--json", "--debug", "--api-key", "k",
        ])
        .unwrap();
        assert!(cli.debug);
        assert_eq!(cli.api_key.as_deref(), Some("k"));
        assert!(matches!(cli.command, Commands::Status { json: true }));
    }
}
