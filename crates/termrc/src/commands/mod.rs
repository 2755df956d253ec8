use clap::ArgMatches;
use termrc_config::TermrcConfig;
use tracing::{error, info, warn};

mod decode;
mod launch;
mod schema;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        event = "cli.app_startup",
        version = env!("CARGO_PKG_VERSION")
    );

    match matches.subcommand() {
        Some(("launch", sub_matches)) => launch::handle_launch_command(sub_matches),
        Some(("decode", sub_matches)) => decode::handle_decode_command(sub_matches),
        Some(("schema", sub_matches)) => schema::handle_schema_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// Load configuration with warning on errors.
///
/// Falls back to defaults if loading fails, but notifies the
/// user on stderr and via the `cli.config.load_failed` event.
pub(crate) fn load_config_with_warning() -> TermrcConfig {
    match TermrcConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.termrc/config.toml and ./.termrc/config.toml for errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            TermrcConfig::default()
        }
    }
}
