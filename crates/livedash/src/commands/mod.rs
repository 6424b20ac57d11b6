use clap::ArgMatches;
use tracing::{error, warn};

use livedash_core::{LivedashConfig, events};

mod completions;
mod shortcuts;
mod snapshot;
mod watch;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        Some(("snapshot", sub_matches)) => snapshot::handle_snapshot_command(sub_matches),
        Some(("watch", sub_matches)) => watch::handle_watch_command(sub_matches),
        Some(("shortcuts", _)) => shortcuts::handle_shortcuts_command(),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    match &result {
        Ok(()) => events::log_app_shutdown(),
        Err(e) => events::log_app_error(e.as_ref()),
    }
    result
}

/// Load the config hierarchy, falling back to defaults with a warning.
fn load_config_with_warning() -> LivedashConfig {
    match LivedashConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.livedash/config.toml and ./.livedash/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            LivedashConfig::default()
        }
    }
}
