use chrono::Utc;
use clap::ArgMatches;
use tracing::info;

use livedash_core::metrics::build_generator;
use livedash_core::{GeneratorKind, Generate, PanelState};

use super::load_config_with_warning;
use crate::render;

pub(crate) fn handle_snapshot_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let use_demo = matches.get_flag("demo") || config.refresh.use_demo_data();
    let kind = GeneratorKind::from_demo_flag(use_demo);

    info!(event = "cli.snapshot_started", generator = kind.as_str());

    let snapshot = build_generator(kind).generate();

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        render::print_snapshot(
            &snapshot,
            config.display.currency(),
            &PanelState::default(),
            Utc::now(),
        );
    }

    info!(
        event = "cli.snapshot_completed",
        generator = kind.as_str(),
        transactions = snapshot.transactions.len()
    );

    Ok(())
}
