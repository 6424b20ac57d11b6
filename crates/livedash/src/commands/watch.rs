use chrono::Utc;
use clap::ArgMatches;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use livedash_core::{
    Command, DashboardState, DashboardStore, Event, MetricsSnapshot, RefreshSettings, Store,
};

use super::load_config_with_warning;
use crate::render::{self, WatchUpdate};

struct WatchOptions {
    settings: RefreshSettings,
    start_live: bool,
    max_updates: Option<u64>,
    json: bool,
    currency: String,
}

pub(crate) fn handle_watch_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();

    let mut refresh = config.refresh.clone();
    if let Some(interval_ms) = matches.get_one::<u64>("interval-ms") {
        refresh.interval_ms = Some(*interval_ms);
    }
    if let Some(latency_ms) = matches.get_one::<u64>("latency-ms") {
        refresh.latency_ms = Some(*latency_ms);
    }
    if matches.get_flag("demo") {
        refresh.use_demo_data = Some(true);
    }

    let options = WatchOptions {
        settings: RefreshSettings::from_config(&refresh),
        start_live: matches.get_flag("live"),
        max_updates: matches.get_one::<u64>("updates").copied(),
        json: matches.get_flag("json"),
        currency: config.display.currency().to_string(),
    };

    info!(
        event = "cli.watch_started",
        interval_ms = refresh.interval_ms(),
        latency_ms = refresh.latency_ms(),
        generator = options.settings.generator.as_str(),
        live = options.start_live
    );

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run_watch(options));
    // A pending stdin read would otherwise block shutdown until the next line.
    runtime.shutdown_background();
    let rendered = result?;

    info!(event = "cli.watch_completed", rendered = rendered);
    Ok(())
}

/// Drive the store until `q`, end of input, or the update limit.
///
/// With `--updates`, end of input does not stop the loop; it keeps rendering
/// until the limit is reached.
async fn run_watch(options: WatchOptions) -> Result<u64, Box<dyn std::error::Error>> {
    let mut store = DashboardStore::new(options.settings.clone())?;
    if options.start_live {
        store.dispatch(Command::SetLive { live: true })?;
    }

    let mut updates = store.controller().subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let mut last_refresh = 0;
    let mut rendered = 0;

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                if state.refresh_count == last_refresh {
                    continue;
                }
                last_refresh = state.refresh_count;
                let Some(snapshot) = state.snapshot.as_deref() else {
                    continue;
                };

                render_update(&state, snapshot, &store, &options)?;
                rendered += 1;
                if options.max_updates.is_some_and(|max| rendered >= max) {
                    break;
                }
            }
            line = lines.next_line(), if stdin_open => {
                match line? {
                    Some(line) => match line.trim() {
                        "" => {}
                        "q" | "quit" => break,
                        notation => handle_input(&mut store, notation, &options)?,
                    },
                    None => {
                        stdin_open = false;
                        if options.max_updates.is_none() {
                            break;
                        }
                    }
                }
            }
        }
    }

    store.dispose();
    Ok(rendered)
}

fn render_update(
    state: &DashboardState,
    snapshot: &MetricsSnapshot,
    store: &DashboardStore,
    options: &WatchOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    if options.json {
        let update = WatchUpdate {
            refresh_count: state.refresh_count,
            is_live: state.is_live,
            last_updated: state.last_updated,
            snapshot,
        };
        println!("{}", serde_json::to_string(&update)?);
    } else {
        let now = Utc::now();
        println!("{}", render::status_line(state, store.panel(), now));
        render::print_snapshot(snapshot, &options.currency, store.panel(), now);
        println!();
    }
    Ok(())
}

fn handle_input(
    store: &mut DashboardStore,
    notation: &str,
    options: &WatchOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let events = match store.handle_notation(notation) {
        Ok(events) => events,
        Err(e) => {
            eprintln!("Error: {}", e);
            warn!(event = "cli.watch_key_rejected", key = notation, error = %e);
            return Ok(());
        }
    };

    if events.is_empty() {
        eprintln!("No shortcut bound to '{}'. Enter ? for help.", notation);
        return Ok(());
    }

    for event in &events {
        if options.json {
            println!("{}", serde_json::to_string(event)?);
            continue;
        }
        println!("{}", render::describe_event(event));
        if matches!(event, Event::HelpVisibilityChanged { visible: true }) {
            render::print_shortcut_help(store.shortcuts());
        }
    }
    Ok(())
}
