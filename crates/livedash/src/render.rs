use chrono::{DateTime, Utc};
use serde::Serialize;

use livedash_core::format::{format_currency, format_percentage, format_relative_time};
use livedash_core::{
    Command, DashboardState, Event, MetricsSnapshot, PanelState, ShortcutRegistry, TrendPoint,
};

use crate::table::TransactionTable;

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One published refresh as emitted by `watch --json`.
#[derive(Serialize)]
pub struct WatchUpdate<'a> {
    pub refresh_count: u64,
    pub is_live: bool,
    pub last_updated: Option<DateTime<Utc>>,
    pub snapshot: &'a MetricsSnapshot,
}

pub fn print_snapshot(
    snapshot: &MetricsSnapshot,
    currency: &str,
    panel: &PanelState,
    now: DateTime<Utc>,
) {
    let revenue = &snapshot.revenue;
    println!(
        "Revenue:      {} ({} vs {})",
        format_currency(revenue.current, currency),
        format_percentage(revenue.growth_percent),
        format_currency(revenue.previous, currency)
    );
    let window = trend_window(&revenue.trend, panel);
    println!("Trend:        {}", sparkline(window, panel));
    if let Some(summary) = trend_summary(window, currency) {
        println!("              {summary}");
    }
    println!(
        "Customers:    {} new / {} total ({})",
        snapshot.customers.new_count,
        snapshot.customers.total_count,
        format_percentage(snapshot.customers.growth_percent)
    );
    println!(
        "Balance:      {} available, {} pending, {} withdrawable",
        format_currency(snapshot.balance.available, currency),
        format_currency(snapshot.balance.pending, currency),
        format_currency(snapshot.balance.withdrawable, currency)
    );
    println!(
        "Billing:      {} paid, {} pending, {} overdue",
        format_currency(snapshot.billing.paid, currency),
        format_currency(snapshot.billing.pending, currency),
        format_currency(snapshot.billing.overdue, currency)
    );

    if snapshot.transactions.is_empty() {
        println!("No transactions.");
    } else {
        TransactionTable::new(&snapshot.transactions).print_table(&snapshot.transactions, now);
    }
}

/// Header printed above each refresh in `watch`.
pub fn status_line(state: &DashboardState, panel: &PanelState, now: DateTime<Utc>) -> String {
    let mode = if state.is_live { "LIVE" } else { "PAUSED" };
    let updated = state
        .last_updated
        .map(|ts| format_relative_time(ts, now))
        .unwrap_or_else(|| "never".to_string());
    format!(
        "[{}] refresh #{} updated {} (theme: {})",
        mode, state.refresh_count, updated, panel.theme
    )
}

pub fn describe_event(event: &Event) -> String {
    match event {
        Event::LiveModeChanged { is_live: true } => "Live updates on".to_string(),
        Event::LiveModeChanged { is_live: false } => "Live updates paused".to_string(),
        Event::RefreshRequested => "Refreshing...".to_string(),
        Event::HelpVisibilityChanged { visible: true } => "Help shown".to_string(),
        Event::HelpVisibilityChanged { visible: false } => "Help hidden".to_string(),
        Event::ThemeChanged { theme } => format!("Theme set to {theme}"),
        Event::TimelineMoved { offset_hours: 0 } => "Timeline at present".to_string(),
        Event::TimelineMoved { offset_hours } => format!("Timeline rewound {offset_hours}h"),
        Event::AmplitudeChanged { level } => format!("Amplitude {level}"),
        Event::ZoomChanged { level } => format!("Zoom {level}x"),
    }
}

pub fn print_shortcut_help(registry: &ShortcutRegistry<Command>) {
    for (category, shortcuts) in registry.grouped() {
        println!("{category}");
        for shortcut in shortcuts {
            println!("  {:<10} {}", shortcut.binding_display(), shortcut.description);
        }
    }
}

/// Visible slice of the hourly trend: `zoom` narrows it, the timeline offset
/// moves it into the past.
pub fn trend_window<'a>(trend: &'a [TrendPoint], panel: &PanelState) -> &'a [TrendPoint] {
    let visible = trend.len() / usize::from(panel.zoom.max(1));
    let offset = usize::try_from(panel.timeline_offset_hours).unwrap_or(0);
    let end = trend.len().saturating_sub(offset).max(visible.min(trend.len()));
    let start = end.saturating_sub(visible);
    &trend[start..end]
}

/// Bar sparkline of `points`, deviations from the mean scaled by amplitude.
pub fn sparkline(points: &[TrendPoint], panel: &PanelState) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mean = points.iter().map(|p| p.value).sum::<f64>() / points.len() as f64;
    let gain = f64::from(panel.amplitude) / 3.0;
    let scaled: Vec<f64> = points.iter().map(|p| mean + (p.value - mean) * gain).collect();
    let min = scaled.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scaled.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let top = (SPARK_LEVELS.len() - 1) as f64;

    scaled
        .iter()
        .map(|value| {
            let level = if span > 0.0 {
                ((value - min) / span * top).round() as usize
            } else {
                SPARK_LEVELS.len() / 2
            };
            SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
        })
        .collect()
}

/// High, low and average of the visible trend, or `None` when it is empty.
pub fn trend_summary(points: &[TrendPoint], currency: &str) -> Option<String> {
    let high = points.iter().max_by(|a, b| a.value.total_cmp(&b.value))?;
    let low = points.iter().min_by(|a, b| a.value.total_cmp(&b.value))?;
    let average = points.iter().map(|p| p.value).sum::<f64>() / points.len() as f64;
    Some(format!(
        "High {} at {}, low {} at {}, average {}",
        format_currency(high.value, currency),
        high.label,
        format_currency(low.value, currency),
        low.label,
        format_currency(average, currency)
    ))
}
