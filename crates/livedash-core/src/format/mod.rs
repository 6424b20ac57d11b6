//! Display helpers for the rendering layer.

use chrono::{DateTime, Utc};

/// Format an amount for display, dropping its sign.
///
/// `HKD` is prefixed `HK$`; every other currency gets `$`. Thousands are
/// comma-separated and at most two decimals are shown, trailing zeros trimmed.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let prefix = if currency.eq_ignore_ascii_case("HKD") {
        "HK$"
    } else {
        "$"
    };

    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let fraction = cents % 100;

    if fraction == 0 {
        format!("{prefix}{whole}")
    } else if fraction % 10 == 0 {
        format!("{prefix}{whole}.{}", fraction / 10)
    } else {
        format!("{prefix}{whole}.{fraction:02}")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `+12.3%` for growth, `-4.0%` for decline.
pub fn format_percentage(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{sign}{value:.1}%")
}

/// Coarse "time ago" label; falls back to the calendar date after a week.
///
/// Timestamps in the future read as "just now".
pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        plural(minutes, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days < 7 {
        plural(days, "day")
    } else {
        timestamp.format("%Y-%m-%d").to_string()
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
