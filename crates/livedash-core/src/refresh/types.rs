use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::config::RefreshConfig;
use crate::errors::ConfigError;
use crate::metrics::{GeneratorKind, MetricsSnapshot};

/// State published to subscribers after every transition.
///
/// `snapshot` is `None` only until the first refresh completes. While
/// `is_loading` is set, the snapshot is stale but still renderable.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub snapshot: Option<Arc<MetricsSnapshot>>,
    pub is_live: bool,
    pub is_loading: bool,
    pub last_updated: Option<DateTime<Utc>>,
    /// Refreshes that have published a snapshot since construction.
    pub refresh_count: u64,
    /// Refreshes scheduled but not yet published.
    pub pending_refreshes: u32,
}

/// What caused a refresh, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTrigger {
    Initial,
    Manual,
    Tick,
}

impl RefreshTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefreshTrigger::Initial => "initial",
            RefreshTrigger::Manual => "manual",
            RefreshTrigger::Tick => "tick",
        }
    }
}

/// Validated construction parameters for a refresh controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshSettings {
    /// Time between live-mode ticks.
    pub interval: Duration,
    /// Simulated fetch latency before each refresh publishes.
    pub latency: Duration,
    pub generator: GeneratorKind,
}

impl RefreshSettings {
    pub fn new(interval: Duration, latency: Duration, generator: GeneratorKind) -> Self {
        Self {
            interval,
            latency,
            generator,
        }
    }

    pub fn from_config(config: &RefreshConfig) -> Self {
        Self {
            interval: Duration::from_millis(config.interval_ms()),
            latency: Duration::from_millis(config.latency_ms()),
            generator: GeneratorKind::from_demo_flag(config.use_demo_data()),
        }
    }

    /// Reject a zero interval. Any latency is accepted, including one longer
    /// than the interval.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval.is_zero() {
            return Err(ConfigError::InvalidInterval);
        }
        Ok(())
    }
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self::from_config(&RefreshConfig::default())
    }
}
