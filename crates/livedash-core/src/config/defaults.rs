//! Default values and accessors for configuration types.
//!
//! Config structs keep `Option` fields so merging can tell "unset" from
//! "explicitly set". The accessors here resolve unset fields to defaults.

use crate::config::types::{DisplayConfig, RefreshConfig};

/// Default live-mode tick interval (3000ms).
pub const DEFAULT_INTERVAL_MS: u64 = 3000;

/// Default simulated fetch latency (200ms).
pub const DEFAULT_LATENCY_MS: u64 = 200;

/// Default display currency.
pub const DEFAULT_CURRENCY: &str = "HKD";

impl RefreshConfig {
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms.unwrap_or(DEFAULT_INTERVAL_MS)
    }

    pub fn latency_ms(&self) -> u64 {
        self.latency_ms.unwrap_or(DEFAULT_LATENCY_MS)
    }

    pub fn use_demo_data(&self) -> bool {
        self.use_demo_data.unwrap_or(false)
    }
}

impl DisplayConfig {
    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }
}
