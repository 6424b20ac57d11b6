//! Configuration type definitions for livedash.
//!
//! These types are serialized/deserialized from TOML config files. Every field
//! is optional so that a project config only overrides what it names.
//!
//! # Example Configuration
//!
//! ```toml
//! [refresh]
//! interval_ms = 3000
//! latency_ms = 200
//! use_demo_data = true
//!
//! [display]
//! currency = "HKD"
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.livedash/config.toml`
/// 2. Project config: `./.livedash/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LivedashConfig {
    /// Refresh loop configuration
    #[serde(default)]
    pub refresh: RefreshConfig,

    /// Rendering preferences
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Refresh loop configuration.
///
/// Controls the live-mode cadence, the simulated fetch latency and which
/// generator produces snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RefreshConfig {
    /// Interval in milliseconds between live-mode ticks.
    /// Default: 3000ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,

    /// Simulated latency in milliseconds before a refresh publishes.
    /// Default: 200ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,

    /// Use the fixed demo fixture instead of randomized metrics.
    /// Default: false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_demo_data: Option<bool>,
}

/// Rendering preferences for the terminal dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DisplayConfig {
    /// Currency code used when rendering amounts.
    /// Default: "HKD".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}
