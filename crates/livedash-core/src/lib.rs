//! livedash-core: Core library for the simulated real-time metrics dashboard
//!
//! This library produces business-metrics snapshots and publishes them on a
//! live/paused refresh loop. It is used by the `livedash` CLI, which acts as
//! the rendering layer.
//!
//! # Main Entry Points
//!
//! - [`metrics`] - Snapshot types and the demo/randomized generators
//! - [`refresh`] - Live refresh controller and its ticker
//! - [`shortcuts`] - Keyboard shortcut matching
//! - [`state`] - Command dispatch from shortcuts and UI actions
//! - [`config`] - Configuration management
//! - [`format`] - Currency, percentage and relative-time formatting

pub mod config;
pub mod errors;
pub mod events;
pub mod format;
pub mod logging;
pub mod metrics;
pub mod refresh;
pub mod shortcuts;
pub mod state;

// Re-export commonly used types at crate root for convenience
pub use config::LivedashConfig;
pub use metrics::types::{
    BalanceMetrics, BillingMetrics, CustomerMetrics, MetricsSnapshot, RevenueMetrics,
    Transaction, TransactionKind, TransactionStatus, TrendPoint,
};
pub use metrics::{DemoGenerator, Generate, GeneratorKind, RandomGenerator};
pub use refresh::{DashboardState, LiveTicker, RefreshController, RefreshSettings};
pub use shortcuts::{
    EventTarget, KeyEvent, KeyOutcome, Modifier, Modifiers, Shortcut, ShortcutRegistry,
};
pub use state::{Command, DashboardStore, DispatchError, Event, PanelState, Store, Theme};

// Re-export logging initialization
pub use logging::init_logging;
