//! Live refresh loop.
//!
//! - [`RefreshController`] - Owns the published [`DashboardState`] and live flag
//! - [`LiveTicker`] - Start/stop repeating timer on tokio's clock
//! - [`RefreshSettings`] - Validated interval, latency and generator choice

pub mod controller;
pub mod ticker;
pub mod types;

pub use controller::RefreshController;
pub use ticker::LiveTicker;
pub use types::{DashboardState, RefreshSettings, RefreshTrigger};
