//! Command dispatch.
//!
//! Shortcuts and CLI actions produce [`Command`]s; a [`Store`] executes them
//! and reports what changed as [`Event`]s. [`DashboardStore`] is the
//! implementation backed by a [`RefreshController`](crate::refresh::RefreshController).

pub mod dispatch;
pub mod errors;
pub mod events;
pub mod store;
pub mod types;

pub use dispatch::DashboardStore;
pub use errors::DispatchError;
pub use events::Event;
pub use store::Store;
pub use types::{Command, PanelState, Theme};
