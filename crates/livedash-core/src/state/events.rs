use serde::{Deserialize, Serialize};

use super::types::Theme;

/// State changes produced by a successful dispatch.
///
/// Each variant describes what happened, not what should happen. Failures go
/// through the `Result` error channel instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Live mode is now `is_live`. Emitted even when the state did not change.
    LiveModeChanged { is_live: bool },
    /// A one-shot refresh was scheduled; the snapshot publishes after the
    /// simulated latency.
    RefreshRequested,
    HelpVisibilityChanged { visible: bool },
    ThemeChanged { theme: Theme },
    TimelineMoved { offset_hours: i32 },
    AmplitudeChanged { level: u8 },
    ZoomChanged { level: u8 },
}
