use serde::{Deserialize, Serialize};

/// Every operation a shortcut or CLI action can dispatch through the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Flip between live and paused.
    ToggleLive,
    /// Enter or leave live mode explicitly.
    SetLive { live: bool },
    /// One-shot refresh; live state is untouched.
    Refresh,
    ToggleHelp,
    /// Hide the help panel. No-op if it is already hidden.
    CloseHelp,
    SelectTheme(Theme),
    /// Shift the trend window one hour back.
    TimelineRewind,
    /// Shift the trend window one hour forward, up to the present.
    TimelineForward,
    AmplitudeUp,
    AmplitudeDown,
    ZoomIn,
    ZoomOut,
}

/// Accent palette for the rendered dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Red,
    Blue,
    Yellow,
    Purple,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Red => "red",
            Theme::Blue => "blue",
            Theme::Yellow => "yellow",
            Theme::Purple => "purple",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub const MAX_TIMELINE_REWIND_HOURS: i32 = 23;
pub const AMPLITUDE_LEVELS: std::ops::RangeInclusive<u8> = 1..=5;
pub const ZOOM_LEVELS: std::ops::RangeInclusive<u8> = 1..=4;

/// View state owned by the rendering layer, not by the refresh controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelState {
    pub help_visible: bool,
    pub theme: Theme,
    /// Hours the trend window is shifted into the past (0 = present).
    pub timeline_offset_hours: i32,
    pub amplitude: u8,
    pub zoom: u8,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            help_visible: false,
            theme: Theme::Default,
            timeline_offset_hours: 0,
            amplitude: 3,
            zoom: 1,
        }
    }
}

impl PanelState {
    pub fn rewind(&mut self) -> i32 {
        self.timeline_offset_hours =
            (self.timeline_offset_hours + 1).min(MAX_TIMELINE_REWIND_HOURS);
        self.timeline_offset_hours
    }

    pub fn forward(&mut self) -> i32 {
        self.timeline_offset_hours = (self.timeline_offset_hours - 1).max(0);
        self.timeline_offset_hours
    }

    pub fn adjust_amplitude(&mut self, delta: i8) -> u8 {
        self.amplitude = step_within(self.amplitude, delta, &AMPLITUDE_LEVELS);
        self.amplitude
    }

    pub fn adjust_zoom(&mut self, delta: i8) -> u8 {
        self.zoom = step_within(self.zoom, delta, &ZOOM_LEVELS);
        self.zoom
    }
}

fn step_within(value: u8, delta: i8, range: &std::ops::RangeInclusive<u8>) -> u8 {
    value
        .saturating_add_signed(delta)
        .clamp(*range.start(), *range.end())
}
