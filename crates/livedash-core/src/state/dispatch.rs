use tracing::{debug, info};

use crate::refresh::{DashboardState, RefreshController, RefreshSettings};
use crate::shortcuts::{KeyEvent, ShortcutRegistry, default_shortcuts};
use crate::state::errors::DispatchError;
use crate::state::events::Event;
use crate::state::store::Store;
use crate::state::types::{Command, PanelState};

/// Store that owns the refresh controller, the shortcut registry and the
/// view panel state.
///
/// Must be created inside a tokio runtime; the controller schedules its first
/// refresh on construction.
pub struct DashboardStore {
    controller: RefreshController,
    shortcuts: ShortcutRegistry<Command>,
    panel: PanelState,
}

impl DashboardStore {
    pub fn new(settings: RefreshSettings) -> Result<Self, DispatchError> {
        Ok(Self::with_controller(RefreshController::new(settings)?))
    }

    /// Wrap an existing controller with the default shortcut set.
    pub fn with_controller(controller: RefreshController) -> Self {
        Self {
            controller,
            shortcuts: ShortcutRegistry::new(default_shortcuts()),
            panel: PanelState::default(),
        }
    }

    pub fn controller(&self) -> &RefreshController {
        &self.controller
    }

    pub fn shortcuts(&self) -> &ShortcutRegistry<Command> {
        &self.shortcuts
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    pub fn state(&self) -> DashboardState {
        self.controller.state()
    }

    /// Route a key event through the shortcut registry. Unbound keys and keys
    /// typed into text-entry targets produce no events.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Result<Vec<Event>, DispatchError> {
        match self.shortcuts.handle(event).action().copied() {
            Some(cmd) => self.dispatch(cmd),
            None => {
                debug!(event = "core.state.key_ignored", key = %event.key);
                Ok(Vec::new())
            }
        }
    }

    /// Parse key notation (`p`, `ctrl+r`, `esc`) and handle it.
    pub fn handle_notation(&mut self, notation: &str) -> Result<Vec<Event>, DispatchError> {
        let event = KeyEvent::parse(notation)?;
        self.handle_key(&event)
    }

    /// Stop the ticker and cancel pending refreshes.
    pub fn dispose(self) {
        self.controller.dispose();
    }
}

impl Store for DashboardStore {
    type Error = DispatchError;

    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        debug!(event = "core.state.dispatch_started", command = ?cmd);

        let event = match cmd {
            Command::ToggleLive => Event::LiveModeChanged {
                is_live: self.controller.toggle_live(),
            },
            Command::SetLive { live } => {
                self.controller.set_live(live);
                Event::LiveModeChanged { is_live: live }
            }
            Command::Refresh => {
                self.controller.refresh();
                Event::RefreshRequested
            }
            Command::ToggleHelp => {
                self.panel.help_visible = !self.panel.help_visible;
                Event::HelpVisibilityChanged {
                    visible: self.panel.help_visible,
                }
            }
            Command::CloseHelp => {
                self.panel.help_visible = false;
                Event::HelpVisibilityChanged { visible: false }
            }
            Command::SelectTheme(theme) => {
                self.panel.theme = theme;
                Event::ThemeChanged { theme }
            }
            Command::TimelineRewind => Event::TimelineMoved {
                offset_hours: self.panel.rewind(),
            },
            Command::TimelineForward => Event::TimelineMoved {
                offset_hours: self.panel.forward(),
            },
            Command::AmplitudeUp => Event::AmplitudeChanged {
                level: self.panel.adjust_amplitude(1),
            },
            Command::AmplitudeDown => Event::AmplitudeChanged {
                level: self.panel.adjust_amplitude(-1),
            },
            Command::ZoomIn => Event::ZoomChanged {
                level: self.panel.adjust_zoom(1),
            },
            Command::ZoomOut => Event::ZoomChanged {
                level: self.panel.adjust_zoom(-1),
            },
        };

        info!(event = "core.state.dispatch_completed", result = ?event);
        Ok(vec![event])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ConfigError, LivedashError};
    use crate::metrics::GeneratorKind;
    use crate::shortcuts::{EventTarget, Modifier, Modifiers};
    use crate::state::types::Theme;
    use std::time::Duration;
    use tokio::time::sleep;

    fn store() -> DashboardStore {
        DashboardStore::new(RefreshSettings::new(
            Duration::from_millis(3000),
            Duration::from_millis(200),
            GeneratorKind::Demo,
        ))
        .unwrap()
    }

    #[test]
    fn test_dashboard_store_implements_store_trait() {
        fn assert_store<T: Store>() {}
        assert_store::<DashboardStore>();
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_live_emits_new_state() {
        let mut store = store();
        let events = store.dispatch(Command::ToggleLive).unwrap();
        assert_eq!(events, vec![Event::LiveModeChanged { is_live: true }]);
        assert!(store.state().is_live);

        let events = store.dispatch(Command::ToggleLive).unwrap();
        assert_eq!(events, vec![Event::LiveModeChanged { is_live: false }]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_live_is_idempotent() {
        let mut store = store();
        store.dispatch(Command::SetLive { live: true }).unwrap();
        let events = store.dispatch(Command::SetLive { live: true }).unwrap();
        assert_eq!(events, vec![Event::LiveModeChanged { is_live: true }]);
        assert!(store.controller().is_live());
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_schedules_without_going_live() {
        let mut store = store();
        sleep(Duration::from_millis(250)).await;

        let events = store.dispatch(Command::Refresh).unwrap();
        assert_eq!(events, vec![Event::RefreshRequested]);
        assert!(store.state().is_loading);

        sleep(Duration::from_millis(250)).await;
        let state = store.state();
        assert_eq!(state.refresh_count, 2);
        assert!(!state.is_live);
    }

    #[tokio::test(start_paused = true)]
    async fn test_help_toggle_and_close() {
        let mut store = store();
        store.dispatch(Command::ToggleHelp).unwrap();
        assert!(store.panel().help_visible);

        let events = store.dispatch(Command::CloseHelp).unwrap();
        assert_eq!(events, vec![Event::HelpVisibilityChanged { visible: false }]);
        assert!(!store.panel().help_visible);

        // Closing an already-closed panel is harmless.
        store.dispatch(Command::CloseHelp).unwrap();
        assert!(!store.panel().help_visible);
    }

    #[tokio::test(start_paused = true)]
    async fn test_theme_keys() {
        let mut store = store();
        let events = store.handle_notation("3").unwrap();
        assert_eq!(
            events,
            vec![Event::ThemeChanged {
                theme: Theme::Yellow
            }]
        );
        assert_eq!(store.panel().theme, Theme::Yellow);
    }

    #[tokio::test(start_paused = true)]
    async fn test_p_key_toggles_live_only() {
        let mut store = store();
        sleep(Duration::from_millis(250)).await;

        let events = store.handle_key(&KeyEvent::plain("p")).unwrap();
        assert_eq!(events, vec![Event::LiveModeChanged { is_live: true }]);
        assert_eq!(*store.panel(), PanelState::default());
        assert_eq!(store.state().pending_refreshes, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_modified_or_unbound_keys_do_nothing() {
        let mut store = store();
        let ctrl_p = KeyEvent::new("p", Modifiers::only(Modifier::Ctrl));
        assert!(store.handle_key(&ctrl_p).unwrap().is_empty());
        assert!(store.handle_notation("z").unwrap().is_empty());
        assert!(!store.state().is_live);
    }

    #[tokio::test(start_paused = true)]
    async fn test_text_input_keys_ignored() {
        let mut store = store();
        let event = KeyEvent::plain("?").with_target(EventTarget::TextArea);
        assert!(store.handle_key(&event).unwrap().is_empty());
        assert!(!store.panel().help_visible);
    }

    #[tokio::test(start_paused = true)]
    async fn test_view_adjustments() {
        let mut store = store();
        assert_eq!(
            store.handle_notation("left").unwrap(),
            vec![Event::TimelineMoved { offset_hours: 1 }]
        );
        assert_eq!(
            store.handle_notation("right").unwrap(),
            vec![Event::TimelineMoved { offset_hours: 0 }]
        );
        assert_eq!(
            store.handle_notation("up").unwrap(),
            vec![Event::AmplitudeChanged { level: 4 }]
        );
        assert_eq!(
            store.handle_notation("-").unwrap(),
            vec![Event::ZoomChanged { level: 1 }]
        );
        assert_eq!(
            store.handle_notation("=").unwrap(),
            vec![Event::ZoomChanged { level: 2 }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_bad_notation_is_user_error() {
        let mut store = store();
        let err = store.handle_notation("hyper+p").unwrap_err();
        assert!(matches!(err, DispatchError::Shortcut(_)));
        assert!(err.is_user_error());
    }

    #[tokio::test]
    async fn test_invalid_settings_rejected() {
        let result = DashboardStore::new(RefreshSettings::new(
            Duration::ZERO,
            Duration::from_millis(200),
            GeneratorKind::Demo,
        ));
        assert!(matches!(
            result,
            Err(DispatchError::Config(ConfigError::InvalidInterval))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_shorter_than_latency_accepted() {
        let mut store = DashboardStore::new(RefreshSettings::new(
            Duration::from_millis(150),
            Duration::from_millis(200),
            GeneratorKind::Demo,
        ))
        .unwrap();
        store.dispatch(Command::SetLive { live: true }).unwrap();

        sleep(Duration::from_millis(1_000)).await;
        assert!(store.state().refresh_count >= 5);
    }
}
