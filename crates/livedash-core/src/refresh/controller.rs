use std::sync::{Arc, Mutex};

use chrono::Utc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::errors::ConfigError;
use crate::metrics::{Generate, build_generator};
use crate::refresh::ticker::LiveTicker;
use crate::refresh::types::{DashboardState, RefreshSettings, RefreshTrigger};

/// Owns the published dashboard state and the live-mode timer.
///
/// Two states, Paused and Live, switched by [`toggle_live`](Self::toggle_live).
/// Both accept manual [`refresh`](Self::refresh) calls. Construction starts
/// paused and immediately schedules one refresh.
///
/// Overlapping refreshes are not coalesced: each publishes independently when
/// its latency elapses, and the last one to complete wins. `is_loading` stays
/// set until no refresh is pending.
///
/// Dropping the controller (or calling [`dispose`](Self::dispose)) cancels the
/// ticker and every pending refresh; nothing publishes afterwards.
pub struct RefreshController {
    shared: Arc<Shared>,
    ticker: LiveTicker,
    settings: RefreshSettings,
}

struct Shared {
    state: watch::Sender<DashboardState>,
    generator: Mutex<Box<dyn Generate>>,
    latency: std::time::Duration,
    shutdown: CancellationToken,
}

impl RefreshController {
    /// Create a controller backed by the generator named in `settings`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(settings: RefreshSettings) -> Result<Self, ConfigError> {
        let generator = build_generator(settings.generator);
        Self::with_generator(settings, generator)
    }

    /// Create a controller with an explicit generator (e.g., a seeded one).
    pub fn with_generator(
        settings: RefreshSettings,
        generator: Box<dyn Generate>,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;

        let shutdown = CancellationToken::new();
        let (state, _) = watch::channel(DashboardState {
            is_loading: true,
            ..DashboardState::default()
        });

        info!(
            event = "core.refresh.controller_created",
            interval_ms = settings.interval.as_millis() as u64,
            latency_ms = settings.latency.as_millis() as u64,
            generator = generator.name()
        );

        let ticker = LiveTicker::new(settings.interval, shutdown.clone())?;
        let controller = Self {
            shared: Arc::new(Shared {
                state,
                generator: Mutex::new(generator),
                latency: settings.latency,
                shutdown,
            }),
            ticker,
            settings,
        };

        controller.shared.schedule_refresh(RefreshTrigger::Initial);
        Ok(controller)
    }

    pub fn settings(&self) -> &RefreshSettings {
        &self.settings
    }

    /// Schedule a one-shot refresh without changing live state.
    pub fn refresh(&self) {
        self.shared.schedule_refresh(RefreshTrigger::Manual);
    }

    /// Flip between Paused and Live. Returns the new live flag.
    ///
    /// Going live starts the ticker (first tick one interval from now).
    /// Pausing stops it; refreshes already in flight still complete.
    pub fn toggle_live(&mut self) -> bool {
        let live = !self.is_live();
        self.set_live(live);
        live
    }

    /// Set live mode explicitly. Returns `true` if the state changed.
    pub fn set_live(&mut self, live: bool) -> bool {
        if live == self.is_live() {
            return false;
        }

        if live {
            let shared = Arc::clone(&self.shared);
            self.ticker
                .start(move || shared.schedule_refresh(RefreshTrigger::Tick));
        } else {
            self.ticker.stop();
        }

        self.shared.state.send_modify(|state| state.is_live = live);
        info!(event = "core.refresh.live_toggled", is_live = live);
        true
    }

    pub fn is_live(&self) -> bool {
        self.shared.state.borrow().is_live
    }

    /// Clone of the current published state.
    pub fn state(&self) -> DashboardState {
        self.shared.state.borrow().clone()
    }

    /// Receiver notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.shared.state.subscribe()
    }

    /// Tear down: stop the ticker and cancel pending refreshes.
    pub fn dispose(self) {
        info!(event = "core.refresh.controller_disposed");
        // Drop does the cancellation.
    }
}

impl Drop for RefreshController {
    fn drop(&mut self) {
        self.ticker.stop();
        self.shared.shutdown.cancel();
    }
}

impl Shared {
    fn schedule_refresh(self: &Arc<Self>, trigger: RefreshTrigger) {
        if self.shutdown.is_cancelled() {
            warn!(
                event = "core.refresh.refresh_after_dispose",
                trigger = trigger.as_str()
            );
            return;
        }

        self.state.send_modify(|state| {
            state.pending_refreshes += 1;
            state.is_loading = true;
        });
        debug!(event = "core.refresh.refresh_scheduled", trigger = trigger.as_str());

        let shared = Arc::clone(self);
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = shared.shutdown.cancelled() => {
                    debug!(event = "core.refresh.refresh_cancelled", trigger = trigger.as_str());
                }
                _ = tokio::time::sleep(shared.latency) => shared.publish(trigger),
            }
        });
    }

    fn publish(&self, trigger: RefreshTrigger) {
        let snapshot = {
            let mut generator = self
                .generator
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            generator.generate()
        };
        let now = Utc::now();
        let revenue = snapshot.revenue.current;

        let mut refresh_count = 0;
        self.state.send_modify(|state| {
            state.snapshot = Some(Arc::new(snapshot));
            state.last_updated = Some(now);
            state.refresh_count += 1;
            state.pending_refreshes = state.pending_refreshes.saturating_sub(1);
            state.is_loading = state.pending_refreshes > 0;
            refresh_count = state.refresh_count;
        });

        info!(
            event = "core.refresh.snapshot_published",
            trigger = trigger.as_str(),
            refresh_count = refresh_count,
            revenue = revenue
        );
    }
}
