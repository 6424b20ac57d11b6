//! Repeating timer that drives live mode.
//!
//! The ticker knows nothing about snapshots; it calls a closure once per
//! period until stopped. It runs on tokio's clock, so tests drive it with
//! paused virtual time.

use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::errors::ConfigError;

pub struct LiveTicker {
    period: Duration,
    parent: CancellationToken,
    running: Option<CancellationToken>,
}

impl LiveTicker {
    /// Ticker whose tasks are also cancelled when `parent` is.
    ///
    /// A zero period is rejected with [`ConfigError::InvalidInterval`].
    pub fn new(period: Duration, parent: CancellationToken) -> Result<Self, ConfigError> {
        if period.is_zero() {
            return Err(ConfigError::InvalidInterval);
        }
        Ok(Self {
            period,
            parent,
            running: None,
        })
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.running
            .as_ref()
            .is_some_and(|token| !token.is_cancelled())
    }

    /// Start ticking. The first tick fires one full period from now.
    ///
    /// Returns `false` (and does nothing) if already running. Must be called
    /// from within a tokio runtime.
    pub fn start<F>(&mut self, mut on_tick: F) -> bool
    where
        F: FnMut() + Send + 'static,
    {
        if self.is_running() {
            return false;
        }

        let token = self.parent.child_token();
        let task_token = token.clone();
        let period = self.period;
        let first_tick = Instant::now() + period;

        tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(first_tick, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = task_token.cancelled() => break,
                    _ = interval.tick() => {
                        if task_token.is_cancelled() {
                            break;
                        }
                        on_tick();
                    }
                }
            }

            debug!(event = "core.refresh.ticker_exited");
        });

        debug!(
            event = "core.refresh.ticker_started",
            period_ms = period.as_millis() as u64
        );
        self.running = Some(token);
        true
    }

    /// Stop ticking. No tick fires after this returns.
    ///
    /// Returns `false` if the ticker was not running.
    pub fn stop(&mut self) -> bool {
        match self.running.take() {
            Some(token) => {
                token.cancel();
                debug!(event = "core.refresh.ticker_stopped");
                true
            }
            None => false,
        }
    }
}

impl Drop for LiveTicker {
    fn drop(&mut self) {
        if let Some(token) = self.running.take() {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn counting_ticker(period_ms: u64) -> (LiveTicker, Arc<AtomicU32>) {
        let ticker =
            LiveTicker::new(Duration::from_millis(period_ms), CancellationToken::new()).unwrap();
        (ticker, Arc::new(AtomicU32::new(0)))
    }

    fn start_counting(ticker: &mut LiveTicker, ticks: &Arc<AtomicU32>) -> bool {
        let counter = Arc::clone(ticks);
        ticker.start(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_full_period() {
        let (mut ticker, ticks) = counting_ticker(1000);
        assert!(start_counting(&mut ticker, &ticks));

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_prevents_further_ticks() {
        let (mut ticker, ticks) = counting_ticker(1000);
        start_counting(&mut ticker, &ticks);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(ticker.stop());
        assert!(!ticker.is_running());

        tokio::time::sleep(Duration::from_millis(10_000)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_twice_is_noop() {
        let (mut ticker, ticks) = counting_ticker(1000);
        assert!(start_counting(&mut ticker, &ticks));
        assert!(!start_counting(&mut ticker, &ticks));

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_parent_cancellation_stops_ticker() {
        let parent = CancellationToken::new();
        let mut ticker = LiveTicker::new(Duration::from_millis(500), parent.clone()).unwrap();
        let ticks = Arc::new(AtomicU32::new(0));
        start_counting(&mut ticker, &ticks);

        parent.cancel();
        assert!(!ticker.is_running());

        tokio::time::sleep(Duration::from_millis(5_000)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_zero_period_rejected() {
        let result = LiveTicker::new(Duration::ZERO, CancellationToken::new());
        assert!(matches!(result, Err(ConfigError::InvalidInterval)));
    }

    #[test]
    fn test_stop_when_idle_returns_false() {
        let (mut ticker, _) = counting_ticker(1000);
        assert!(!ticker.stop());
    }
}
