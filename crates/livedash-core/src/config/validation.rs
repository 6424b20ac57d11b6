use tracing::warn;

use crate::config::types::LivedashConfig;
use crate::errors::ConfigError;

/// Validate a fully merged configuration.
///
/// A zero interval is rejected instead of silently defaulting. Latency may
/// exceed the interval; overlapping refreshes each publish in turn.
pub fn validate_config(config: &LivedashConfig) -> Result<(), ConfigError> {
    let interval_ms = config.refresh.interval_ms();
    if interval_ms == 0 {
        warn!(event = "core.config.validation_failed", field = "refresh.interval_ms");
        return Err(ConfigError::InvalidInterval);
    }

    let currency = config.display.currency();
    if currency.trim().is_empty() {
        warn!(event = "core.config.validation_failed", field = "display.currency");
        return Err(ConfigError::InvalidConfiguration {
            message: "display.currency cannot be empty".to_string(),
        });
    }

    Ok(())
}
