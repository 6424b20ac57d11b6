//! # Configuration System
//!
//! Hierarchical TOML configuration for livedash.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.livedash/config.toml` (global user preferences)
//! 3. **Project config** - `./.livedash/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.livedash/config.toml
//! [refresh]
//! interval_ms = 3000
//! use_demo_data = true
//! ```
//!
//! ```rust,no_run
//! use livedash_core::config::LivedashConfig;
//!
//! // Handle config errors explicitly - don't silently fall back to defaults
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = LivedashConfig::load_hierarchy()?;
//!     println!("ticking every {} ms", config.refresh.interval_ms());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use types::{DisplayConfig, LivedashConfig, RefreshConfig};
pub use validation::validate_config;

impl LivedashConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
