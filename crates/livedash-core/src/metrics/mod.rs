//! Metrics snapshot generation.
//!
//! # Architecture
//!
//! - [`Generate`] - Trait every snapshot producer implements
//! - [`DemoGenerator`] - Fixed fixture for reproducible presentations
//! - [`RandomGenerator`] - Bounded noise around baselines, injectable RNG
//! - [`GeneratorKind`] - Config-level selector between the two
//!
//! # Usage
//!
//! ```rust
//! use livedash_core::metrics::{GeneratorKind, build_generator};
//!
//! let mut generator = build_generator(GeneratorKind::Demo);
//! let snapshot = generator.generate();
//! assert_eq!(snapshot.revenue.trend.len(), 24);
//! ```

pub mod demo;
pub mod random;
pub mod traits;
pub mod types;

use serde::{Deserialize, Serialize};

pub use demo::DemoGenerator;
pub use random::RandomGenerator;
pub use traits::Generate;
pub use types::MetricsSnapshot;

/// Which generator backs a refresh controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    Demo,
    Randomized,
}

impl GeneratorKind {
    pub fn from_demo_flag(use_demo_data: bool) -> Self {
        if use_demo_data {
            GeneratorKind::Demo
        } else {
            GeneratorKind::Randomized
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorKind::Demo => "demo",
            GeneratorKind::Randomized => "randomized",
        }
    }
}

impl std::fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Build a boxed generator for the given kind.
pub fn build_generator(kind: GeneratorKind) -> Box<dyn Generate> {
    match kind {
        GeneratorKind::Demo => Box::new(DemoGenerator::new()),
        GeneratorKind::Randomized => Box::new(RandomGenerator::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_demo_flag() {
        assert_eq!(GeneratorKind::from_demo_flag(true), GeneratorKind::Demo);
        assert_eq!(
            GeneratorKind::from_demo_flag(false),
            GeneratorKind::Randomized
        );
    }

    #[test]
    fn test_build_generator_matches_kind() {
        assert_eq!(build_generator(GeneratorKind::Demo).name(), "demo");
        assert_eq!(
            build_generator(GeneratorKind::Randomized).name(),
            "randomized"
        );
    }
}
