//! Snapshot generator trait definition.

use super::types::MetricsSnapshot;

/// Trait defining the interface for snapshot generators.
///
/// Generation takes no inputs and cannot fail. Implementations may only draw
/// on internal state (a random source or fixed data).
pub trait Generate: Send {
    /// Produce a complete snapshot.
    fn generate(&mut self) -> MetricsSnapshot;

    /// Short name used in logs (e.g., "demo", "randomized").
    fn name(&self) -> &'static str;
}

impl<G: Generate + ?Sized> Generate for Box<G> {
    fn generate(&mut self) -> MetricsSnapshot {
        (**self).generate()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
