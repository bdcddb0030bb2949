//! Factor Registry
//!
//! Maps stable factor ids to constructed factor instances. Populated once
//! during startup wiring and read-only afterwards, so it is safe to share
//! across concurrent attempts without locking.

use crate::domain::entity::Account;
use crate::domain::factor::{Factor, FactorDescriptor};
use crate::domain::value_object::FactorId;
use crate::error::{MfaError, MfaResult};
use std::sync::Arc;

/// Process-wide registry of available factors.
/// Registration order is the configured priority order.
#[derive(Default)]
pub struct FactorRegistry {
    factors: Vec<Arc<dyn Factor>>,
}

impl FactorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factor. Re-registering an id replaces the earlier
    /// instance (last write wins, keeping its priority slot).
    pub fn register(&mut self, factor: Arc<dyn Factor>) {
        let id = factor.descriptor().id.clone();
        if let Some(existing) = self
            .factors
            .iter_mut()
            .find(|f| f.descriptor().id == id)
        {
            *existing = factor;
        } else {
            self.factors.push(factor);
        }
        tracing::debug!(factor_id = %id, "Registered factor");
    }

    /// Resolve a factor id to its registered instance
    pub fn resolve(&self, factor_id: &FactorId) -> MfaResult<Arc<dyn Factor>> {
        self.factors
            .iter()
            .find(|f| &f.descriptor().id == factor_id)
            .cloned()
            .ok_or_else(|| MfaError::UnknownFactor(factor_id.clone()))
    }

    /// Descriptors of the factors enabled for the given account, in
    /// registry priority order. A single finite snapshot.
    pub fn factors_for(&self, account: &Account) -> Vec<FactorDescriptor> {
        self.factors
            .iter()
            .filter(|f| account.has_factor(&f.descriptor().id))
            .map(|f| f.descriptor().clone())
            .collect()
    }
}
