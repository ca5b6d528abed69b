//! Metrics collection for observability
//!
//! # Metrics
//!
//! - `ledger_records_created_total` - Records created
//! - `ledger_records_modified_total` - Records modified (field update or label append)
//! - `ledger_records_deleted_total` - Records deleted
//! - `ledger_ownership_transfers_total` - Ownership transfers
//! - `ledger_verifications_total` - Authenticity checks performed
//! - `ledger_auth_failures_total` - Operations rejected for lack of standing
//! - `ledger_records_live` - Records currently stored

use prometheus::{IntCounter, IntGauge, Registry};
use std::sync::Arc;

/// Metrics collector
///
/// Counters are registered on an owned registry (not the process-global
/// default) so that independent ledgers can each carry their own collector.
#[derive(Clone)]
pub struct Metrics {
    /// Records created
    pub records_created: IntCounter,

    /// Records modified
    pub records_modified: IntCounter,

    /// Records deleted
    pub records_deleted: IntCounter,

    /// Ownership transfers
    pub ownership_transfers: IntCounter,

    /// Authenticity checks
    pub verifications: IntCounter,

    /// Authorization rejections
    pub auth_failures: IntCounter,

    /// Records currently stored
    pub records_live: IntGauge,

    /// Prometheus registry
    pub registry: Arc<Registry>,
}

impl Metrics {
    /// Create new metrics collector
    pub fn new() -> prometheus::Result<Self> {
        let registry = Arc::new(Registry::new());

        let records_created =
            IntCounter::new("ledger_records_created_total", "Records created")?;
        registry.register(Box::new(records_created.clone()))?;

        let records_modified =
            IntCounter::new("ledger_records_modified_total", "Records modified")?;
        registry.register(Box::new(records_modified.clone()))?;

        let records_deleted =
            IntCounter::new("ledger_records_deleted_total", "Records deleted")?;
        registry.register(Box::new(records_deleted.clone()))?;

        let ownership_transfers =
            IntCounter::new("ledger_ownership_transfers_total", "Ownership transfers")?;
        registry.register(Box::new(ownership_transfers.clone()))?;

        let verifications =
            IntCounter::new("ledger_verifications_total", "Authenticity checks performed")?;
        registry.register(Box::new(verifications.clone()))?;

        let auth_failures = IntCounter::new(
            "ledger_auth_failures_total",
            "Operations rejected for lack of standing",
        )?;
        registry.register(Box::new(auth_failures.clone()))?;

        let records_live = IntGauge::new("ledger_records_live", "Records currently stored")?;
        registry.register(Box::new(records_live.clone()))?;

        Ok(Self {
            records_created,
            records_modified,
            records_deleted,
            ownership_transfers,
            verifications,
            auth_failures,
            records_live,
            registry,
        })
    }

    /// Record a creation
    pub fn record_created(&self) {
        self.records_created.inc();
        self.records_live.inc();
    }

    /// Record a field update or label append
    pub fn record_modified(&self) {
        self.records_modified.inc();
    }

    /// Record a deletion
    pub fn record_deleted(&self) {
        self.records_deleted.inc();
        self.records_live.dec();
    }

    /// Record an ownership transfer
    pub fn record_transfer(&self) {
        self.ownership_transfers.inc();
    }

    /// Record an authenticity check
    pub fn record_verification(&self) {
        self.verifications.inc();
    }

    /// Record an authorization rejection
    pub fn record_auth_failure(&self) {
        self.auth_failures.inc();
    }

    /// Get metrics registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics")
            .field("records_created", &self.records_created.get())
            .field("records_live", &self.records_live.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().unwrap();
        assert_eq!(metrics.records_created.get(), 0);
        assert_eq!(metrics.records_live.get(), 0);
    }

    #[test]
    fn test_create_and_delete_track_live_gauge() {
        let metrics = Metrics::new().unwrap();

        metrics.record_created();
        metrics.record_created();
        assert_eq!(metrics.records_created.get(), 2);
        assert_eq!(metrics.records_live.get(), 2);

        metrics.record_deleted();
        assert_eq!(metrics.records_deleted.get(), 1);
        assert_eq!(metrics.records_live.get(), 1);
    }

    #[test]
    fn test_independent_collectors() {
        // Owned registries: two collectors never collide.
        let a = Metrics::new().unwrap();
        let b = Metrics::new().unwrap();

        a.record_auth_failure();
        assert_eq!(a.auth_failures.get(), 1);
        assert_eq!(b.auth_failures.get(), 0);
    }

    #[test]
    fn test_registry_gathers_families() {
        let metrics = Metrics::new().unwrap();
        metrics.record_verification();

        let families = metrics.registry().gather();
        assert!(families
            .iter()
            .any(|f| f.get_name() == "ledger_verifications_total"));
    }
}
