//! Main ledger orchestration layer
//!
//! This module ties together validation, the record and access stores, and
//! the sequencer into the public operation surface. Every operation takes
//! the calling principal explicitly; creation and verification additionally
//! take the current chain height, both supplied by the hosting environment.
//!
//! # Example
//!
//! ```
//! use harvest_ledger::{Config, Ledger, PrincipalId, RecordDraft};
//!
//! fn main() -> harvest_ledger::Result<()> {
//!     let ledger = Ledger::new(Config::default())?;
//!     let alice = PrincipalId::new("farmer-alice");
//!
//!     let draft = RecordDraft::new("Wheat", 500, "Field A", vec!["organic".into()]);
//!     let id = ledger.create_record(&alice, 100, draft)?;
//!
//!     let record = ledger.get_record(&alice, id)?;
//!     assert_eq!(record.producer, alice);
//!     Ok(())
//! }
//! ```

use crate::{
    metrics::Metrics,
    sequencer::Sequencer,
    storage::{AccessStore, RecordStore},
    types::{PrincipalId, ProductionRecord, RecordDraft, RecordId, VerificationResult},
    validate::{self, MAX_LABELS, MAX_LABEL_LEN},
    Config, Error, Result,
};

/// Main ledger interface
///
/// Operations are synchronous and deterministic given their inputs, the
/// caller identity, and the current height; the host commits one operation
/// fully before the next begins. All preconditions are checked before any
/// mutation, so a failed operation leaves no partial state behind.
#[derive(Debug)]
pub struct Ledger {
    /// Production records, keyed by record index
    records: RecordStore,

    /// Viewing permissions, keyed by record index and accessor
    grants: AccessStore,

    /// Identifier minting
    sequencer: Sequencer,

    /// Metrics collector
    metrics: Metrics,

    /// Configuration (carries the system owner principal)
    config: Config,
}

impl Ledger {
    /// Build a ledger from configuration
    pub fn new(config: Config) -> Result<Self> {
        let metrics = Metrics::new()?;

        tracing::info!(
            service = %config.service_name,
            system_owner = %config.system_owner,
            "Ledger initialized"
        );

        Ok(Self {
            records: RecordStore::new(),
            grants: AccessStore::new(),
            sequencer: Sequencer::new(),
            metrics,
            config,
        })
    }

    /// Create a production record owned by the caller.
    ///
    /// Mints a fresh identifier, stamps the record with the caller and the
    /// current height, and grants the caller viewing access.
    pub fn create_record(
        &self,
        caller: &PrincipalId,
        height: u64,
        draft: RecordDraft,
    ) -> Result<RecordId> {
        validate::check_draft(&draft)?;

        let id = self.sequencer.next();
        let record = ProductionRecord::from_draft(id, caller.clone(), height, draft);
        self.records.insert(record)?;
        self.grants.grant(id, caller.clone());

        self.metrics.record_created();
        tracing::info!(
            record_index = id,
            producer = %caller,
            creation_height = height,
            "Record created"
        );

        Ok(id)
    }

    /// Overwrite the caller-supplied fields of an existing record.
    ///
    /// Producer and creation height are untouched.
    pub fn modify_record(
        &self,
        caller: &PrincipalId,
        id: RecordId,
        draft: RecordDraft,
    ) -> Result<()> {
        let record = self.fetch(id)?;
        self.require_producer(&record, caller)?;
        validate::check_draft(&draft)?;

        let updated = ProductionRecord::from_draft(
            record.record_index,
            record.producer,
            record.creation_height,
            draft,
        );
        self.records.set(updated);

        self.metrics.record_modified();
        tracing::debug!(record_index = id, "Record modified");

        Ok(())
    }

    /// Append labels to a record, preserving the existing order.
    ///
    /// Returns the resulting label sequence. The combined count must stay
    /// within the per-record label bound.
    pub fn append_labels(
        &self,
        caller: &PrincipalId,
        id: RecordId,
        new_labels: &[String],
    ) -> Result<Vec<String>> {
        let record = self.fetch(id)?;
        self.require_producer(&record, caller)?;

        if !validate::validate_label_set(new_labels) {
            return Err(Error::LabelFormat(format!(
                "expected 1-{} labels of 1-{} bytes each",
                MAX_LABELS, MAX_LABEL_LEN
            )));
        }
        if record.labels.len() + new_labels.len() > MAX_LABELS {
            return Err(Error::LabelFormat(format!(
                "label count would exceed {}",
                MAX_LABELS
            )));
        }

        let mut updated = record;
        updated.labels.extend_from_slice(new_labels);
        let labels = updated.labels.clone();
        self.records.set(updated);

        self.metrics.record_modified();
        tracing::debug!(record_index = id, label_count = labels.len(), "Labels appended");

        Ok(labels)
    }

    /// Remove a record entirely.
    ///
    /// Hard removal, not a tombstone. Viewing grants referencing the record
    /// are left in place; default-deny readers resolve the record first, so
    /// a stale grant confers nothing.
    pub fn delete_record(&self, caller: &PrincipalId, id: RecordId) -> Result<()> {
        let record = self.fetch(id)?;
        self.require_producer(&record, caller)?;

        self.records.remove(id);

        self.metrics.record_deleted();
        tracing::info!(record_index = id, "Record deleted");

        Ok(())
    }

    /// Hand the record to a new producer.
    ///
    /// Ownership and viewing access are independent relations: the previous
    /// producer keeps any grant it holds, and the new producer gains none.
    pub fn transfer_ownership(
        &self,
        caller: &PrincipalId,
        id: RecordId,
        new_producer: PrincipalId,
    ) -> Result<()> {
        let record = self.fetch(id)?;
        self.require_producer(&record, caller)?;

        let mut updated = record;
        updated.producer = new_producer.clone();
        self.records.set(updated);

        self.metrics.record_transfer();
        tracing::info!(
            record_index = id,
            previous = %caller,
            new_producer = %new_producer,
            "Ownership transferred"
        );

        Ok(())
    }

    /// Remove an accessor's viewing grant on a record.
    ///
    /// A producer may not revoke their own access. Revoking an absent grant
    /// is not an error.
    pub fn revoke_access(
        &self,
        caller: &PrincipalId,
        id: RecordId,
        accessor: &PrincipalId,
    ) -> Result<()> {
        let record = self.fetch(id)?;
        self.require_producer(&record, caller)?;

        if accessor == caller {
            self.metrics.record_auth_failure();
            tracing::warn!(record_index = id, caller = %caller, "Self-revocation rejected");
            return Err(Error::AdminRestricted);
        }

        self.grants.revoke(id, accessor);

        tracing::debug!(record_index = id, accessor = %accessor, "Viewing access revoked");

        Ok(())
    }

    /// Check whether a record was produced by the expected principal.
    ///
    /// Read-only and never an error path for a mismatch: a wrong expected
    /// producer yields a normal `false` result.
    pub fn verify_authenticity(
        &self,
        caller: &PrincipalId,
        height: u64,
        id: RecordId,
        expected_producer: &PrincipalId,
    ) -> Result<VerificationResult> {
        let record = self.fetch(id)?;
        if !self.can_view(&record, caller) {
            self.metrics.record_auth_failure();
            tracing::warn!(record_index = id, caller = %caller, "Verification access denied");
            return Err(Error::PermissionDenied);
        }

        let matched = record.producer == *expected_producer;
        self.metrics.record_verification();

        Ok(VerificationResult {
            is_authentic: matched,
            current_height: height,
            ledger_age: height.saturating_sub(record.creation_height),
            producer_match: matched,
        })
    }

    /// Administrative lock entry point.
    ///
    /// Authorization is checked but no state changes; a freeze flag is not
    /// part of the current contract.
    pub fn apply_security_lock(&self, caller: &PrincipalId, id: RecordId) -> Result<()> {
        let record = self.fetch(id)?;

        if *caller != self.config.system_owner && *caller != record.producer {
            self.metrics.record_auth_failure();
            tracing::warn!(record_index = id, caller = %caller, "Security lock rejected");
            return Err(Error::AdminRestricted);
        }

        tracing::debug!(record_index = id, caller = %caller, "Security lock acknowledged");

        Ok(())
    }

    /// Fetch a record the caller is allowed to view.
    ///
    /// The caller must be the producer, hold a viewing grant, or be the
    /// system owner. Not an enumeration surface: the index must be known.
    pub fn get_record(&self, caller: &PrincipalId, id: RecordId) -> Result<ProductionRecord> {
        let record = self.fetch(id)?;
        if !self.can_view(&record, caller) {
            self.metrics.record_auth_failure();
            tracing::warn!(record_index = id, caller = %caller, "Read access denied");
            return Err(Error::PermissionDenied);
        }

        Ok(record)
    }

    /// Metrics collector
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// System owner principal fixed at deployment
    pub fn system_owner(&self) -> &PrincipalId {
        &self.config.system_owner
    }

    fn fetch(&self, id: RecordId) -> Result<ProductionRecord> {
        self.records.get(id).ok_or(Error::RecordMissing(id))
    }

    fn require_producer(&self, record: &ProductionRecord, caller: &PrincipalId) -> Result<()> {
        if record.producer != *caller {
            self.metrics.record_auth_failure();
            tracing::warn!(
                record_index = record.record_index,
                caller = %caller,
                "Ownership check failed"
            );
            return Err(Error::OwnershipMismatch);
        }
        Ok(())
    }

    fn can_view(&self, record: &ProductionRecord, caller: &PrincipalId) -> bool {
        *caller == record.producer
            || self
                .grants
                .get(record.record_index, caller)
                .unwrap_or(false)
            || *caller == self.config.system_owner
    }
}
