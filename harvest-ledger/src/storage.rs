//! In-memory storage layer
//!
//! # Tables
//!
//! - `records` - Production records (key: record index)
//! - `grants` - Viewing permissions (key: record index + accessor)
//!
//! Both tables expose `&self` methods over interior mutability; the hosting
//! environment serializes operations, so no ordering discipline is required
//! beyond per-entry consistency.

use crate::{
    error::{Error, Result},
    types::{PrincipalId, ProductionRecord, RecordId},
};
use dashmap::DashMap;

/// Keyed storage of production records, the aggregate root of the system.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: DashMap<RecordId, ProductionRecord>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a record by index
    pub fn get(&self, id: RecordId) -> Option<ProductionRecord> {
        self.records.get(&id).map(|entry| entry.clone())
    }

    /// Insert a new record, failing if the index is already present.
    ///
    /// Indices are minted by the sequencer, so a collision is unreachable in
    /// practice; the contract still treats insert as non-overwriting.
    pub fn insert(&self, record: ProductionRecord) -> Result<()> {
        let id = record.record_index;
        if self.records.contains_key(&id) {
            return Err(Error::DuplicateEntry(id));
        }
        self.records.insert(id, record);

        tracing::debug!(record_index = id, "Record inserted");
        Ok(())
    }

    /// Overwrite a record (used for update and transfer)
    pub fn set(&self, record: ProductionRecord) {
        let id = record.record_index;
        self.records.insert(id, record);

        tracing::debug!(record_index = id, "Record overwritten");
    }

    /// Remove a record, returning it if present
    pub fn remove(&self, id: RecordId) -> Option<ProductionRecord> {
        self.records.remove(&id).map(|(_, record)| record)
    }

    /// Whether a record exists for this index
    pub fn contains(&self, id: RecordId) -> bool {
        self.records.contains_key(&id)
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Per-record, per-principal viewing permissions.
///
/// Default-deny capability table: absence of an entry means no access, and
/// readers treat absence and explicit `false` identically. Revocation removes
/// the entry rather than flipping it to `false`.
#[derive(Debug, Default)]
pub struct AccessStore {
    grants: DashMap<(RecordId, PrincipalId), bool>,
}

impl AccessStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the stored permission, if any
    pub fn get(&self, id: RecordId, accessor: &PrincipalId) -> Option<bool> {
        self.grants
            .get(&(id, accessor.clone()))
            .map(|entry| *entry)
    }

    /// Grant viewing permission
    pub fn grant(&self, id: RecordId, accessor: PrincipalId) {
        tracing::debug!(record_index = id, accessor = %accessor, "Access granted");
        self.grants.insert((id, accessor), true);
    }

    /// Remove the grant entry entirely; no-op if absent
    pub fn revoke(&self, id: RecordId, accessor: &PrincipalId) {
        if self.grants.remove(&(id, accessor.clone())).is_some() {
            tracing::debug!(record_index = id, accessor = %accessor, "Access revoked");
        }
    }
}
