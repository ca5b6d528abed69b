//! Core types for the production ledger
//!
//! All types are plain data designed for:
//! - Deterministic behavior (no hidden clocks or randomness)
//! - Memory safety (no unsafe code)
//! - Serialization at the host boundary (serde)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Record identifier minted by the sequencer.
///
/// Strictly increasing in issuance order, never reused even after deletion.
pub type RecordId = u64;

/// Opaque principal identity supplied by the hosting environment.
///
/// Principals are comparable and hashable; no ordering semantics are
/// attached to them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrincipalId(String);

impl PrincipalId {
    /// Create new principal ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PrincipalId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Caller-supplied fields of a create or modify call.
///
/// Bounds are enforced by the validator before any mutation:
/// product 1–64 bytes, volume in `1..1_000_000_000`, notes 1–128 bytes,
/// 1–10 labels of 1–32 bytes each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    /// Human-readable crop/product name
    pub product: String,

    /// Yield quantity
    pub volume: u64,

    /// Free-form location notes
    pub notes: String,

    /// Ordered metadata labels
    pub labels: Vec<String>,
}

impl RecordDraft {
    /// Convenience constructor for string-ish fields
    pub fn new(
        product: impl Into<String>,
        volume: u64,
        notes: impl Into<String>,
        labels: Vec<String>,
    ) -> Self {
        Self {
            product: product.into(),
            volume,
            notes: notes.into(),
            labels,
        }
    }
}

/// One production entry, uniquely identified by an increasing integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionRecord {
    /// Primary key, assigned by the sequencer; immutable once set
    pub record_index: RecordId,

    /// Human-readable crop/product name
    pub product: String,

    /// Current owning producer; changes only through ownership transfer
    pub producer: PrincipalId,

    /// Yield quantity
    pub volume: u64,

    /// Chain height at creation time; immutable
    pub creation_height: u64,

    /// Free-form location notes
    pub notes: String,

    /// Ordered metadata labels (1–10 entries)
    pub labels: Vec<String>,
}

impl ProductionRecord {
    /// Build a record from a validated draft
    pub(crate) fn from_draft(
        record_index: RecordId,
        producer: PrincipalId,
        creation_height: u64,
        draft: RecordDraft,
    ) -> Self {
        Self {
            record_index,
            product: draft.product,
            producer,
            volume: draft.volume,
            creation_height,
            notes: draft.notes,
            labels: draft.labels,
        }
    }
}

/// Outcome of an authenticity check.
///
/// A producer mismatch is a normal `false` result, never an error:
/// `is_authentic` and `producer_match` always carry the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Whether the stored producer equals the expected producer
    pub is_authentic: bool,

    /// Height supplied by the host at verification time
    pub current_height: u64,

    /// Blocks elapsed since the record was created
    pub ledger_age: u64,

    /// Same value as `is_authentic`
    pub producer_match: bool,
}
