//! Error types for the ledger

use crate::types::RecordId;
use thiserror::Error;

/// Result type for ledger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ledger errors
///
/// Every precondition failure aborts the whole operation with exactly one of
/// these kinds; the first violated precondition wins and no partial mutation
/// is left behind.
#[derive(Error, Debug)]
pub enum Error {
    /// Referenced record index has no current record
    #[error("record not found: {0}")]
    RecordMissing(RecordId),

    /// Identifier collision on insert (unreachable under correct sequencer use)
    #[error("record already exists: {0}")]
    DuplicateEntry(RecordId),

    /// A text field is empty or exceeds its maximum length
    #[error("field length out of bounds: {0}")]
    FieldLengthViolation(String),

    /// Volume is zero or at/above the upper bound
    #[error("volume out of bounds: {0}")]
    QuantityBounds(u64),

    /// Caller lacks producer, grant, or owner standing for a read
    #[error("permission denied")]
    PermissionDenied,

    /// Caller is not the record's current producer
    #[error("caller is not the record producer")]
    OwnershipMismatch,

    /// Caller lacks owner/producer standing for an administrative operation,
    /// or attempted a disallowed self-targeting action
    #[error("administrative action not permitted")]
    AdminRestricted,

    /// Reserved for view-only rejections; no current operation produces it
    #[error("viewing access denied")]
    ViewAccessDenied,

    /// Label set violates count or per-label length bounds
    #[error("invalid label set: {0}")]
    LabelFormat(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Metrics registration error
    #[error("metrics error: {0}")]
    Metrics(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<prometheus::Error> for Error {
    fn from(err: prometheus::Error) -> Self {
        Error::Metrics(err.to_string())
    }
}
