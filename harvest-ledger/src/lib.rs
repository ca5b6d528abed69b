//! AgroTrace Harvest Ledger
//!
//! Single-authority-per-record ledger for agricultural production entries
//! with principal-based read authorization.
//!
//! # Architecture
//!
//! - **Single authority**: Exactly one producer principal owns each record
//!   and holds its mutation rights
//! - **Default-deny access**: Viewing permission is an explicit capability
//!   table; absence means no access
//! - **Monotonic identifiers**: Record indices are minted by a sequencer and
//!   never reused, even after deletion
//! - **Atomic operations**: Every precondition is checked before any
//!   mutation; a failed operation leaves no partial state
//!
//! # Invariants
//!
//! - Record indices are unique and strictly increasing in issuance order
//! - Only the current producer (or the system owner, per-operation) may
//!   mutate or delete a record
//! - Label sets always hold 1–10 entries of 1–32 bytes each
//! - The creating producer always receives an implicit viewing grant

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod config;
pub mod error;
pub mod ledger;
pub mod metrics;
pub mod sequencer;
pub mod storage;
pub mod types;
pub mod validate;

// Re-exports
pub use config::Config;
pub use error::{Error, Result};
pub use ledger::Ledger;
pub use types::{
    PrincipalId, ProductionRecord, RecordDraft, RecordId, VerificationResult,
};
