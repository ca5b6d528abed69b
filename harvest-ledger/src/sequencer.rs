//! Record identifier minting

use crate::types::RecordId;
use parking_lot::Mutex;

/// Monotonically increasing counter minting record identifiers.
///
/// Owned by the ledger service rather than held as ambient global state.
/// Starts at zero; the first minted identifier is 1. Identifiers are never
/// reused, even after the record they named is deleted.
#[derive(Debug, Default)]
pub struct Sequencer {
    counter: Mutex<u64>,
}

impl Sequencer {
    /// Create a sequencer starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next identifier
    pub fn next(&self) -> RecordId {
        let mut counter = self.counter.lock();
        *counter += 1;
        *counter
    }

    /// Highest identifier minted so far
    pub fn current(&self) -> u64 {
        *self.counter.lock()
    }
}
