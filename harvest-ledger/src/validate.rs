//! Field validation
//!
//! Pure, stateless predicates over caller-supplied input. Nothing in this
//! module touches ledger state; the ledger service runs these checks before
//! applying any mutation.

use crate::{
    error::{Error, Result},
    types::RecordDraft,
};

/// Maximum product name length in bytes
pub const MAX_PRODUCT_LEN: usize = 64;

/// Maximum location notes length in bytes
pub const MAX_NOTES_LEN: usize = 128;

/// Maximum length of a single label in bytes
pub const MAX_LABEL_LEN: usize = 32;

/// Maximum number of labels on a record
pub const MAX_LABELS: usize = 10;

/// Exclusive upper bound on output volume
pub const VOLUME_LIMIT: u64 = 1_000_000_000;

/// True iff the label length is in `1..=MAX_LABEL_LEN` bytes.
pub fn validate_label(label: &str) -> bool {
    !label.is_empty() && label.len() <= MAX_LABEL_LEN
}

/// True iff the set holds `1..=MAX_LABELS` entries and every entry
/// independently satisfies [`validate_label`].
pub fn validate_label_set(labels: &[String]) -> bool {
    !labels.is_empty()
        && labels.len() <= MAX_LABELS
        && labels.iter().all(|label| validate_label(label))
}

/// Check all draft fields in fixed order: product, volume, notes, labels.
///
/// The first violated bound aborts the check; callers see exactly one error.
pub fn check_draft(draft: &RecordDraft) -> Result<()> {
    if draft.product.is_empty() || draft.product.len() > MAX_PRODUCT_LEN {
        return Err(Error::FieldLengthViolation(format!(
            "product must be 1-{} bytes, got {}",
            MAX_PRODUCT_LEN,
            draft.product.len()
        )));
    }

    if draft.volume == 0 || draft.volume >= VOLUME_LIMIT {
        return Err(Error::QuantityBounds(draft.volume));
    }

    if draft.notes.is_empty() || draft.notes.len() > MAX_NOTES_LEN {
        return Err(Error::FieldLengthViolation(format!(
            "notes must be 1-{} bytes, got {}",
            MAX_NOTES_LEN,
            draft.notes.len()
        )));
    }

    if !validate_label_set(&draft.labels) {
        return Err(Error::LabelFormat(format!(
            "expected 1-{} labels of 1-{} bytes each",
            MAX_LABELS, MAX_LABEL_LEN
        )));
    }

    Ok(())
}
