//! Property-based tests for ledger invariants
//!
//! These tests use proptest to verify the critical invariants:
//! - Identifier uniqueness and monotonicity, even across deletions
//! - Validation boundaries accept exactly the specified ranges
//! - Failed foreign mutations leave records byte-for-byte unchanged
//! - Label appends preserve the existing prefix in order

use harvest_ledger::{Config, Error, Ledger, PrincipalId, RecordDraft};
use proptest::prelude::*;

/// Strategy for valid product names (1-64 bytes)
fn product_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,63}"
}

/// Strategy for valid volumes
fn volume_strategy() -> impl Strategy<Value = u64> {
    1u64..1_000_000_000u64
}

/// Strategy for valid notes (1-128 bytes)
fn notes_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ]{1,128}"
}

/// Strategy for valid label sets (1-10 labels of 1-32 bytes)
fn labels_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z0-9-]{1,32}", 1..=10)
}

/// Strategy for valid record drafts
fn draft_strategy() -> impl Strategy<Value = RecordDraft> {
    (
        product_strategy(),
        volume_strategy(),
        notes_strategy(),
        labels_strategy(),
    )
        .prop_map(|(product, volume, notes, labels)| RecordDraft {
            product,
            volume,
            notes,
            labels,
        })
}

fn test_ledger() -> Ledger {
    Ledger::new(Config::default()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: valid drafts are always accepted
    #[test]
    fn prop_valid_drafts_accepted(draft in draft_strategy()) {
        let ledger = test_ledger();
        let producer = PrincipalId::new("producer");

        let result = ledger.create_record(&producer, 1, draft);
        prop_assert!(result.is_ok());
    }

    /// Property: out-of-bound volumes are always rejected
    #[test]
    fn prop_out_of_bound_volumes_rejected(
        volume in prop_oneof![Just(0u64), 1_000_000_000u64..u64::MAX / 2],
        draft in draft_strategy(),
    ) {
        let ledger = test_ledger();
        let producer = PrincipalId::new("producer");

        let mut draft = draft;
        draft.volume = volume;
        let result = ledger.create_record(&producer, 1, draft);
        prop_assert!(matches!(result, Err(Error::QuantityBounds(_))));
    }

    /// Property: minted identifiers are strictly increasing with no repeats,
    /// even when creations are interleaved with deletions
    #[test]
    fn prop_ids_strictly_increasing(
        drafts in proptest::collection::vec((draft_strategy(), any::<bool>()), 1..20),
    ) {
        let ledger = test_ledger();
        let producer = PrincipalId::new("producer");

        let mut minted = Vec::new();
        for (draft, delete_after) in drafts {
            let id = ledger.create_record(&producer, 1, draft).unwrap();
            minted.push(id);
            if delete_after {
                ledger.delete_record(&producer, id).unwrap();
            }
        }

        for pair in minted.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    /// Property: a rejected foreign mutation leaves the record unchanged
    #[test]
    fn prop_foreign_mutation_leaves_record_unchanged(
        original in draft_strategy(),
        attempted in draft_strategy(),
    ) {
        let ledger = test_ledger();
        let producer = PrincipalId::new("producer");
        let intruder = PrincipalId::new("intruder");

        let id = ledger.create_record(&producer, 1, original).unwrap();
        let before = ledger.get_record(&producer, id).unwrap();

        prop_assert!(matches!(
            ledger.modify_record(&intruder, id, attempted.clone()),
            Err(Error::OwnershipMismatch)
        ));
        prop_assert!(matches!(
            ledger.append_labels(&intruder, id, &attempted.labels),
            Err(Error::OwnershipMismatch)
        ));
        prop_assert!(matches!(
            ledger.delete_record(&intruder, id),
            Err(Error::OwnershipMismatch)
        ));
        prop_assert!(matches!(
            ledger.transfer_ownership(&intruder, id, intruder.clone()),
            Err(Error::OwnershipMismatch)
        ));

        prop_assert_eq!(ledger.get_record(&producer, id).unwrap(), before);
    }

    /// Property: appending labels preserves the original prefix in order
    #[test]
    fn prop_append_preserves_prefix(
        draft in draft_strategy(),
        extra in proptest::collection::vec("[a-z0-9-]{1,32}", 1..=10),
    ) {
        let ledger = test_ledger();
        let producer = PrincipalId::new("producer");

        let original = draft.labels.clone();
        let id = ledger.create_record(&producer, 1, draft).unwrap();

        match ledger.append_labels(&producer, id, &extra) {
            Ok(combined) => {
                prop_assert!(original.len() + extra.len() <= 10);
                prop_assert_eq!(&combined[..original.len()], &original[..]);
                prop_assert_eq!(&combined[original.len()..], &extra[..]);
            }
            Err(Error::LabelFormat(_)) => {
                // Only the count bound can fail here; the record is untouched.
                prop_assert!(original.len() + extra.len() > 10);
                let record = ledger.get_record(&producer, id).unwrap();
                prop_assert_eq!(record.labels, original);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// Property: verification age is the height delta for any later height
    #[test]
    fn prop_verification_age(
        draft in draft_strategy(),
        creation_height in 0u64..1_000_000,
        age in 0u64..1_000_000,
    ) {
        let ledger = test_ledger();
        let producer = PrincipalId::new("producer");

        let id = ledger.create_record(&producer, creation_height, draft).unwrap();
        let result = ledger
            .verify_authenticity(&producer, creation_height + age, id, &producer)
            .unwrap();

        prop_assert!(result.is_authentic);
        prop_assert_eq!(result.ledger_age, age);
        prop_assert_eq!(result.is_authentic, result.producer_match);
    }
}
