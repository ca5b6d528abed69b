//! Scripted end-to-end scenario binary

use harvest_ledger::{Config, Ledger, PrincipalId, RecordDraft};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting AgroTrace harvest ledger demo");

    // Load configuration
    let config = Config::from_env()?;
    let ledger = Ledger::new(config)?;

    let alice = PrincipalId::new("farmer-alice");
    let bob = PrincipalId::new("farmer-bob");

    // Create a harvest entry at height 100.
    let id = ledger.create_record(
        &alice,
        100,
        RecordDraft::new("Wheat", 500, "Field A", vec!["organic".to_string()]),
    )?;
    tracing::info!(record_index = id, "Created harvest record");

    // Revise the yield after the weigh-in.
    ledger.modify_record(
        &alice,
        id,
        RecordDraft::new(
            "Wheat",
            600,
            "Field A",
            vec!["organic".to_string(), "2024".to_string()],
        ),
    )?;

    // A foreign caller is turned away.
    if let Err(err) = ledger.modify_record(&bob, id, RecordDraft::new("Rye", 1, "Elsewhere", vec!["x".to_string()])) {
        tracing::info!(%err, "Foreign mutation rejected as expected");
    }

    // Hand the record over and verify its origin.
    ledger.transfer_ownership(&alice, id, bob.clone())?;
    let verdict = ledger.verify_authenticity(&bob, 110, id, &bob)?;
    tracing::info!(
        is_authentic = verdict.is_authentic,
        ledger_age = verdict.ledger_age,
        "Verification complete"
    );

    tracing::info!("Demo finished");
    Ok(())
}
