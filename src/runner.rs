//! Thin contract surface over the SeaORM migrator.
//!
//! Discovery, ordering, and ledger bookkeeping are delegated to
//! `sea-orm-migration`; this module adds the operator-facing behavior: log
//! each run, and warn loudly before reverting any unit whose `down` cannot
//! restore the state its `up` replaced.

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::migration::Migrator;
use crate::migration::reversibility::{self, Reversibility};

/// Apply every not-yet-applied unit, in order.
///
/// Aborts on the first failure; the failed unit is not recorded in the
/// ledger and subsequent units are not attempted.
pub async fn apply_pending(db: &DatabaseConnection) -> AppResult<()> {
    Migrator::install(db).await?;

    let pending = Migrator::get_pending_migrations(db).await?;
    if pending.is_empty() {
        info!("No pending migrations");
        return Ok(());
    }

    info!("{} migration(s) pending", pending.len());
    for unit in &pending {
        info!("Will apply {}", unit.name());
    }

    Migrator::up(db, None)
        .await
        .map_err(|e| AppError::Migration(e.to_string()))?;

    info!("All pending migrations applied");
    Ok(())
}

/// Revert the most recently applied `steps` units, newest first.
///
/// Units tagged as data-losing or broken are still reverted (the ledger must
/// stay consistent with what was attempted), but each one is called out
/// before anything runs so the operator knows what will not come back.
pub async fn revert_last(db: &DatabaseConnection, steps: u32) -> AppResult<()> {
    Migrator::install(db).await?;

    let applied = Migrator::get_applied_migrations(db).await?;
    if applied.is_empty() {
        info!("Nothing to revert");
        return Ok(());
    }

    let steps = steps.min(applied.len() as u32);
    for unit in applied.iter().rev().take(steps as usize) {
        match reversibility::classify(unit.name()) {
            Reversibility::Reversible => info!("Will revert {}", unit.name()),
            Reversibility::DataLoss(reason) => {
                warn!("Reverting {} cannot restore data: {}", unit.name(), reason);
            }
            Reversibility::BrokenDown(note) => {
                warn!("Reverting {} is a known authoring mistake: {}", unit.name(), note);
            }
        }
    }

    Migrator::down(db, Some(steps))
        .await
        .map_err(|e| AppError::Migration(e.to_string()))?;

    info!("Reverted {} migration(s)", steps);
    Ok(())
}

/// Log the applied and pending unit lists.
pub async fn status(db: &DatabaseConnection) -> AppResult<()> {
    Migrator::install(db).await?;

    let applied = Migrator::get_applied_migrations(db).await?;
    let pending = Migrator::get_pending_migrations(db).await?;

    info!("{} applied, {} pending", applied.len(), pending.len());
    for unit in &applied {
        info!("applied: {}", unit.name());
    }
    for unit in &pending {
        info!("pending: {}", unit.name());
    }

    Ok(())
}

/// Drop everything and reapply the full corpus. Development only.
pub async fn fresh(db: &DatabaseConnection) -> AppResult<()> {
    Migrator::fresh(db)
        .await
        .map_err(|e| AppError::Migration(e.to_string()))?;

    info!("Database recreated from scratch");
    Ok(())
}
