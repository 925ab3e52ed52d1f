//! Reversibility classification for migration units.
//!
//! PostgreSQL cannot undo everything: enum values cannot be dropped, deleted
//! rows cannot be resurrected, and a recreated column comes back empty. Units
//! whose `down` cannot restore prior state are tagged here so tooling can warn
//! at revert time instead of silently trusting a no-op.

/// How faithfully a unit's `down` restores the state its `up` replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reversibility {
    /// `down` restores both schema shape and data.
    Reversible,
    /// `down` is a documented no-op, or restores schema shape without the
    /// data values the forward operation discarded.
    DataLoss(&'static str),
    /// `down` is a known authoring mistake preserved as-is; running it will
    /// not undo the forward operation and may fail outright.
    BrokenDown(&'static str),
}

impl Reversibility {
    /// True when reverting this unit restores the previous state in full.
    pub fn is_clean(&self) -> bool {
        matches!(self, Reversibility::Reversible)
    }
}

/// Units whose `down` does not fully restore prior state.
///
/// Every name here must match a unit registered with the Migrator; the
/// corpus tests enforce that.
pub const TAGGED: &[(&str, Reversibility)] = &[
    (
        "m20160319_231916_rename_card_to_paymentmethod",
        Reversibility::DataLoss("restores the GroupId column but not the values it held"),
    ),
    (
        "m20160401_093912_backfill_transaction_currency",
        Reversibility::DataLoss("backfilled currency values cannot be told apart from pre-existing ones"),
    ),
    (
        "m20160419_174238_add_host_role",
        Reversibility::DataLoss("PostgreSQL cannot drop a value from an enum type"),
    ),
    (
        "m20160502_103451_drop_paykeys",
        Reversibility::DataLoss("recreates the Paykeys table without its rows"),
    ),
    (
        "m20160801_153104_delete_orphan_transactions",
        Reversibility::DataLoss("deleted transaction rows cannot be restored"),
    ),
    (
        "m20160905_171315_add_expense_notes",
        Reversibility::BrokenDown("down drops the notes column from Donations instead of Expenses"),
    ),
    (
        "m20161004_103245_add_mission_to_groups",
        Reversibility::BrokenDown("down re-adds the mission column instead of dropping it"),
    ),
    (
        "m20161102_134547_prune_disabled_applications",
        Reversibility::BrokenDown("down contains `DELETE *`, which is not valid SQL"),
    ),
    (
        "m20170203_142503_drop_card_number_columns",
        Reversibility::DataLoss("recreates the card number columns without their values"),
    ),
];

/// Classify a unit by its ledger name. Unlisted units are fully reversible.
pub fn classify(name: &str) -> Reversibility {
    TAGGED
        .iter()
        .find(|(tagged, _)| *tagged == name)
        .map(|(_, r)| *r)
        .unwrap_or(Reversibility::Reversible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_units_are_reversible() {
        assert_eq!(
            classify("m20160314_173143_create_users"),
            Reversibility::Reversible
        );
    }

    #[test]
    fn test_tagged_units_are_not_clean() {
        for (name, _) in TAGGED {
            assert!(!classify(name).is_clean(), "{} should not be clean", name);
        }
    }

    #[test]
    fn test_tagged_names_are_unique() {
        for (i, (name, _)) in TAGGED.iter().enumerate() {
            assert!(
                !TAGGED.iter().skip(i + 1).any(|(other, _)| other == name),
                "duplicate tag for {}",
                name
            );
        }
    }
}
