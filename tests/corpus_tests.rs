//! Corpus-as-data properties over the migration set.
//!
//! These run without a database: they check the ordering, naming, and
//! reversibility bookkeeping that the runner's contract depends on.

use collective_migrations::migration::Migrator;
use collective_migrations::migration::reversibility::{self, Reversibility, TAGGED};
use sea_orm_migration::prelude::*;

fn unit_names() -> Vec<String> {
    Migrator::migrations()
        .iter()
        .map(|m| m.name().to_owned())
        .collect()
}

/// Every unit name is unique; the ledger is keyed by name.
#[test]
fn test_unit_names_are_unique() {
    let names = unit_names();
    for (i, name) in names.iter().enumerate() {
        assert!(
            !names.iter().skip(i + 1).any(|other| other == name),
            "duplicate unit name {}",
            name
        );
    }
}

/// Registration order matches lexicographic (and therefore chronological)
/// order, so the runner never applies a unit before its predecessors.
#[test]
fn test_unit_names_sort_chronologically() {
    let names = unit_names();
    for pair in names.windows(2) {
        assert!(
            pair[0] < pair[1],
            "{} is registered after {} but does not sort after it",
            pair[1],
            pair[0]
        );
    }
}

/// Every unit carries a parseable mYYYYMMDD_HHMMSS_ timestamp prefix.
#[test]
fn test_unit_names_carry_timestamp_prefix() {
    for name in unit_names() {
        let bytes = name.as_bytes();
        assert!(name.len() > 17, "{} is too short for a timestamp prefix", name);
        assert_eq!(bytes[0], b'm', "{} does not start with 'm'", name);
        assert!(
            name[1..9].chars().all(|c| c.is_ascii_digit()),
            "{} lacks a date component",
            name
        );
        assert_eq!(bytes[9], b'_', "{} lacks a date separator", name);
        assert!(
            name[10..16].chars().all(|c| c.is_ascii_digit()),
            "{} lacks a time component",
            name
        );
        assert_eq!(bytes[16], b'_', "{} lacks a description separator", name);

        // Sanity-check the date digits so a typo'd month/day cannot slip in.
        let month: u32 = name[5..7].parse().unwrap();
        let day: u32 = name[7..9].parse().unwrap();
        assert!((1..=12).contains(&month), "{} has month {}", name, month);
        assert!((1..=31).contains(&day), "{} has day {}", name, day);
    }
}

/// Every tagged (non-reversible) name refers to a real unit. A stale tag
/// would make the runner warn about nothing or, worse, miss a real hazard.
#[test]
fn test_reversibility_tags_match_registered_units() {
    let names = unit_names();
    for (tagged, _) in TAGGED {
        assert!(
            names.iter().any(|name| name == tagged),
            "reversibility tag {} does not match any registered unit",
            tagged
        );
    }
}

/// The units preserved with broken down operations stay flagged as such.
#[test]
fn test_known_broken_downs_are_flagged() {
    for name in [
        "m20160905_171315_add_expense_notes",
        "m20161004_103245_add_mission_to_groups",
        "m20161102_134547_prune_disabled_applications",
    ] {
        assert!(
            matches!(reversibility::classify(name), Reversibility::BrokenDown(_)),
            "{} should be flagged as broken",
            name
        );
    }
}

/// The destructive units stay flagged as data-losing.
#[test]
fn test_destructive_units_are_flagged() {
    for name in [
        "m20160319_231916_rename_card_to_paymentmethod",
        "m20160401_093912_backfill_transaction_currency",
        "m20160419_174238_add_host_role",
        "m20160502_103451_drop_paykeys",
        "m20160801_153104_delete_orphan_transactions",
        "m20170203_142503_drop_card_number_columns",
    ] {
        assert!(
            matches!(reversibility::classify(name), Reversibility::DataLoss(_)),
            "{} should be flagged as data-losing",
            name
        );
    }
}
