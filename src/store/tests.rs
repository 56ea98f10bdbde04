#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{NewTransaction, Transaction, TransactionKind};

fn find<'a>(store: &'a TransactionStore, id: &str) -> Option<&'a Transaction> {
    store.transactions().iter().find(|t| t.id.as_str() == id)
}

fn new_txn(kind: TransactionKind, amount: Decimal, category: &str) -> NewTransaction {
    NewTransaction::new(
        kind,
        amount,
        category,
        "Test",
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
    )
    .unwrap()
}

// ── Seed data ─────────────────────────────────────────────────

#[test]
fn test_seeded_store_has_five_records() {
    let store = TransactionStore::seeded();
    assert_eq!(store.len(), 5);
    let ids: Vec<&str> = store.transactions().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn test_seeded_store_contents() {
    let store = TransactionStore::seeded();
    let rent = find(&store, "2").unwrap();
    assert_eq!(rent.kind, TransactionKind::Expense);
    assert_eq!(rent.amount, dec!(800));
    assert_eq!(rent.category, "Rent");
    assert_eq!(rent.description, "Monthly rent");
    assert_eq!(rent.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
}

#[test]
fn test_new_store_is_empty() {
    let store = TransactionStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

// ── add ───────────────────────────────────────────────────────

#[test]
fn test_add_prepends() {
    let mut store = TransactionStore::seeded();
    let id = store.add(new_txn(TransactionKind::Expense, dec!(45), "Dining"));
    assert_eq!(store.len(), 6);
    assert_eq!(store.transactions()[0].id, id);
    assert_eq!(store.transactions()[0].category, "Dining");
    assert_eq!(store.transactions()[1].id.as_str(), "1");
}

#[test]
fn test_add_order_is_most_recent_first() {
    let mut store = TransactionStore::new();
    let first = store.add(new_txn(TransactionKind::Income, dec!(10), "Gift"));
    let second = store.add(new_txn(TransactionKind::Expense, dec!(5), "Dining"));
    let ids: Vec<&TransactionId> = store.transactions().iter().map(|t| &t.id).collect();
    assert_eq!(ids, vec![&second, &first]);
}

#[test]
fn test_ids_unique_within_same_millisecond() {
    let mut store = TransactionStore::new();
    let a = store.add_at(new_txn(TransactionKind::Expense, dec!(1), "Dining"), 1_700_000_000_000);
    let b = store.add_at(new_txn(TransactionKind::Expense, dec!(2), "Dining"), 1_700_000_000_000);
    let c = store.add_at(new_txn(TransactionKind::Expense, dec!(3), "Dining"), 1_699_999_999_999);
    assert_eq!(a.as_str(), "1700000000000");
    assert_eq!(b.as_str(), "1700000000001");
    assert_eq!(c.as_str(), "1700000000002");
}

#[test]
fn test_ids_skip_existing_seed_ids() {
    let mut store = TransactionStore::seeded();
    // A clock stuck at the epoch would otherwise collide with the seed ids.
    let id = store.add_at(new_txn(TransactionKind::Income, dec!(1), "Gift"), 0);
    assert_eq!(id.as_str(), "6");
}

#[test]
fn test_ids_pass_highest_stored_id() {
    let mut store = TransactionStore::new();
    let first = store.add_at(new_txn(TransactionKind::Expense, dec!(1), "Dining"), 5_000);
    store.last_issued_id = 0;
    let second = store.add_at(new_txn(TransactionKind::Expense, dec!(2), "Dining"), 10);
    assert_eq!(first.as_str(), "5000");
    assert_eq!(second.as_str(), "5001");
}

#[test]
fn test_ids_ignore_non_numeric_ids() {
    let mut store = TransactionStore::seeded();
    store.transactions[0].id = TransactionId::new("imported-salary");
    let id = store.add_at(new_txn(TransactionKind::Income, dec!(1), "Gift"), 0);
    assert_eq!(id.as_str(), "6");
}

// ── delete ────────────────────────────────────────────────────

#[test]
fn test_delete_existing() {
    let mut store = TransactionStore::seeded();
    assert!(store.delete(&TransactionId::new("3")));
    assert_eq!(store.len(), 4);
    assert!(find(&store, "3").is_none());
    let ids: Vec<&str> = store.transactions().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "4", "5"]);
}

#[test]
fn test_delete_unknown_is_noop() {
    let mut store = TransactionStore::seeded();
    let before = store.transactions().to_vec();
    assert!(!store.delete(&TransactionId::new("does-not-exist")));
    assert_eq!(store.transactions(), before.as_slice());
}

#[test]
fn test_delete_twice() {
    let mut store = TransactionStore::seeded();
    assert!(store.delete(&TransactionId::new("1")));
    assert!(!store.delete(&TransactionId::new("1")));
    assert_eq!(store.len(), 4);
}

#[test]
fn test_delete_added_transaction() {
    let mut store = TransactionStore::new();
    let id = store.add(new_txn(TransactionKind::Expense, dec!(20), "Shopping"));
    assert!(store.delete(&id));
    assert!(store.is_empty());
}
