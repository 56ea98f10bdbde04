#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

fn make_txn(kind: TransactionKind, amount: Decimal) -> Transaction {
    NewTransaction::new(kind, amount, "Test", "Test", day(15))
        .unwrap()
        .into_transaction(TransactionId::new("t1"))
}

// ── Transaction ───────────────────────────────────────────────

#[test]
fn test_income() {
    let txn = make_txn(TransactionKind::Income, dec!(100.00));
    assert!(txn.is_income());
    assert!(!txn.is_expense());
}

#[test]
fn test_expense() {
    let txn = make_txn(TransactionKind::Expense, dec!(50.00));
    assert!(!txn.is_income());
    assert!(txn.is_expense());
}

#[test]
fn test_into_transaction_keeps_fields() {
    let txn = make_txn(TransactionKind::Expense, dec!(12.34));
    assert_eq!(txn.id.as_str(), "t1");
    assert_eq!(txn.category, "Test");
    assert_eq!(txn.date, day(15));
    assert_eq!(txn.amount, dec!(12.34));
}

#[test]
fn test_small_amount_accepted() {
    let new = NewTransaction::new(TransactionKind::Expense, dec!(0.01), "Dining", "", day(1));
    assert!(new.is_ok());
}

// ── Validation ────────────────────────────────────────────────

#[test]
fn test_zero_amount_rejected() {
    let err = NewTransaction::new(TransactionKind::Income, Decimal::ZERO, "Salary", "", day(1))
        .unwrap_err();
    assert_eq!(err, TransactionError::NonPositiveAmount(Decimal::ZERO));
}

#[test]
fn test_negative_amount_rejected() {
    let err = NewTransaction::new(TransactionKind::Expense, dec!(-5), "Rent", "", day(1))
        .unwrap_err();
    assert_eq!(err, TransactionError::NonPositiveAmount(dec!(-5)));
    assert_eq!(err.to_string(), "amount must be positive, got -5");
}

#[test]
fn test_amount_above_ceiling_rejected() {
    let huge = MAX_AMOUNT + dec!(0.01);
    let err = NewTransaction::new(TransactionKind::Expense, huge, "Rent", "", day(1)).unwrap_err();
    assert_eq!(err, TransactionError::AmountTooLarge(huge));
    assert_eq!(
        err.to_string(),
        "amount must not exceed 1,000,000,000,000, got 1000000000000.01"
    );

    let err = NewTransaction::new(TransactionKind::Income, Decimal::MAX, "Salary", "", day(1))
        .unwrap_err();
    assert_eq!(err, TransactionError::AmountTooLarge(Decimal::MAX));
}

#[test]
fn test_amount_at_ceiling_accepted() {
    assert_eq!(MAX_AMOUNT, dec!(1000000000000));
    let new = NewTransaction::new(TransactionKind::Income, MAX_AMOUNT, "Salary", "", day(1));
    assert!(new.is_ok());
}

#[test]
fn test_blank_category_rejected() {
    let err = NewTransaction::new(TransactionKind::Expense, dec!(5), "   ", "", day(1))
        .unwrap_err();
    assert_eq!(err, TransactionError::EmptyCategory);
}

#[test]
fn test_category_is_trimmed() {
    let new =
        NewTransaction::new(TransactionKind::Expense, dec!(5), " Dining ", "", day(1)).unwrap();
    assert_eq!(new.category(), "Dining");
}

// ── TransactionKind ───────────────────────────────────────────

#[test]
fn test_kind_parse() {
    assert_eq!(TransactionKind::parse("income"), Some(TransactionKind::Income));
    assert_eq!(TransactionKind::parse("INCOME"), Some(TransactionKind::Income));
    assert_eq!(TransactionKind::parse("expense"), Some(TransactionKind::Expense));
    assert_eq!(TransactionKind::parse("exp"), Some(TransactionKind::Expense));
    assert_eq!(TransactionKind::parse("transfer"), None);
}

#[test]
fn test_kind_display() {
    assert_eq!(format!("{}", TransactionKind::Income), "income");
    assert_eq!(format!("{}", TransactionKind::Expense), "expense");
}

// ── Budget table ──────────────────────────────────────────────

#[test]
fn test_default_table_order() {
    let table = StaticBudgetTable::default();
    let names: Vec<&str> = table.budgets().iter().map(|b| b.category.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Rent",
            "Groceries",
            "Utilities",
            "Transportation",
            "Entertainment",
            "Dining",
            "Shopping",
            "Healthcare",
        ]
    );
}

#[test]
fn test_default_table_limits() {
    let table = StaticBudgetTable::default();
    let limits: Vec<Decimal> = table.budgets().iter().map(|b| b.limit_amount).collect();
    assert_eq!(
        limits,
        vec![
            dec!(1000),
            dec!(300),
            dec!(200),
            dec!(150),
            dec!(100),
            dec!(200),
            dec!(150),
            dec!(100),
        ]
    );
}

#[test]
fn test_custom_table() {
    let table = StaticBudgetTable::new(vec![Budget::new("Pets", dec!(75))]);
    assert_eq!(table.budgets().len(), 1);
    assert_eq!(table.budgets()[0], Budget::new("Pets", dec!(75)));
}
