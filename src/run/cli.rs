use anyhow::Result;
use rust_decimal::Decimal;
use std::fmt::Write;

use crate::models::BudgetLimits;
use crate::store::TransactionStore;
use crate::summary::{self, BudgetTier, DashboardSummary};
use crate::ui::screens::budgets::headroom_text;
use crate::ui::screens::transactions::signed_amount;
use crate::ui::util::{format_amount, format_date, truncate};

pub(crate) fn as_cli(
    args: &[String],
    store: &TransactionStore,
    limits: &dyn BudgetLimits,
    currency: &str,
) -> Result<()> {
    let output = match args[1].as_str() {
        "summary" | "s" => summary_report(store, limits, currency),
        "budgets" | "b" => budgets_report(store, limits, currency),
        "transactions" | "t" => transactions_report(store, currency),
        "--help" | "-h" | "help" => usage(),
        "--version" | "-V" | "version" => format!("budgetdash {}\n", env!("CARGO_PKG_VERSION")),
        other => {
            print!("{}", usage());
            anyhow::bail!("Unknown command: {other}");
        }
    };
    print!("{output}");
    Ok(())
}

fn usage() -> String {
    [
        "BudgetDash — in-memory personal finance dashboard",
        "",
        "Usage: budgetdash [--empty] [--log-file <path>] [command]",
        "",
        "Commands:",
        "  (none)                        Launch interactive dashboard",
        "  summary                       Print income, expenses and spending by category",
        "  budgets                       Print spending against each budget limit",
        "  transactions                  List transactions, most recent first",
        "  --help, -h                    Show this help",
        "  --version, -V                 Show version",
        "",
        "Environment:",
        "  BUDGETDASH_CURRENCY           Currency symbol (default: $)",
        "  RUST_LOG                      Log filter (default: budgetdash=info)",
        "",
    ]
    .join("\n")
}

pub(crate) fn summary_report(
    store: &TransactionStore,
    limits: &dyn BudgetLimits,
    currency: &str,
) -> String {
    let txns = store.transactions();
    let dash = DashboardSummary::compute(txns, limits);
    let totals = dash.totals;

    let mut out = String::new();
    let _ = writeln!(out, "BudgetDash — {} transactions", txns.len());
    let _ = writeln!(out, "{}", "─".repeat(40));
    let _ = writeln!(out, "  Income:     {}", format_amount(totals.income, currency));
    let _ = writeln!(out, "  Expenses:   {}", format_amount(totals.expenses, currency));
    let _ = writeln!(out, "  Net:        {}", format_amount(totals.net, currency));

    let over = dash
        .budgets
        .iter()
        .filter(|b| b.tier == BudgetTier::Over)
        .count();
    if over > 0 {
        let _ = writeln!(out, "  Over budget: {over} categor{}", if over == 1 { "y" } else { "ies" });
    }

    let _ = writeln!(out);
    if dash.spending.is_empty() {
        let _ = writeln!(out, "No expense data to display");
        return out;
    }

    let spent = dash.spending.total();
    let _ = writeln!(out, "Spending by Category:");
    for entry in &dash.chart {
        let share = entry.total / spent * Decimal::ONE_HUNDRED;
        let _ = writeln!(
            out,
            "  {:<24} {:>12} {:>7}",
            truncate(&entry.category, 24),
            format_amount(entry.total, currency),
            format!("{:.1}%", share),
        );
    }
    out
}

pub(crate) fn budgets_report(
    store: &TransactionStore,
    limits: &dyn BudgetLimits,
    currency: &str,
) -> String {
    let spending = summary::expenses_by_category(store.transactions());
    let statuses = summary::budget_status(&spending, limits);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<16} {:>12} {:>12} {:>7}  {:<8} Headroom",
        "Category", "Spent", "Limit", "Used", "Status"
    );
    let _ = writeln!(out, "{}", "─".repeat(80));
    for status in &statuses {
        let marker = if status.tier == BudgetTier::Over { "!" } else { "" };
        let _ = writeln!(
            out,
            "{:<16} {:>12} {:>12} {:>7}  {:<8} {}",
            truncate(&status.category, 16),
            format_amount(status.spent, currency),
            format_amount(status.limit, currency),
            format!("{:.1}%", status.percentage),
            format!("{}{marker}", status.tier),
            headroom_text(status, currency),
        );
    }
    out
}

pub(crate) fn transactions_report(store: &TransactionStore, currency: &str) -> String {
    if store.is_empty() {
        return "No transactions\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<14} {:<8} {:<30} {:<16} {:>12}",
        "Date", "Type", "Description", "Category", "Amount"
    );
    let _ = writeln!(out, "{}", "─".repeat(84));
    for txn in store.transactions() {
        let _ = writeln!(
            out,
            "{:<14} {:<8} {:<30} {:<16} {:>12}",
            format_date(txn.date),
            txn.kind,
            truncate(&txn.description, 30),
            truncate(&txn.category, 16),
            signed_amount(txn, currency),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::models::StaticBudgetTable;

    #[test]
    fn test_summary_report_seeded() {
        let out = summary_report(
            &TransactionStore::seeded(),
            &StaticBudgetTable::default(),
            "$",
        );
        assert!(out.contains("Income:     $3,500.00"));
        assert!(out.contains("Expenses:   $1,150.00"));
        assert!(out.contains("Net:        $2,350.00"));
        let rent = out.find("Rent").unwrap();
        let groceries = out.find("Groceries").unwrap();
        let utilities = out.find("Utilities").unwrap();
        assert!(rent < groceries && groceries < utilities);
        let rent_line = out.lines().find(|l| l.trim_start().starts_with("Rent")).unwrap();
        assert!(rent_line.contains("69.6%"));
        assert!(!out.contains("Over budget"));
    }

    #[test]
    fn test_summary_report_empty() {
        let out = summary_report(&TransactionStore::new(), &StaticBudgetTable::default(), "$");
        assert!(out.contains("Net:        $0.00"));
        assert!(out.contains("No expense data to display"));
    }

    #[test]
    fn test_budgets_report_rows() {
        let out = budgets_report(
            &TransactionStore::seeded(),
            &StaticBudgetTable::default(),
            "$",
        );
        let rent_line = out.lines().find(|l| l.starts_with("Rent")).unwrap();
        assert!(rent_line.contains("$800.00"));
        assert!(rent_line.contains("$1,000.00"));
        assert!(rent_line.contains("80.0%"));
        assert!(rent_line.contains("good"));
        assert!(rent_line.contains("$200.00 remaining"));
        // Header, rule and one row per budgeted category.
        assert_eq!(out.lines().count(), 10);
    }

    #[test]
    fn test_transactions_report_order() {
        let out = transactions_report(&TransactionStore::seeded(), "€");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[2].contains("Jan 1, 2024"));
        assert!(lines[2].contains("+€3,000.00"));
        assert!(lines[3].contains("-€800.00"));
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_transactions_report_empty() {
        assert_eq!(
            transactions_report(&TransactionStore::new(), "$"),
            "No transactions\n"
        );
    }
}
