//! Dashboard figures derived from a transaction snapshot.
//!
//! Everything here is a pure function of its inputs. Callers re-run the
//! whole set after every store mutation instead of patching cached results.
//! Sums saturate at `Decimal::MAX` rather than overflow.

use rust_decimal::Decimal;

use crate::models::{BudgetLimits, Transaction, TransactionKind};

/// Spending above this share of a limit (in percent) is flagged as a warning.
const WARNING_PERCENT: Decimal = Decimal::from_parts(80, 0, 0, false, 0);
const FULL_PERCENT: Decimal = Decimal::ONE_HUNDRED;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Totals {
    pub(crate) income: Decimal,
    pub(crate) expenses: Decimal,
    pub(crate) net: Decimal,
}

pub(crate) fn compute_totals(transactions: &[Transaction]) -> Totals {
    let sum_of = |kind: TransactionKind| -> Decimal {
        transactions
            .iter()
            .filter(|t| t.kind == kind)
            .fold(Decimal::ZERO, |acc, t| acc.saturating_add(t.amount))
    };

    let income = sum_of(TransactionKind::Income);
    let expenses = sum_of(TransactionKind::Expense);
    Totals {
        income,
        expenses,
        net: income.saturating_sub(expenses),
    }
}

/// Expense sums keyed by category, in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct CategorySpending {
    entries: Vec<(String, Decimal)>,
}

impl CategorySpending {
    pub(crate) fn get(&self, category: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, amount)| *amount)
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> &[(String, Decimal)] {
        &self.entries
    }

    pub(crate) fn total(&self) -> Decimal {
        self.entries
            .iter()
            .fold(Decimal::ZERO, |acc, (_, amount)| acc.saturating_add(*amount))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn add(&mut self, category: &str, amount: Decimal) {
        match self.entries.iter_mut().find(|(name, _)| name == category) {
            Some((_, sum)) => *sum = sum.saturating_add(amount),
            None => self.entries.push((category.to_string(), amount)),
        }
    }
}

pub(crate) fn expenses_by_category(transactions: &[Transaction]) -> CategorySpending {
    let mut spending = CategorySpending::default();
    for txn in transactions.iter().filter(|t| t.is_expense()) {
        spending.add(&txn.category, txn.amount);
    }
    spending
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BudgetTier {
    Good,
    Warning,
    Over,
}

impl BudgetTier {
    fn for_percentage(percentage: Decimal) -> Self {
        if percentage > FULL_PERCENT {
            Self::Over
        } else if percentage > WARNING_PERCENT {
            Self::Warning
        } else {
            Self::Good
        }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Over => "over",
        }
    }
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BudgetStatus {
    pub(crate) category: String,
    pub(crate) spent: Decimal,
    pub(crate) limit: Decimal,
    /// Share of the limit used, capped at 100 for progress bars.
    pub(crate) percentage: Decimal,
    pub(crate) tier: BudgetTier,
}

impl BudgetStatus {
    fn new(category: &str, spent: Decimal, limit: Decimal) -> Self {
        let (percentage, tier) = if limit.is_zero() {
            if spent > Decimal::ZERO {
                (FULL_PERCENT, BudgetTier::Over)
            } else {
                (Decimal::ZERO, BudgetTier::Good)
            }
        } else {
            match spent
                .checked_div(limit)
                .and_then(|ratio| ratio.checked_mul(FULL_PERCENT))
            {
                Some(raw) => (raw.min(FULL_PERCENT), BudgetTier::for_percentage(raw)),
                // Too large to represent, so far beyond the limit.
                None => (FULL_PERCENT, BudgetTier::Over),
            }
        };

        Self {
            category: category.to_string(),
            spent,
            limit,
            percentage,
            tier,
        }
    }

    /// Amount left before the limit is reached; zero once over.
    pub(crate) fn remaining(&self) -> Decimal {
        (self.limit - self.spent).max(Decimal::ZERO)
    }

    /// Amount spent beyond the limit; zero while within it.
    pub(crate) fn overage(&self) -> Decimal {
        (self.spent - self.limit).max(Decimal::ZERO)
    }
}

/// One status per budgeted category, in budget-table order. Spending in
/// categories without a budget is not reported here.
pub(crate) fn budget_status(
    spending: &CategorySpending,
    limits: &dyn BudgetLimits,
) -> Vec<BudgetStatus> {
    limits
        .budgets()
        .iter()
        .map(|budget| {
            let spent = spending.get(&budget.category).unwrap_or(Decimal::ZERO);
            BudgetStatus::new(&budget.category, spent, budget.limit_amount)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryTotal {
    pub(crate) category: String,
    pub(crate) total: Decimal,
}

/// Expense totals per category, largest first. Equal totals keep the order
/// in which their categories first appeared.
pub(crate) fn category_totals_for_chart(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = expenses_by_category(transactions)
        .entries
        .into_iter()
        .map(|(category, total)| CategoryTotal { category, total })
        .collect();
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals
}

/// Everything the dashboard draws, computed in one pass over the store.
#[derive(Debug, Clone, Default)]
pub(crate) struct DashboardSummary {
    pub(crate) totals: Totals,
    pub(crate) spending: CategorySpending,
    pub(crate) budgets: Vec<BudgetStatus>,
    pub(crate) chart: Vec<CategoryTotal>,
}

impl DashboardSummary {
    pub(crate) fn compute(transactions: &[Transaction], limits: &dyn BudgetLimits) -> Self {
        let spending = expenses_by_category(transactions);
        let budgets = budget_status(&spending, limits);
        Self {
            totals: compute_totals(transactions),
            budgets,
            chart: category_totals_for_chart(transactions),
            spending,
        }
    }
}
