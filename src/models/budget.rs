use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Budget {
    pub category: String,
    pub limit_amount: Decimal,
}

impl Budget {
    pub fn new(category: impl Into<String>, limit_amount: Decimal) -> Self {
        Self {
            category: category.into(),
            limit_amount,
        }
    }
}

/// Source of per-category spending limits.
///
/// Implementations must yield budgets in a stable order; the budget view is
/// laid out in exactly that order.
pub trait BudgetLimits {
    fn budgets(&self) -> &[Budget];
}

/// Monthly limits compiled into the binary.
const DEFAULT_LIMITS: &[(&str, i64)] = &[
    ("Rent", 1000),
    ("Groceries", 300),
    ("Utilities", 200),
    ("Transportation", 150),
    ("Entertainment", 100),
    ("Dining", 200),
    ("Shopping", 150),
    ("Healthcare", 100),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticBudgetTable {
    budgets: Vec<Budget>,
}

impl StaticBudgetTable {
    pub fn new(budgets: Vec<Budget>) -> Self {
        Self { budgets }
    }
}

impl Default for StaticBudgetTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_LIMITS
                .iter()
                .map(|(name, limit)| Budget::new(*name, Decimal::from(*limit)))
                .collect(),
        )
    }
}

impl BudgetLimits for StaticBudgetTable {
    fn budgets(&self) -> &[Budget] {
        &self.budgets
    }
}
