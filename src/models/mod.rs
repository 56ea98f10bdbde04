mod budget;
mod transaction;

pub use budget::{Budget, BudgetLimits, StaticBudgetTable};
pub use transaction::{
    NewTransaction, Transaction, TransactionError, TransactionId, TransactionKind, MAX_AMOUNT,
};

#[cfg(test)]
mod tests;
