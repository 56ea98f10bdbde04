use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{NewTransaction, Transaction, TransactionId, TransactionKind};

/// In-memory transaction list, most recent first.
///
/// Only `add` and `delete` mutate it; everything else reads
/// [`TransactionStore::transactions`] as a snapshot.
#[derive(Debug, Default)]
pub(crate) struct TransactionStore {
    transactions: Vec<Transaction>,
    last_issued_id: u64,
}

impl TransactionStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A store holding the five example records shown on first launch.
    pub(crate) fn seeded() -> Self {
        let seed = [
            ("1", TransactionKind::Income, 3000, "Salary", "Monthly salary", 1),
            ("2", TransactionKind::Expense, 800, "Rent", "Monthly rent", 2),
            ("3", TransactionKind::Expense, 200, "Groceries", "Weekly groceries", 3),
            ("4", TransactionKind::Expense, 150, "Utilities", "Electricity bill", 4),
            ("5", TransactionKind::Income, 500, "Freelance", "Website project", 5),
        ];

        let transactions = seed
            .into_iter()
            .filter_map(|(id, kind, amount, category, description, day)| {
                Some(Transaction {
                    id: TransactionId::new(id),
                    kind,
                    amount: Decimal::from(amount),
                    category: category.into(),
                    description: description.into(),
                    date: NaiveDate::from_ymd_opt(2024, 1, day)?,
                })
            })
            .collect();

        Self {
            transactions,
            last_issued_id: 0,
        }
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn len(&self) -> usize {
        self.transactions.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Records a transaction at the front of the list and returns its new id.
    ///
    /// `NewTransaction` has already been validated, so this cannot fail.
    pub(crate) fn add(&mut self, new: NewTransaction) -> TransactionId {
        self.add_at(new, chrono::Utc::now().timestamp_millis())
    }

    fn add_at(&mut self, new: NewTransaction, now_millis: i64) -> TransactionId {
        let id = self.next_id(now_millis);
        tracing::info!(
            id = %id,
            kind = %new.kind(),
            amount = %new.amount(),
            category = new.category(),
            "transaction added"
        );
        self.transactions.insert(0, new.into_transaction(id.clone()));
        id
    }

    /// Removes the transaction with `id`. Unknown ids are ignored and
    /// return `false`.
    pub(crate) fn delete(&mut self, id: &TransactionId) -> bool {
        match self.transactions.iter().position(|t| &t.id == id) {
            Some(idx) => {
                let removed = self.transactions.remove(idx);
                tracing::info!(id = %removed.id, category = %removed.category, "transaction deleted");
                true
            }
            None => {
                tracing::debug!(id = %id, "delete ignored, no such transaction");
                false
            }
        }
    }

    /// Millisecond timestamps, bumped past the last issued value and past
    /// every numeric id in the store, so two adds in the same millisecond
    /// still get distinct ids.
    fn next_id(&mut self, now_millis: i64) -> TransactionId {
        let highest_stored = self
            .transactions
            .iter()
            .filter_map(|t| t.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        let candidate = u64::try_from(now_millis)
            .unwrap_or(0)
            .max(self.last_issued_id.saturating_add(1))
            .max(highest_stored.saturating_add(1));
        self.last_issued_id = candidate;
        TransactionId::new(candidate.to_string())
    }
}

#[cfg(test)]
mod tests;
