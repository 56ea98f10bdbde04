use chrono::{Local, NaiveDate};

use crate::models::{BudgetLimits, NewTransaction, Transaction, TransactionId};
use crate::store::TransactionStore;
use crate::summary::DashboardSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Transactions,
    Budgets,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Transactions, Self::Budgets]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Transactions => write!(f, "Transactions"),
            Self::Budgets => write!(f, "Budgets"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingAction {
    DeleteTransaction {
        id: TransactionId,
        description: String,
    },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) currency: String,
    /// Default date for transactions added without one.
    pub(crate) today: NaiveDate,

    store: TransactionStore,
    limits: Box<dyn BudgetLimits>,
    pub(crate) summary: DashboardSummary,

    // Transactions
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,

    // Budgets
    pub(crate) budget_index: usize,
    pub(crate) budget_scroll: usize,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(
        store: TransactionStore,
        limits: Box<dyn BudgetLimits>,
        currency: impl Into<String>,
    ) -> Self {
        let summary = DashboardSummary::compute(store.transactions(), limits.as_ref());
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            currency: currency.into(),
            today: Local::now().date_naive(),

            store,
            limits,
            summary,

            transaction_index: 0,
            transaction_scroll: 0,

            budget_index: 0,
            budget_scroll: 0,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        self.store.transactions()
    }

    pub(crate) fn selected_transaction(&self) -> Option<&Transaction> {
        self.store.transactions().get(self.transaction_index)
    }

    pub(crate) fn add_transaction(&mut self, new: NewTransaction) -> TransactionId {
        let id = self.store.add(new);
        // New rows land on top; move the cursor there.
        self.transaction_index = 0;
        self.transaction_scroll = 0;
        self.refresh();
        id
    }

    pub(crate) fn delete_transaction(&mut self, id: &TransactionId) -> bool {
        let removed = self.store.delete(id);
        self.refresh();
        removed
    }

    /// Recomputes every dashboard figure from the current store contents.
    pub(crate) fn refresh(&mut self) {
        self.summary = DashboardSummary::compute(self.store.transactions(), self.limits.as_ref());

        let len = self.store.len();
        if self.transaction_index >= len {
            self.transaction_index = len.saturating_sub(1);
        }
        if self.transaction_scroll > self.transaction_index {
            self.transaction_scroll = self.transaction_index;
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
