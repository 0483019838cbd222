use crate::model::{FinancialSummary, InventoryAnalytics, InventoryItem, Transaction, User};
use crate::store::LoadState;

pub mod analytics;
pub mod branches;
pub mod dashboard;
pub mod inventory;
pub mod reports;
pub mod transactions;
pub mod users;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of one view command. Only the sections the view
/// populates are rendered; `view_state` distinguishes a failed load from a
/// legitimately empty result.
#[derive(Debug)]
pub struct CmdResult {
    pub view_state: LoadState,
    pub transactions: Vec<Transaction>,
    pub inventory: Vec<InventoryItem>,
    pub summary: Option<FinancialSummary>,
    pub analytics: Option<InventoryAnalytics>,
    pub users: Vec<User>,
    pub branches: Vec<String>,
    pub stats: Option<dashboard::DashboardStats>,
    pub messages: Vec<CmdMessage>,
}

impl Default for CmdResult {
    fn default() -> Self {
        Self {
            view_state: LoadState::Ready,
            transactions: Vec::new(),
            inventory: Vec::new(),
            summary: None,
            analytics: None,
            users: Vec::new(),
            branches: Vec::new(),
            stats: None,
            messages: Vec::new(),
        }
    }
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_view_state(mut self, state: LoadState) -> Self {
        self.view_state = state;
        self
    }

    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }

    pub fn with_inventory(mut self, inventory: Vec<InventoryItem>) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn with_summary(mut self, summary: FinancialSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_analytics(mut self, analytics: InventoryAnalytics) -> Self {
        self.analytics = Some(analytics);
        self
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    pub fn with_branches(mut self, branches: Vec<String>) -> Self {
        self.branches = branches;
        self
    }

    pub fn with_stats(mut self, stats: dashboard::DashboardStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// A failed-load result: `Error` state, empty sections, one page-level
    /// message.
    pub fn load_failure(what: &str, err: &crate::error::CompventaError) -> Self {
        Self::default()
            .with_view_state(LoadState::Error)
            .with_message(CmdMessage::error(format!("Could not load {}: {}", what, err)))
    }
}
