use super::FixtureSource;
use crate::error::{CompventaError, Result};
use crate::model::{FinancialSummary, InventoryAnalytics, InventoryItem, Transaction, User};

/// In-memory source for testing and development. Serves preloaded rows and
/// can simulate an unreachable backend.
#[derive(Debug, Default)]
pub struct InMemorySource {
    pub transactions: Vec<Transaction>,
    pub inventory: Vec<InventoryItem>,
    pub financial_summary: Option<FinancialSummary>,
    pub inventory_analytics: Option<InventoryAnalytics>,
    pub users: Vec<User>,
    /// When set, every fetch fails, like a dead network.
    pub fail: bool,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> Result<()> {
        if self.fail {
            return Err(CompventaError::Fetch("simulated fetch failure".to_string()));
        }
        Ok(())
    }
}

impl FixtureSource for InMemorySource {
    fn transactions(&self) -> Result<Vec<Transaction>> {
        self.guard()?;
        Ok(self.transactions.clone())
    }

    fn inventory(&self) -> Result<Vec<InventoryItem>> {
        self.guard()?;
        Ok(self.inventory.clone())
    }

    fn financial_summary(&self) -> Result<FinancialSummary> {
        self.guard()?;
        self.financial_summary
            .clone()
            .ok_or_else(|| CompventaError::Fetch("financial summary not loaded".to_string()))
    }

    fn inventory_analytics(&self) -> Result<InventoryAnalytics> {
        self.guard()?;
        self.inventory_analytics
            .clone()
            .ok_or_else(|| CompventaError::Fetch("inventory analytics not loaded".to_string()))
    }

    fn users(&self) -> Result<Vec<User>> {
        self.guard()?;
        Ok(self.users.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{BranchBreakdown, CategoryExpense, TransactionKind, UserRole};
    use chrono::NaiveDate;

    pub struct SourceFixture {
        pub source: InMemorySource,
    }

    impl Default for SourceFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SourceFixture {
        pub fn new() -> Self {
            Self {
                source: InMemorySource::new(),
            }
        }

        pub fn failing(mut self) -> Self {
            self.source.fail = true;
            self
        }

        pub fn with_transaction(
            mut self,
            id: &str,
            date: (i32, u32, u32),
            description: &str,
            kind: TransactionKind,
            amount: f64,
            branch: &str,
        ) -> Self {
            self.source.transactions.push(Transaction {
                id: id.to_string(),
                date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
                description: description.to_string(),
                kind,
                amount,
                branch: branch.to_string(),
            });
            self
        }

        pub fn with_inventory_item(
            mut self,
            id: &str,
            name: &str,
            branch: &str,
            quantity: u32,
            minimum: u32,
            category: &str,
        ) -> Self {
            self.source.inventory.push(InventoryItem {
                id: id.to_string(),
                name: name.to_string(),
                branch: branch.to_string(),
                quantity,
                minimum,
                category: category.to_string(),
            });
            self
        }

        pub fn with_summary(mut self) -> Self {
            self.source.financial_summary = Some(FinancialSummary {
                total_income: 125_430.5,
                total_expenses: 78_120.0,
                net_profit: 47_310.5,
                by_branch: vec![
                    BranchBreakdown {
                        branch: "Central".to_string(),
                        income: 60_000.0,
                        expenses: 35_000.0,
                    },
                    BranchBreakdown {
                        branch: "North".to_string(),
                        income: 65_430.5,
                        expenses: 43_120.0,
                    },
                ],
                expenses_by_category: vec![CategoryExpense {
                    category: "Alquiler".to_string(),
                    amount: 24_000.0,
                }],
            });
            self
        }

        pub fn with_user(mut self, id: &str, name: &str, role: UserRole, branch: &str) -> Self {
            self.source.users.push(User {
                id: id.to_string(),
                name: name.to_string(),
                email: format!("{}@example.com", id),
                role,
                branch: branch.to_string(),
            });
            self
        }
    }
}
