use super::FixtureSource;
use crate::error::{CompventaError, Result};
use crate::model::{FinancialSummary, InventoryAnalytics, InventoryItem, Transaction, User};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

pub const TRANSACTIONS_FILE: &str = "transactions.json";
pub const INVENTORY_FILE: &str = "inventory.json";
pub const FINANCIAL_SUMMARY_FILE: &str = "financial_summary.json";
pub const INVENTORY_ANALYTICS_FILE: &str = "inventory_analytics.json";
pub const USERS_FILE: &str = "users.json";

/// Production source: one JSON document per collection under a data
/// directory. Unreachable or malformed documents surface as fetch errors;
/// nothing is ever written back.
pub struct FileSource {
    data_dir: PathBuf,
}

impl FileSource {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn read_fixture<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let path = self.data_dir.join(name);
        let content = fs::read_to_string(&path)
            .map_err(|err| CompventaError::Fetch(format!("{}: {}", path.display(), err)))?;
        serde_json::from_str(&content)
            .map_err(|err| CompventaError::Fetch(format!("{}: {}", path.display(), err)))
    }
}

impl FixtureSource for FileSource {
    fn transactions(&self) -> Result<Vec<Transaction>> {
        self.read_fixture(TRANSACTIONS_FILE)
    }

    fn inventory(&self) -> Result<Vec<InventoryItem>> {
        self.read_fixture(INVENTORY_FILE)
    }

    fn financial_summary(&self) -> Result<FinancialSummary> {
        self.read_fixture(FINANCIAL_SUMMARY_FILE)
    }

    fn inventory_analytics(&self) -> Result<InventoryAnalytics> {
        self.read_fixture(INVENTORY_ANALYTICS_FILE)
    }

    fn users(&self) -> Result<Vec<User>> {
        self.read_fixture(USERS_FILE)
    }
}
