use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(format!("unknown transaction kind: {}", other)),
        }
    }
}

/// One financial movement at a branch. Immutable once fetched; the query
/// pipeline never mutates a field in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub kind: TransactionKind,
    pub amount: f64,
    pub branch: String,
}

impl Transaction {
    /// Synthesize a new record for an in-memory submission. The id and date
    /// are generated here; the record is never written back to the source.
    pub fn new(description: String, kind: TransactionKind, amount: f64, branch: String) -> Self {
        Self {
            id: format!("tx-{}", Uuid::new_v4()),
            date: Utc::now().date_naive(),
            description,
            kind,
            amount,
            branch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    OutOfStock,
    Low,
    Limited,
    InStock,
}

impl StockStatus {
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of stock",
            StockStatus::Low => "Low stock",
            StockStatus::Limited => "Limited",
            StockStatus::InStock => "In stock",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub branch: String,
    pub quantity: u32,
    /// Restock threshold below which the item counts as low stock.
    pub minimum: u32,
    pub category: String,
}

impl InventoryItem {
    /// Status bands: empty, below the threshold, within 1.5x of it, healthy.
    pub fn stock_status(&self) -> StockStatus {
        if self.quantity == 0 {
            StockStatus::OutOfStock
        } else if self.quantity < self.minimum {
            StockStatus::Low
        } else if 2 * self.quantity < 3 * self.minimum {
            StockStatus::Limited
        } else {
            StockStatus::InStock
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchBreakdown {
    pub branch: String,
    pub income: f64,
    pub expenses: f64,
}

impl BranchBreakdown {
    pub fn profit(&self) -> f64 {
        self.income - self.expenses
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryExpense {
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
    pub by_branch: Vec<BranchBreakdown>,
    pub expenses_by_category: Vec<CategoryExpense>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTurnover {
    pub month: String,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSales {
    pub name: String,
    pub units: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchValue {
    pub branch: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockTrendPoint {
    pub date: NaiveDate,
    pub total_value: f64,
    pub total_units: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryAnalytics {
    pub turnover: Vec<MonthlyTurnover>,
    pub top_products: Vec<ProductSales>,
    pub value_by_branch: Vec<BranchValue>,
    pub stock_trend: Vec<StockTrendPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Manager,
    Employee,
}

impl UserRole {
    pub fn label(self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Manager => "Manager",
            UserRole::Employee => "Employee",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" | "administrator" => Ok(UserRole::Admin),
            "manager" => Ok(UserRole::Manager),
            "employee" => Ok(UserRole::Employee),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub branch: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: u32, minimum: u32) -> InventoryItem {
        InventoryItem {
            id: "p1".into(),
            name: "Widget".into(),
            branch: "Central".into(),
            quantity,
            minimum,
            category: "Misc".into(),
        }
    }

    #[test]
    fn stock_status_bands() {
        assert_eq!(item(0, 10).stock_status(), StockStatus::OutOfStock);
        assert_eq!(item(9, 10).stock_status(), StockStatus::Low);
        assert_eq!(item(10, 10).stock_status(), StockStatus::Limited);
        assert_eq!(item(14, 10).stock_status(), StockStatus::Limited);
        assert_eq!(item(15, 10).stock_status(), StockStatus::InStock);
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Income".parse(), Ok(TransactionKind::Income));
        assert_eq!("EXPENSE".parse(), Ok(TransactionKind::Expense));
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn synthesized_transactions_get_unique_ids() {
        let a = Transaction::new("A".into(), TransactionKind::Income, 1.0, "Central".into());
        let b = Transaction::new("B".into(), TransactionKind::Income, 1.0, "Central".into());
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("tx-"));
    }
}
