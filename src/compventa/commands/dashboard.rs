use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{FixtureSource, RecordStore};

/// The headline numbers shown at the top of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_income: f64,
    pub total_expenses: f64,
    /// Estimated stock value. The restock threshold stands in for unit cost
    /// (quantity x minimum x 5).
    pub inventory_value: f64,
    pub low_stock_items: usize,
}

pub fn run<S: FixtureSource>(source: &S) -> Result<CmdResult> {
    let summary = match source.financial_summary() {
        Ok(summary) => summary,
        Err(err) => return Ok(CmdResult::load_failure("financial summary", &err)),
    };

    let mut inventory = RecordStore::new();
    if let Err(err) = inventory.resolve(source.inventory()) {
        return Ok(CmdResult::load_failure("inventory", &err));
    }

    let inventory_value: f64 = inventory
        .records()
        .iter()
        .map(|item| f64::from(item.quantity) * f64::from(item.minimum * 5))
        .sum();
    let low_stock_items = inventory
        .records()
        .iter()
        .filter(|item| item.quantity < item.minimum)
        .count();

    let stats = DashboardStats {
        total_income: summary.total_income,
        total_expenses: summary.total_expenses,
        inventory_value,
        low_stock_items,
    };

    Ok(CmdResult::default().with_stats(stats).with_summary(summary))
}
