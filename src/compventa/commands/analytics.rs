use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::FixtureSource;

pub fn run<S: FixtureSource>(source: &S) -> Result<CmdResult> {
    match source.inventory_analytics() {
        Ok(analytics) => Ok(CmdResult::default().with_analytics(analytics)),
        Err(err) => Ok(CmdResult::load_failure("inventory analytics", &err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InventoryAnalytics, MonthlyTurnover, ProductSales};
    use crate::store::memory::fixtures::SourceFixture;
    use crate::store::LoadState;

    #[test]
    fn returns_the_analytics_document() {
        let mut fixture = SourceFixture::new();
        fixture.source.inventory_analytics = Some(InventoryAnalytics {
            turnover: vec![MonthlyTurnover {
                month: "Jan".into(),
                rate: 2.4,
            }],
            top_products: vec![ProductSales {
                name: "Portátil Gamer XZ".into(),
                units: 120,
            }],
            value_by_branch: Vec::new(),
            stock_trend: Vec::new(),
        });

        let result = run(&fixture.source).unwrap();
        let analytics = result.analytics.unwrap();
        assert_eq!(analytics.top_products[0].units, 120);
    }

    #[test]
    fn missing_document_yields_error_state() {
        let fixture = SourceFixture::new();
        let result = run(&fixture.source).unwrap();
        assert_eq!(result.view_state, LoadState::Error);
    }
}
