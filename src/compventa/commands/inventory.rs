use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::query;
use crate::query::filter::InventoryCriteria;
use crate::query::sort::{InventoryField, SortDirective};
use crate::store::{FixtureSource, RecordStore};

pub fn list<S: FixtureSource>(
    source: &S,
    criteria: &InventoryCriteria,
    directive: Option<SortDirective<InventoryField>>,
) -> Result<CmdResult> {
    let mut store = RecordStore::new();
    if let Err(err) = store.resolve(source.inventory()) {
        return Ok(CmdResult::load_failure("inventory", &err));
    }

    let rows = query::run(store.records(), criteria, directive);
    let mut result = CmdResult::default().with_inventory(rows);
    if result.inventory.is_empty() {
        result.add_message(CmdMessage::info("No products match the current filters."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StockStatus;
    use crate::store::memory::fixtures::SourceFixture;
    use crate::store::LoadState;

    fn seeded() -> SourceFixture {
        SourceFixture::new()
            .with_inventory_item("p001", "Portátil Gamer XZ", "Central", 8, 5, "Electrónica")
            .with_inventory_item("p002", "Teclado Mecánico RGB", "North", 2, 6, "Accesorios")
            .with_inventory_item("p003", "Monitor 27\"", "Central", 0, 4, "Electrónica")
    }

    #[test]
    fn lists_everything_without_criteria() {
        let fixture = seeded();
        let result = list(&fixture.source, &InventoryCriteria::default(), None).unwrap();
        assert_eq!(result.inventory.len(), 3);
    }

    #[test]
    fn search_matches_name_or_id() {
        let fixture = seeded();
        let criteria = InventoryCriteria {
            search: Some("teclado".into()),
            ..Default::default()
        };
        let result = list(&fixture.source, &criteria, None).unwrap();
        assert_eq!(result.inventory.len(), 1);
        assert_eq!(result.inventory[0].id, "p002");

        let criteria = InventoryCriteria {
            search: Some("p003".into()),
            ..Default::default()
        };
        let result = list(&fixture.source, &criteria, None).unwrap();
        assert_eq!(result.inventory.len(), 1);
    }

    #[test]
    fn branch_and_category_compose() {
        let fixture = seeded();
        let criteria = InventoryCriteria {
            branch: Some("Central".into()),
            category: Some("Electrónica".into()),
            ..Default::default()
        };
        let result = list(&fixture.source, &criteria, None).unwrap();
        let ids: Vec<&str> = result.inventory.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["p001", "p003"]);
    }

    #[test]
    fn quantity_sort_descending() {
        let fixture = seeded();
        let directive = SortDirective::descending(InventoryField::Quantity);
        let result = list(&fixture.source, &InventoryCriteria::default(), Some(directive)).unwrap();
        let quantities: Vec<u32> = result.inventory.iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![8, 2, 0]);
    }

    #[test]
    fn statuses_come_from_the_listed_rows() {
        let fixture = seeded();
        let result = list(&fixture.source, &InventoryCriteria::default(), None).unwrap();
        let statuses: Vec<StockStatus> = result
            .inventory
            .iter()
            .map(|i| i.stock_status())
            .collect();
        assert_eq!(
            statuses,
            vec![StockStatus::InStock, StockStatus::Low, StockStatus::OutOfStock]
        );
    }

    #[test]
    fn fetch_failure_yields_error_state() {
        let fixture = seeded().failing();
        let result = list(&fixture.source, &InventoryCriteria::default(), None).unwrap();
        assert_eq!(result.view_state, LoadState::Error);
        assert!(result.inventory.is_empty());
    }
}
