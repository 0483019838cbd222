//! Sort directives and the comparison strategies behind them.
//!
//! Each view declares a closed field enum; every field maps to exactly one of
//! the strategies below (text, number, count, date). The resolver never
//! inspects runtime value shapes.

use chrono::NaiveDate;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

/// The active (field, direction) pair governing ordering. Absence of a
/// directive means the fetch order is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective<F> {
    pub field: F,
    pub direction: Direction,
}

impl<F: Copy + PartialEq> SortDirective<F> {
    pub fn ascending(field: F) -> Self {
        Self {
            field,
            direction: Direction::Ascending,
        }
    }

    pub fn descending(field: F) -> Self {
        Self {
            field,
            direction: Direction::Descending,
        }
    }

    /// Selection policy: picking the already-sorted field flips direction;
    /// picking a new field replaces the key and resets to ascending.
    pub fn toggle(current: Option<Self>, field: F) -> Self {
        match current {
            Some(directive) if directive.field == field => Self {
                field,
                direction: directive.direction.flipped(),
            },
            _ => Self::ascending(field),
        }
    }

    /// Apply the direction to a base comparison.
    pub fn order(&self, base: Ordering) -> Ordering {
        match self.direction {
            Direction::Ascending => base,
            Direction::Descending => base.reverse(),
        }
    }
}

/// Case-insensitive text ordering with a case-sensitive tiebreak, so records
/// differing only in case still order deterministically.
pub fn by_text(a: &str, b: &str) -> Ordering {
    match a.to_lowercase().cmp(&b.to_lowercase()) {
        Ordering::Equal => a.cmp(b),
        ord => ord,
    }
}

pub fn by_number(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

pub fn by_count(a: u32, b: u32) -> Ordering {
    a.cmp(&b)
}

pub fn by_date(a: NaiveDate, b: NaiveDate) -> Ordering {
    a.cmp(&b)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionField {
    Id,
    Date,
    Description,
    Kind,
    Amount,
    Branch,
}

impl std::str::FromStr for TransactionField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(TransactionField::Id),
            "date" => Ok(TransactionField::Date),
            "description" => Ok(TransactionField::Description),
            "kind" => Ok(TransactionField::Kind),
            "amount" => Ok(TransactionField::Amount),
            "branch" => Ok(TransactionField::Branch),
            other => Err(format!("unknown transaction field: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryField {
    Id,
    Name,
    Category,
    Branch,
    Quantity,
    Minimum,
}

impl std::str::FromStr for InventoryField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(InventoryField::Id),
            "name" => Ok(InventoryField::Name),
            "category" => Ok(InventoryField::Category),
            "branch" => Ok(InventoryField::Branch),
            "quantity" => Ok(InventoryField::Quantity),
            "minimum" => Ok(InventoryField::Minimum),
            other => Err(format!("unknown inventory field: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_direction_on_same_field() {
        let first = SortDirective::toggle(None, TransactionField::Amount);
        assert_eq!(first.field, TransactionField::Amount);
        assert_eq!(first.direction, Direction::Ascending);

        let second = SortDirective::toggle(Some(first), TransactionField::Amount);
        assert_eq!(second.field, TransactionField::Amount);
        assert_eq!(second.direction, Direction::Descending);

        let third = SortDirective::toggle(Some(second), TransactionField::Amount);
        assert_eq!(third.direction, Direction::Ascending);
    }

    #[test]
    fn toggle_resets_to_ascending_on_new_field() {
        let amount_desc = SortDirective::descending(TransactionField::Amount);
        let switched = SortDirective::toggle(Some(amount_desc), TransactionField::Date);
        assert_eq!(switched.field, TransactionField::Date);
        assert_eq!(switched.direction, Direction::Ascending);
    }

    #[test]
    fn descending_reverses_base_order() {
        let directive = SortDirective::descending(TransactionField::Amount);
        assert_eq!(
            directive.order(std::cmp::Ordering::Less),
            std::cmp::Ordering::Greater
        );
        assert_eq!(
            directive.order(std::cmp::Ordering::Equal),
            std::cmp::Ordering::Equal
        );
    }

    #[test]
    fn text_ordering_ignores_case() {
        assert_eq!(by_text("alfombra", "Teclado"), Ordering::Less);
        assert_eq!(by_text("Zapato", "alfombra"), Ordering::Greater);
        // Same letters in different case: the tiebreak keeps them distinct
        // but deterministic.
        assert_ne!(by_text("teclado", "Teclado"), Ordering::Equal);
    }

    #[test]
    fn number_ordering_is_total() {
        assert_eq!(by_number(50.0, 100.0), Ordering::Less);
        assert_eq!(by_number(75.5, 75.5), Ordering::Equal);
        assert_eq!(by_number(-10.0, 0.0), Ordering::Less);
    }

    #[test]
    fn field_parsing() {
        assert_eq!("amount".parse(), Ok(TransactionField::Amount));
        assert_eq!("DATE".parse(), Ok(TransactionField::Date));
        assert!("color".parse::<TransactionField>().is_err());
        assert_eq!("quantity".parse(), Ok(InventoryField::Quantity));
        assert!("weight".parse::<InventoryField>().is_err());
    }
}
