//! Filter criteria per view.
//!
//! Each view has a closed criteria record (explicit fields, no string-keyed
//! maps) so the predicate dimensions are checked exhaustively at compile
//! time. `None` is the "no constraint" sentinel on every dimension. All
//! active dimensions compose conjunctively.

use crate::model::TransactionKind;

/// Case-insensitive substring match over the view's declared text fields.
/// An empty term matches everything. Numeric and date fields are never
/// searched.
pub fn text_matches(term: &str, fields: &[&str]) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionCriteria {
    /// Searched against description and id.
    pub search: Option<String>,
    pub kind: Option<TransactionKind>,
    pub branch: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryCriteria {
    /// Searched against name and id.
    pub search: Option<String>,
    pub branch: Option<String>,
    pub category: Option<String>,
}
