//! # The Tabular Query Engine
//!
//! Every table in the console is produced the same way: take the fetched
//! record sequence, keep the rows satisfying all active criteria, then
//! optionally sort with a stable comparator. [`run`] is that computation,
//! done once; record types opt in through [`Queryable`].
//!
//! ## Guarantees
//!
//! - **Pure**: the result is a function of (records, criteria, directive)
//!   alone. Recomputation with the same inputs yields the same sequence.
//! - **Subset**: the output is a permutation of a subset of the input. Rows
//!   are never invented, duplicated, or dropped beyond filtering.
//! - **Stable**: rows with equal sort keys keep their fetched relative
//!   order, so an absent directive (or an all-equal key) preserves the
//!   source order exactly.
//! - **Total**: an empty result is a legitimate outcome, not an error. Load
//!   failures are the store's concern (see [`crate::store::LoadState`]); by
//!   the time records reach the pipeline they are just rows.

pub mod filter;
pub mod sort;

use crate::model::{InventoryItem, Transaction};
use filter::{text_matches, InventoryCriteria, TransactionCriteria};
use sort::{InventoryField, SortDirective, TransactionField};
use std::cmp::Ordering;

/// A record type the pipeline can filter and sort.
///
/// `Criteria` is the view's closed filter record; `Field` its closed sort-key
/// enum. `compare_by` selects a comparison strategy per declared field; see
/// sort.rs.
pub trait Queryable {
    type Criteria;
    type Field: Copy + PartialEq;

    fn matches(&self, criteria: &Self::Criteria) -> bool;
    fn compare_by(&self, other: &Self, field: Self::Field) -> Ordering;
}

/// Produce the view result: filter conjunctively, then stable-sort if a
/// directive is present.
pub fn run<R>(
    records: &[R],
    criteria: &R::Criteria,
    directive: Option<SortDirective<R::Field>>,
) -> Vec<R>
where
    R: Queryable + Clone,
{
    let mut rows: Vec<R> = records
        .iter()
        .filter(|record| record.matches(criteria))
        .cloned()
        .collect();

    if let Some(directive) = directive {
        rows.sort_by(|a, b| directive.order(a.compare_by(b, directive.field)));
    }

    rows
}

impl Queryable for Transaction {
    type Criteria = TransactionCriteria;
    type Field = TransactionField;

    fn matches(&self, criteria: &TransactionCriteria) -> bool {
        let search_ok = criteria
            .search
            .as_deref()
            .map_or(true, |term| text_matches(term, &[&self.description, &self.id]));
        let kind_ok = criteria.kind.map_or(true, |kind| self.kind == kind);
        let branch_ok = criteria
            .branch
            .as_deref()
            .map_or(true, |branch| self.branch == branch);
        search_ok && kind_ok && branch_ok
    }

    fn compare_by(&self, other: &Self, field: TransactionField) -> Ordering {
        match field {
            TransactionField::Id => sort::by_text(&self.id, &other.id),
            TransactionField::Date => sort::by_date(self.date, other.date),
            TransactionField::Description => {
                sort::by_text(&self.description, &other.description)
            }
            TransactionField::Kind => sort::by_text(self.kind.label(), other.kind.label()),
            TransactionField::Amount => sort::by_number(self.amount, other.amount),
            TransactionField::Branch => sort::by_text(&self.branch, &other.branch),
        }
    }
}

impl Queryable for InventoryItem {
    type Criteria = InventoryCriteria;
    type Field = InventoryField;

    fn matches(&self, criteria: &InventoryCriteria) -> bool {
        let search_ok = criteria
            .search
            .as_deref()
            .map_or(true, |term| text_matches(term, &[&self.name, &self.id]));
        let branch_ok = criteria
            .branch
            .as_deref()
            .map_or(true, |branch| self.branch == branch);
        let category_ok = criteria
            .category
            .as_deref()
            .map_or(true, |category| self.category == category);
        search_ok && branch_ok && category_ok
    }

    fn compare_by(&self, other: &Self, field: InventoryField) -> Ordering {
        match field {
            InventoryField::Id => sort::by_text(&self.id, &other.id),
            InventoryField::Name => sort::by_text(&self.name, &other.name),
            InventoryField::Category => sort::by_text(&self.category, &other.category),
            InventoryField::Branch => sort::by_text(&self.branch, &other.branch),
            InventoryField::Quantity => sort::by_count(self.quantity, other.quantity),
            InventoryField::Minimum => sort::by_count(self.minimum, other.minimum),
        }
    }
}
