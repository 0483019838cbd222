//! # Storage Layer
//!
//! This module defines fixture access for compventa. The [`FixtureSource`]
//! trait allows the views to work with different backends.
//!
//! ## Design Rationale
//!
//! The source is abstracted behind a trait to:
//! - Enable **testing** with `InMemorySource` (no filesystem needed,
//!   failures simulated on demand)
//! - Allow **future backends** (HTTP, database) without changing view logic
//! - Keep the query pipeline **decoupled** from where records come from
//!
//! ## Implementations
//!
//! - [`fs::FileSource`]: production source reading one JSON document per
//!   collection from a data directory
//! - [`memory::InMemorySource`]: preloaded rows for tests
//!
//! ## The Per-View Record Store
//!
//! Each view owns a [`RecordStore`] snapshot: the fetched sequence plus a
//! [`LoadState`]. A failed fetch leaves the store empty in `Error`, a state
//! the renderer must distinguish from a legitimately empty `Ready` result.
//! There is no retry and no cache; only an explicit reload (or an in-memory
//! submission) changes a resolved store.

use crate::error::{CompventaError, Result};
use crate::model::{FinancialSummary, InventoryAnalytics, InventoryItem, Transaction, User};

pub mod fs;
pub mod memory;

/// Abstract interface over the JSON fixture documents. Each method returns
/// the entire collection in one response; there is no pagination and no
/// schema versioning.
pub trait FixtureSource {
    fn transactions(&self) -> Result<Vec<Transaction>>;
    fn inventory(&self) -> Result<Vec<InventoryItem>>;
    fn financial_summary(&self) -> Result<FinancialSummary>;
    fn inventory_analytics(&self) -> Result<InventoryAnalytics>;
    fn users(&self) -> Result<Vec<User>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Error,
}

/// A view-local snapshot of one record collection.
///
/// The sequence is immutable-until-replaced: the pipeline reads it, a reload
/// replaces it wholesale, and a submission prepends a single synthesized
/// record. Nothing else touches it.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    records: Vec<R>,
    state: LoadState,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            state: LoadState::Loading,
        }
    }
}

impl<R> RecordStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Feed the outcome of a fetch into the store. On success the store
    /// enters `Ready` with the rows; on failure it enters `Error` with an
    /// empty sequence and hands the error back for page-level surfacing.
    /// Calling this again is an explicit reload; there is no automatic
    /// recovery from `Error`.
    pub fn resolve(&mut self, outcome: Result<Vec<R>>) -> Result<()> {
        match outcome {
            Ok(rows) => {
                self.records = rows;
                self.state = LoadState::Ready;
                Ok(())
            }
            Err(err) => {
                self.records.clear();
                self.state = LoadState::Error;
                Err(err)
            }
        }
    }

    /// Prepend a synthesized record to the in-memory sequence. The external
    /// source is never written.
    pub fn prepend(&mut self, record: R) -> Result<()> {
        if self.state != LoadState::Ready {
            return Err(CompventaError::Store(
                "cannot add a record to a view that is not ready".to_string(),
            ));
        }
        self.records.insert(0, record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading_and_empty() {
        let store: RecordStore<u32> = RecordStore::new();
        assert_eq!(store.state(), LoadState::Loading);
        assert!(store.records().is_empty());
    }

    #[test]
    fn successful_fetch_enters_ready() {
        let mut store = RecordStore::new();
        store.resolve(Ok(vec![1, 2, 3])).unwrap();
        assert_eq!(store.state(), LoadState::Ready);
        assert_eq!(store.records(), &[1, 2, 3]);
    }

    #[test]
    fn failed_fetch_enters_error_with_empty_records() {
        let mut store: RecordStore<u32> = RecordStore::new();
        let err = store
            .resolve(Err(CompventaError::Fetch("boom".into())))
            .unwrap_err();
        assert!(matches!(err, CompventaError::Fetch(_)));
        assert_eq!(store.state(), LoadState::Error);
        assert!(store.records().is_empty());
    }

    #[test]
    fn explicit_reload_recovers_from_error() {
        let mut store: RecordStore<u32> = RecordStore::new();
        let _ = store.resolve(Err(CompventaError::Fetch("boom".into())));
        store.resolve(Ok(vec![7])).unwrap();
        assert_eq!(store.state(), LoadState::Ready);
        assert_eq!(store.records(), &[7]);
    }

    #[test]
    fn reload_replaces_contents_wholesale() {
        let mut store = RecordStore::new();
        store.resolve(Ok(vec![1, 2])).unwrap();
        store.resolve(Ok(vec![9])).unwrap();
        assert_eq!(store.records(), &[9]);
    }

    #[test]
    fn prepend_puts_the_record_first() {
        let mut store = RecordStore::new();
        store.resolve(Ok(vec![2, 3])).unwrap();
        store.prepend(1).unwrap();
        assert_eq!(store.records(), &[1, 2, 3]);
        assert_eq!(store.state(), LoadState::Ready);
    }

    #[test]
    fn prepend_is_rejected_outside_ready() {
        let mut store: RecordStore<u32> = RecordStore::new();
        assert!(store.prepend(1).is_err());

        let _ = store.resolve(Err(CompventaError::Fetch("boom".into())));
        assert!(store.prepend(1).is_err());
        assert!(store.records().is_empty());
    }
}
