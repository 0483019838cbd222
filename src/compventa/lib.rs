//! # Compventa Architecture
//!
//! Compventa is a **UI-agnostic business-console library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! This distinction drives the entire architecture and should guide all
//! development.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats tables, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Carries the session context (role, branches)             │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per view: transactions, stock, dashboard, ... │
//! │  - Runs the query pipeline, returns Rust types              │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract FixtureSource trait over the JSON documents     │
//! │  - FileSource (production), InMemorySource (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Query Pipeline
//!
//! Every tabular view is the same computation: fetch a record sequence, drop
//! the rows that fail the active criteria, optionally sort the survivors with
//! a stable comparator. That computation lives once, in [`query`], and the
//! per-view record types plug into it through the [`query::Queryable`] trait.
//! See query/mod.rs for the contract.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, query, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a web dashboard, a TUI, or any other
//! UI.
//!
//! ## Testing Strategy
//!
//! 1. **Query engine** (`query/*.rs`): thorough unit tests of the filter,
//!    sort, and pipeline contracts. This is where the lion's share of testing
//!    lives.
//!
//! 2. **Commands** (`commands/*.rs`): tests against `InMemorySource`,
//!    including simulated fetch failures.
//!
//! 3. **CLI** (`tests/`): end-to-end runs of the binary against fixtures in a
//!    temp directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: View logic for each screen
//! - [`query`]: The tabular query engine (criteria, sort, pipeline)
//! - [`store`]: Fixture access and the per-view record store
//! - [`model`]: Core data types (`Transaction`, `InventoryItem`, ...)
//! - [`context`]: Session state (role, branch registry) and view gating
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod model;
pub mod query;
pub mod store;
