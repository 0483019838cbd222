//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all console operations, regardless of the UI being
//! used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate view command
//! - **Carries the session context** (selected role, branch registry) so
//!   callers don't thread it through every call
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **View logic**: that belongs in `commands/*.rs`
//! - **I/O operations**: no stdout, stderr, or formatting
//! - **Navigation gating**: which views a role may reach is the shell's
//!   concern (see [`crate::context::View::allows`])
//!
//! ## Generic Over FixtureSource
//!
//! `ConsoleApi<S: FixtureSource>` is generic over the data backend:
//! - Production: `ConsoleApi<FileSource>`
//! - Testing: `ConsoleApi<InMemorySource>`

use crate::commands::{self, CmdResult};
use crate::commands::transactions::TransactionDraft;
use crate::context::SessionContext;
use crate::error::Result;
use crate::model::UserRole;
use crate::query::filter::{InventoryCriteria, TransactionCriteria};
use crate::query::sort::{InventoryField, SortDirective, TransactionField};
use crate::store::FixtureSource;

pub struct ConsoleApi<S: FixtureSource> {
    source: S,
    ctx: SessionContext,
}

impl<S: FixtureSource> ConsoleApi<S> {
    pub fn new(source: S, ctx: SessionContext) -> Self {
        Self { source, ctx }
    }

    pub fn role(&self) -> UserRole {
        self.ctx.role
    }

    pub fn context(&self) -> &SessionContext {
        &self.ctx
    }

    pub fn dashboard(&self) -> Result<CmdResult> {
        commands::dashboard::run(&self.source)
    }

    pub fn list_transactions(
        &self,
        criteria: &TransactionCriteria,
        directive: Option<SortDirective<TransactionField>>,
    ) -> Result<CmdResult> {
        commands::transactions::list(&self.source, criteria, directive)
    }

    pub fn add_transaction(&self, draft: TransactionDraft) -> Result<CmdResult> {
        commands::transactions::add(&self.source, draft)
    }

    pub fn list_inventory(
        &self,
        criteria: &InventoryCriteria,
        directive: Option<SortDirective<InventoryField>>,
    ) -> Result<CmdResult> {
        commands::inventory::list(&self.source, criteria, directive)
    }

    pub fn inventory_analytics(&self) -> Result<CmdResult> {
        commands::analytics::run(&self.source)
    }

    pub fn financial_report(&self) -> Result<CmdResult> {
        commands::reports::run(&self.source)
    }

    pub fn list_users(&self) -> Result<CmdResult> {
        commands::users::run(&self.source, self.ctx.role)
    }

    pub fn list_branches(&self) -> Result<CmdResult> {
        commands::branches::list(&self.ctx)
    }

    pub fn add_branch(&mut self, name: &str) -> Result<CmdResult> {
        commands::branches::add(&mut self.ctx, name)
    }
}

pub use crate::commands::{CmdMessage, MessageLevel};
