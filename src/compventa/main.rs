use clap::Parser;
use compventa::api::ConsoleApi;
use compventa::commands::transactions::TransactionDraft;
use compventa::commands::CmdResult;
use compventa::config::CompventaConfig;
use compventa::context::{accessible_views, BranchRegistry, SessionContext, View};
use compventa::error::{CompventaError, Result};
use compventa::model::{TransactionKind, UserRole};
use compventa::query::filter::{InventoryCriteria, TransactionCriteria};
use compventa::query::sort::{InventoryField, SortDirective, TransactionField};
use compventa::store::fs::FileSource;
use compventa::store::LoadState;
use directories::ProjectDirs;
use std::path::PathBuf;
use std::str::FromStr;

mod args;
mod print;

use args::{BranchCommands, Cli, Commands, TxCommands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ConsoleApi<FileSource>,
    config: CompventaConfig,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Dashboard) | None => handle_dashboard(&ctx),
        Some(Commands::Tx(tx)) => match tx {
            TxCommands::List {
                search,
                kind,
                branch,
                sort,
                desc,
            } => handle_tx_list(&ctx, search, kind, branch, sort, desc),
            TxCommands::Add {
                description,
                kind,
                amount,
                branch,
            } => handle_tx_add(&ctx, description, kind, amount, branch),
        },
        Some(Commands::Stock {
            search,
            branch,
            category,
            sort,
            desc,
        }) => handle_stock(&ctx, search, branch, category, sort, desc),
        Some(Commands::Analytics) => handle_analytics(&ctx),
        Some(Commands::Report) => handle_report(&ctx),
        Some(Commands::Users) => handle_users(&ctx),
        Some(Commands::Branch(cmd)) => match cmd {
            BranchCommands::List => handle_branch_list(&ctx),
            BranchCommands::Add { name } => handle_branch_add(&mut ctx, name),
        },
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli);
    let config = CompventaConfig::load(&data_dir).unwrap_or_default();

    let role = match &cli.role {
        Some(raw) => raw.parse::<UserRole>().map_err(CompventaError::Api)?,
        None => config.default_role,
    };
    let branches = BranchRegistry::new(config.branches.clone());

    let api = ConsoleApi::new(
        FileSource::new(data_dir.clone()),
        SessionContext::new(role, branches),
    );
    Ok(AppContext {
        api,
        config,
        data_dir,
    })
}

fn resolve_data_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.data_dir {
        return dir.clone();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let local = cwd.join("data");
    if local.exists() {
        return local;
    }

    ProjectDirs::from("com", "compventa", "compventa")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or(local)
}

/// Navigation gating: the CLI refuses views the sidebar would hide.
fn ensure_access(ctx: &AppContext, view: View) -> Result<()> {
    let role = ctx.api.role();
    if view.allows(role) {
        return Ok(());
    }

    let available = accessible_views(role)
        .iter()
        .map(|v| v.label())
        .collect::<Vec<_>>()
        .join(", ");
    Err(CompventaError::Api(format!(
        "access denied: \"{}\" is not available to the {} role (available views: {})",
        view.label(),
        role,
        available
    )))
}

/// A failed load still prints its page-level message; the process then exits
/// nonzero, distinct from an empty-but-ready view.
fn finish(result: &CmdResult) -> Result<()> {
    print::print_messages(&result.messages);
    if result.view_state == LoadState::Error {
        std::process::exit(1);
    }
    Ok(())
}

fn handle_dashboard(ctx: &AppContext) -> Result<()> {
    ensure_access(ctx, View::Dashboard)?;
    let result = ctx.api.dashboard()?;
    print::print_dashboard(&result);
    finish(&result)
}

fn handle_tx_list(
    ctx: &AppContext,
    search: Option<String>,
    kind: Option<String>,
    branch: Option<String>,
    sort: Option<String>,
    desc: bool,
) -> Result<()> {
    ensure_access(ctx, View::Transactions)?;
    let criteria = TransactionCriteria {
        search,
        kind: parse_opt::<TransactionKind>(kind)?,
        branch,
    };
    let directive = parse_sort::<TransactionField>(sort, desc)?;
    let result = ctx.api.list_transactions(&criteria, directive)?;
    print::print_transactions(&result.transactions);
    finish(&result)
}

fn handle_tx_add(
    ctx: &AppContext,
    description: String,
    kind: String,
    amount: f64,
    branch: String,
) -> Result<()> {
    ensure_access(ctx, View::Transactions)?;
    let draft = TransactionDraft {
        description,
        kind: Some(kind.parse::<TransactionKind>().map_err(CompventaError::Api)?),
        amount,
        branch,
    };
    let result = ctx.api.add_transaction(draft)?;
    print::print_transactions(&result.transactions);
    finish(&result)
}

fn handle_stock(
    ctx: &AppContext,
    search: Option<String>,
    branch: Option<String>,
    category: Option<String>,
    sort: Option<String>,
    desc: bool,
) -> Result<()> {
    ensure_access(ctx, View::Inventory)?;
    let criteria = InventoryCriteria {
        search,
        branch,
        category,
    };
    let directive = parse_sort::<InventoryField>(sort, desc)?;
    let result = ctx.api.list_inventory(&criteria, directive)?;
    print::print_inventory(&result.inventory);
    finish(&result)
}

fn handle_analytics(ctx: &AppContext) -> Result<()> {
    ensure_access(ctx, View::InventoryAnalytics)?;
    let result = ctx.api.inventory_analytics()?;
    print::print_analytics(&result);
    finish(&result)
}

fn handle_report(ctx: &AppContext) -> Result<()> {
    ensure_access(ctx, View::Reports)?;
    let result = ctx.api.financial_report()?;
    print::print_report(&result);
    finish(&result)
}

fn handle_users(ctx: &AppContext) -> Result<()> {
    ensure_access(ctx, View::Users)?;
    let result = ctx.api.list_users()?;
    print::print_users(&result.users);
    finish(&result)
}

fn handle_branch_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_branches()?;
    print::print_branches(&result.branches);
    finish(&result)
}

fn handle_branch_add(ctx: &mut AppContext, name: String) -> Result<()> {
    let result = ctx.api.add_branch(&name)?;

    // Registry changes outlive the process through the config file; the
    // fixture documents themselves are never written.
    ctx.config.branches = result.branches.clone();
    ctx.config.save(&ctx.data_dir)?;

    print::print_branches(&result.branches);
    finish(&result)
}

fn parse_opt<T: FromStr<Err = String>>(raw: Option<String>) -> Result<Option<T>> {
    raw.map(|s| s.parse::<T>().map_err(CompventaError::Api))
        .transpose()
}

fn parse_sort<F>(raw: Option<String>, desc: bool) -> Result<Option<SortDirective<F>>>
where
    F: FromStr<Err = String> + Copy + PartialEq,
{
    let Some(raw) = raw else {
        return Ok(None);
    };
    let field = raw.parse::<F>().map_err(CompventaError::Api)?;
    Ok(Some(if desc {
        SortDirective::descending(field)
    } else {
        SortDirective::ascending(field)
    }))
}
