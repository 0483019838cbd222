use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "compventa")]
#[command(about = "Small-business management console", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Act as this role (admin, manager, employee)
    #[arg(short, long, global = true)]
    pub role: Option<String>,

    /// Directory holding the JSON data documents
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Key business metrics at a glance
    #[command(alias = "dash")]
    Dashboard,

    /// Browse and record transactions
    #[command(subcommand, alias = "transactions")]
    Tx(TxCommands),

    /// Stock levels across branches
    #[command(alias = "inv")]
    Stock {
        /// Match against product name or id
        #[arg(short, long)]
        search: Option<String>,

        /// Only this branch
        #[arg(short, long)]
        branch: Option<String>,

        /// Only this category
        #[arg(short, long)]
        category: Option<String>,

        /// Sort by field (id, name, category, branch, quantity, minimum)
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending (with --sort)
        #[arg(long)]
        desc: bool,
    },

    /// Inventory trends and metrics
    Analytics,

    /// Financial report
    Report,

    /// Manage system users
    Users,

    /// Manage the branch list
    #[command(subcommand)]
    Branch(BranchCommands),
}

#[derive(Subcommand, Debug)]
pub enum TxCommands {
    /// List transactions
    #[command(alias = "ls")]
    List {
        /// Match against description or id
        #[arg(short, long)]
        search: Option<String>,

        /// Only this kind (income, expense)
        #[arg(short, long)]
        kind: Option<String>,

        /// Only this branch
        #[arg(short, long)]
        branch: Option<String>,

        /// Sort by field (id, date, description, kind, amount, branch)
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending (with --sort)
        #[arg(long)]
        desc: bool,
    },

    /// Record a new transaction (kept in memory for this run only)
    Add {
        /// What happened
        #[arg(short, long)]
        description: String,

        /// income or expense
        #[arg(short, long)]
        kind: String,

        /// Positive amount
        #[arg(short, long)]
        amount: f64,

        /// Branch where it happened
        #[arg(short, long)]
        branch: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum BranchCommands {
    /// List branches
    #[command(alias = "ls")]
    List,

    /// Add a branch to the list
    Add {
        /// Name of the new branch
        name: String,
    },
}
