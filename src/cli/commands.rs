//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "budgetbook")]
#[command(about = "Income and expense ledger", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new ledger
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Currency prefix used when showing amounts
        #[arg(short, long)]
        currency: Option<String>,

        /// What happens to an entry whose edit is abandoned (discard, restore)
        #[arg(short, long, default_value = "discard")]
        edit_mode: String,
    },

    /// Submit the entry form
    Add {
        /// Entry type (income, expense)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,

        /// Category label
        #[arg(short, long)]
        category: Option<String>,

        /// Positive amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,

        /// Date of the entry
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show all entries followed by the totals
    List,

    /// Show income, expense and balance
    Totals,

    /// Load an entry into the form and remove it from the ledger
    Edit {
        /// Entry id
        id: String,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the current form contents
    Form,

    /// Abandon the form
    Cancel,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
