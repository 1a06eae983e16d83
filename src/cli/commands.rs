use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::model::Filter;

#[derive(Parser)]
#[command(name = "tl", about = concat!("[x] ticklist v", env!("CARGO_PKG_VERSION"), " - a todo list for the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding the stored list (overrides config)
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Config file to read instead of the default
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Start route, e.g. "#/active" (overrides config)
    #[arg(long, global = true)]
    pub route: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List items
    List(ListArgs),
    /// Add an item
    Add(AddArgs),
    /// Flip an item between active and completed
    Toggle(IdArgs),
    /// Remove an item
    Rm(IdArgs),
    /// Replace an item's text
    Edit(EditArgs),
    /// Complete every item, or reopen all when all are completed
    ToggleAll,
    /// Remove every completed item
    ClearCompleted,
}

/// Filter names accepted by `--filter`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    All,
    Active,
    Completed,
}

impl From<FilterArg> for Filter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => Filter::All,
            FilterArg::Active => Filter::Active,
            FilterArg::Completed => Filter::Completed,
        }
    }
}

#[derive(Args)]
pub struct ListArgs {
    /// Which items to show (default: from the route)
    #[arg(long, value_enum)]
    pub filter: Option<FilterArg>,
}

#[derive(Args)]
pub struct AddArgs {
    /// Item text (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct IdArgs {
    /// Item id or a unique prefix of it
    pub id: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Item id or a unique prefix of it
    pub id: String,
    /// New text (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}
