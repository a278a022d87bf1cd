use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taskos", about = concat!("TaskOS v", env!("CARGO_PKG_VERSION"), " - tasks, one screen"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Storage file to use instead of the configured one
    #[arg(long = "data", value_name = "PATH", global = true)]
    pub data: Option<PathBuf>,

    /// Config file to read instead of the default
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// More log output (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks, open first
    List(ListArgs),
    /// Create a task
    Add(AddArgs),
    /// Flip a task between open and done
    Toggle(IdArgs),
    /// Delete a task
    Delete(DeleteArgs),
    /// Show one task
    Show(IdArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter: all, urgent, or a category name
    #[arg(long, short, default_value = "all")]
    pub filter: String,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,
    /// Notes
    #[arg(long)]
    pub desc: Option<String>,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
    /// Priority: low, medium, high
    #[arg(long, short)]
    pub priority: Option<String>,
    /// Category: personal, work, or any name
    #[arg(long, short)]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct IdArgs {
    /// Task ID
    pub id: u64,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Task ID
    pub id: u64,
    /// Skip confirmation prompt
    #[arg(long, short)]
    pub yes: bool,
}
