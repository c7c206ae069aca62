use anyhow::Result;
use clap::{Parser, Subcommand};
use clidaytr_core::Priority;

mod commands;
mod config;
mod state;
mod table;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CLIDAYTR_BUILD_SHA"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    name = "clidaytr",
    version,
    long_version = LONG_VERSION,
    about = "clidaytr: CLI personal kanban"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add one or more tasks to the todo column
    Add {
        /// Task titles
        #[arg(required = true)]
        tasks: Vec<String>,

        /// Board the tasks belong to
        #[arg(long, short = 'n')]
        name: String,

        /// Task priority (high, medium or low)
        #[arg(long, default_value = "medium")]
        priority: Priority,
    },

    /// Soft-delete tasks by id (they stay in the archive)
    Delete {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Move tasks one stage forward (todo -> in-progress -> backlog -> done)
    Promote {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Move tasks one stage back (done -> backlog -> in-progress -> todo)
    Regress {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Show one board, filtered by name and sorted by priority
    Show {
        /// Board name to filter on
        #[arg(long, short = 'n')]
        name: String,
    },

    /// Paint the full board across all boards
    Display,

    /// Write a fresh config file with defaults
    Configure {
        /// Overwrite an existing config
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Add {
            tasks,
            name,
            priority,
        }) => commands::add(&tasks, priority, &name),
        Some(Command::Delete { ids }) => commands::delete(&ids),
        Some(Command::Promote { ids }) => commands::promote(&ids),
        Some(Command::Regress { ids }) => commands::regress(&ids),
        Some(Command::Show { name }) => commands::show(&name),
        Some(Command::Configure { force }) => config::init_config(force),
        // bare `clidaytr` paints the whole board
        Some(Command::Display) | None => commands::display(),
    }
}
