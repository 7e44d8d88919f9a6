//! Todo List - Main Entry Point
//!
//! Command-line front end over the `todo_list` library. Each invocation
//! loads the store, runs one operation and prints the resulting state.

use anyhow::{Result, anyhow, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use todo_list::formatting::{format_todo, format_todos};
use todo_list::todo::local_date_today;
use todo_list::validation::{
    normalize_todo_id, parse_due_date_input, parse_priority, parse_status, parse_status_filter,
};
use todo_list::{Config, FileStore, TodoPatch, TodoStore};

/// Todo List - track todos with priorities, due dates and status
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long, default_value = "todo-list.toml")]
    config: PathBuf,

    /// Directory holding the todo data (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error, off (overrides the config file)
    #[arg(long)]
    log_level: Option<String>,

    /// Allow adding todos without a due date
    #[arg(long)]
    no_require_due_date: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new todo
    Add {
        /// What needs doing
        description: String,
        /// high, medium or low (defaults to the configured priority)
        #[arg(long)]
        priority: Option<String>,
        /// Due date in YYYY-MM-DD format
        #[arg(long)]
        due: Option<String>,
    },
    /// List todos, optionally filtered by status
    List {
        /// all, not-started, in-progress or completed
        #[arg(long, default_value = "all")]
        status: String,
    },
    /// Edit fields of an existing todo
    Edit {
        id: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        /// not-started, in-progress or completed
        #[arg(long)]
        status: Option<String>,
        /// New due date in YYYY-MM-DD format
        #[arg(long, conflicts_with = "clear_due")]
        due: Option<String>,
        /// Remove the due date
        #[arg(long)]
        clear_due: bool,
    },
    /// Toggle a todo between completed and not started
    Toggle { id: String },
    /// Delete a todo
    Remove { id: String },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load(&args.config)?;
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    if args.no_require_due_date {
        config.form.require_due_date = false;
    }

    let _logger = todo_list::logging::init_logging(&config.log_level).map_err(|e| anyhow!(e))?;

    let backend = FileStore::new(&config.data_dir);
    let mut store = TodoStore::initialize(backend, config.form);
    let today = local_date_today();

    match args.command {
        Command::Add {
            description,
            priority,
            due,
        } => {
            let priority = match priority {
                Some(p) => parse_priority(&p)?,
                None => store.policy().default_priority,
            };
            let due_date = due.as_deref().map(parse_due_date_input).transpose()?;
            let todo = store.add(description, priority, due_date)?;
            print!("Todo created:\n{}", format_todo(&todo, today));
        }
        Command::List { status } => {
            let filter = parse_status_filter(&status)?;
            println!("{}", format_todos(store.filter_by_status(filter), today));
        }
        Command::Edit {
            id,
            description,
            priority,
            status,
            due,
            clear_due,
        } => {
            let due_date = if clear_due {
                Some(None)
            } else {
                due.as_deref()
                    .map(parse_due_date_input)
                    .transpose()?
                    .map(Some)
            };
            let patch = TodoPatch {
                description,
                priority: priority.as_deref().map(parse_priority).transpose()?,
                due_date,
                status: status.as_deref().map(parse_status).transpose()?,
            };
            if patch.is_empty() {
                bail!("Nothing to change. Pass at least one field to edit.");
            }
            let todo = store.update(&normalize_todo_id(&id), patch)?;
            print!("Todo updated:\n{}", format_todo(&todo, today));
        }
        Command::Toggle { id } => {
            let todo = store.toggle_status(&normalize_todo_id(&id))?;
            print!("Todo toggled:\n{}", format_todo(&todo, today));
        }
        Command::Remove { id } => {
            let id = normalize_todo_id(&id);
            if !store.remove(&id) {
                bail!("Todo '{}' not found", id);
            }
            println!("Todo '{}' removed", id);
        }
    }

    Ok(())
}
