mod prompt;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use todo_core::{ActorId, Command, FileTaskRepository, StoreConfig, TaskChanges, TodoService};
use tracing_subscriber::EnvFilter;

use crate::prompt::{ask, ask_optional, value_or_ask};

const LOG_ENV: &str = "TODO_LOG";

#[derive(Parser)]
#[command(name = "todo", version)]
#[command(about = "This is a TODO application", long_about = None)]
struct Cli {
    /// Store file to use instead of ./store.json
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,
    /// Use the store in the home directory (~/.todo/store.json)
    #[arg(long, global = true, conflicts_with = "store")]
    global: bool,
    /// Account id recorded on created and updated items
    #[arg(long, global = true, value_name = "ID")]
    account: Option<ActorId>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Create new TODO item
    Create {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update TODO item
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Remove TODO item by id
    #[command(alias = "rm")]
    Remove { id: String },
    /// List all TODOs
    #[command(alias = "ls")]
    List {
        /// Only items with this status (open, inprogress, done)
        #[arg(long)]
        status: Option<String>,
        /// Print the items as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one TODO item
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Like TODO item
    Like {
        id: String,
        /// Remove the like instead
        #[arg(long)]
        unlike: bool,
    },
    /// Comment TODO item
    Comment {
        id: String,
        #[arg(long)]
        text: Option<String>,
    },
    /// Edit status TODO item (open, inprogress, done)
    Status { id: String, status: Option<String> },
}

impl Cli {
    fn store_config(&self) -> Result<StoreConfig> {
        let mut config = if self.global {
            StoreConfig::global()?
        } else {
            StoreConfig::from_env()?
        };
        if let Some(path) = &self.store {
            config = config.with_store_path(path);
        }
        if let Some(account) = self.account {
            config = config.with_actor_id(account);
        }
        Ok(config)
    }
}

/// Collects whatever the flags did not provide and builds the command.
fn collect(command: Commands) -> Result<(Command, bool)> {
    let collected = match command {
        Commands::Create { title, description } => Command::Create {
            title: value_or_ask(title, "Enter title ...")?,
            description: value_or_ask(description, "Enter description ...")?,
        },
        Commands::Update {
            id,
            title,
            description,
        } => {
            let (title, description) = if title.is_none() && description.is_none() {
                (
                    ask_optional("Enter new title (empty keeps current) ...")?,
                    ask_optional("Enter new description (empty keeps current) ...")?,
                )
            } else {
                (title, description)
            };
            let changes = TaskChanges {
                title,
                description,
                ..TaskChanges::default()
            };
            Command::Update { id, changes }
        }
        Commands::Remove { id } => Command::Remove { id },
        Commands::List { status, json } => return Ok((Command::List { status }, json)),
        Commands::Show { id, json } => return Ok((Command::Show { id }, json)),
        Commands::Like { id, unlike } => Command::Like { id, liked: !unlike },
        Commands::Comment { id, text } => Command::Comment {
            id,
            comment: value_or_ask(text, "Enter comment ...")?,
        },
        Commands::Status { id, status } => Command::SetStatus {
            id,
            status: match status {
                Some(s) => s,
                None => ask("Enter status (open, inprogress, done) ...")?,
            },
        },
    };
    Ok((collected, false))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.store_config()?;
    tracing::debug!(store = %config.store_path.display(), actor = config.actor_id, "using store");

    let service = TodoService::new(FileTaskRepository::new(config));
    let (command, json) = collect(cli.command)?;
    let outcome = service.execute(command)?;
    render::print_outcome(&outcome, json)
}
