//! Command-line surface of the `todo` binary.
//!
//! Every command except `init` and `migrations` opens the configured database
//! and talks to it through one [`ToDoViewModel`], the same stack the
//! interactive shell uses.

pub mod add;
pub mod delete;
pub mod delete_all;
pub mod init;
pub mod list;
pub mod migrations;
pub mod search;
pub mod shell;
pub mod update;

use crate::db::{db::Db, todos::Todos};
use crate::libs::{dao::ToDoDao, repository::ToDoRepository, view_model::ToDoViewModel};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "Print the task list")]
    List(list::ListArgs),
    #[command(about = "Print tasks whose title contains text")]
    Search(search::SearchArgs),
    #[command(about = "Change a task")]
    Update(update::UpdateArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Delete every task")]
    DeleteAll(delete_all::DeleteAllArgs),
    #[command(about = "Interactive list that updates in place")]
    Shell,
    #[command(about = "Inspect the database schema")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Migrations(args) => migrations::cmd(args),
            Commands::Add(args) => add::cmd(&open_view_model()?, args).await,
            Commands::List(args) => list::cmd(&open_view_model()?, args).await,
            Commands::Search(args) => search::cmd(&open_view_model()?, args).await,
            Commands::Update(args) => update::cmd(&open_view_model()?, args).await,
            Commands::Delete(args) => delete::cmd(&open_view_model()?, args).await,
            Commands::DeleteAll(args) => delete_all::cmd(&open_view_model()?, args).await,
            Commands::Shell => shell::cmd(&open_view_model()?).await,
        }
    }
}

/// Wires store, data access object, repository and view model together.
pub fn open_view_model() -> Result<ToDoViewModel> {
    let dao = Arc::new(ToDoDao::new(Todos::new(Db::new()?)));
    Ok(ToDoViewModel::new(ToDoRepository::new(dao)))
}
