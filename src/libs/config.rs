//! Configuration management for the todolist application.
//!
//! Settings are stored as pretty-printed JSON in the platform data directory
//! resolved by [`DataStorage`]. Every section is optional; a missing file or
//! a missing section falls back to defaults so the application runs without
//! any setup.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use todolist::libs::config::Config;
//!
//! let config = Config::read()?;
//! let order = config.list.unwrap_or_default().default_order;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::todo::SortOrder;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default SQLite file name.
pub const DEFAULT_DB_FILE_NAME: &str = "todo_database.db";

/// Where the task table lives.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    /// File name of the SQLite database, relative to the data directory.
    pub file_name: String,
}

/// Behaviour of the list screen.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ListConfig {
    /// Query the list screen observes when it opens.
    pub default_order: SortOrder,

    /// Ask for confirmation before removing every task.
    pub confirm_delete_all: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<ListConfig>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            file_name: DEFAULT_DB_FILE_NAME.to_string(),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            default_order: SortOrder::All,
            confirm_delete_all: true,
        }
    }
}

impl Config {
    /// Loads the configuration, returning defaults when no file exists yet.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    pub fn read_from(config_file_path: &Path) -> Result<Config> {
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    pub fn save_to(&self, config_file_path: &Path) -> Result<()> {
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Database file name, falling back to [`DEFAULT_DB_FILE_NAME`].
    pub fn db_file_name(&self) -> String {
        self.database.clone().unwrap_or_default().file_name
    }

    /// Interactive setup wizard. Current values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let database = config.database.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleDatabase);
        config.database = Some(DatabaseConfig {
            file_name: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDbFileName.to_string())
                .default(database.file_name)
                .interact_text()?,
        });

        let list = config.list.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleList);
        let orders = [SortOrder::All, SortOrder::High, SortOrder::Low];
        let current = orders.iter().position(|order| *order == list.default_order).unwrap_or(0);
        let selected = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultOrder.to_string())
            .items(&orders.iter().map(|order| order.label()).collect::<Vec<_>>())
            .default(current)
            .interact()?;
        config.list = Some(ListConfig {
            default_order: orders[selected],
            confirm_delete_all: Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptConfirmDeleteAll.to_string())
                .default(list.confirm_delete_all)
                .interact()?,
        });

        Ok(config)
    }
}
