//! SQLite persistence.
//!
//! [`db::Db`] opens a connection and applies the versioned schema from
//! [`migrations`]; [`todos::Todos`] answers the task table's queries.
//!
//! ```rust
//! use todolist::db::{db::Db, todos::Todos};
//! use todolist::libs::{priority::Priority, todo::ToDo};
//!
//! let mut todos = Todos::new(Db::in_memory()?);
//! todos.insert(&ToDo::new("Water plants", Priority::Low, "balcony"))?;
//! assert_eq!(todos.count()?, 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod db;
pub mod migrations;
pub mod todos;
