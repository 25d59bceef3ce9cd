//! # todolist
//!
//! A small to-do list backed by SQLite whose list views update themselves.
//!
//! - **Store**: one table of tasks with title, priority and description
//! - **Live queries**: every mutation re-delivers each observed query
//! - **Background writes**: mutations run one at a time off the caller's task
//! - **Minimal redraws**: list changes are turned into insert, remove, move
//!   and change edits before they reach the terminal
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todolist::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
