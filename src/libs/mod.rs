//! Application layers above the raw table.
//!
//! Data flows `dao` → `repository` → `view_model` → `adapter`/`view`.
//! Mutations travel the other way through the view model's serial executor.

pub mod adapter;
pub mod config;
pub mod dao;
pub mod data_storage;
pub mod diff;
pub mod executor;
pub mod live;
pub mod messages;
pub mod priority;
pub mod repository;
pub mod todo;
pub mod view;
pub mod view_model;
