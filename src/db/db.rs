//! SQLite connection bootstrap.
//!
//! Every constructor brings the schema up to date before handing out the
//! connection.

use super::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database file named in the configuration inside the data directory.
    pub fn new() -> Result<Db> {
        let file_name = Config::read()?.db_file_name();
        let db_file_path = DataStorage::new().get_path(&file_name)?;
        Self::open(db_file_path)
    }

    /// Opens (or creates) the database at an explicit path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db> {
        debug!(path = %path.as_ref().display(), "opening database");
        let mut conn = Connection::open(path)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Private in-memory database; contents vanish with the connection.
    pub fn in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
