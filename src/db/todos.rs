//! The task table.
//!
//! [`Todos`] owns the connection and answers the canned queries. It knows
//! nothing about subscribers; change notification is layered on top by
//! [`crate::libs::dao::ToDoDao`].
//!
//! ## Usage
//!
//! ```rust
//! use todolist::db::{db::Db, todos::Todos};
//! use todolist::libs::{priority::Priority, todo::ToDo};
//!
//! let mut todos = Todos::new(Db::in_memory()?);
//! let id = todos.insert(&ToDo::new("Buy milk", Priority::High, "2 litres"))?;
//! assert_eq!(todos.get_by_id(id)?.unwrap().title, "Buy milk");
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::db::Db;
use crate::libs::priority::Priority;
use crate::libs::todo::{ToDo, ToDoQuery};
use rusqlite::{params, Connection, ErrorCode, Params, Statement};
use thiserror::Error;

const INSERT_TODO: &str = "INSERT INTO todo_table (title, priority, description) VALUES (?1, ?2, ?3)";
const INSERT_TODO_WITH_ID: &str = "INSERT INTO todo_table (id, title, priority, description) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_TODO: &str = "UPDATE todo_table SET title = ?2, priority = ?3, description = ?4 WHERE id = ?1";
const DELETE_TODO: &str = "DELETE FROM todo_table WHERE id = ?1";
const DELETE_ALL: &str = "DELETE FROM todo_table";
const SELECT_TODOS: &str = "SELECT id, title, priority, description FROM todo_table";
const COUNT_TODOS: &str = "SELECT COUNT(*) FROM todo_table";
const WHERE_ID: &str = "WHERE id = ?1";
/// `instr` keeps the match case-sensitive and gives `%` and `_` no special meaning.
const WHERE_TITLE_CONTAINS: &str = "WHERE instr(title, ?1) > 0";
const ORDER_BY_ROW: &str = "ORDER BY id";
/// Ranks the three stored priority names given as `?1`, `?2`, `?3`.
const ORDER_BY_RANK: &str = "ORDER BY CASE priority WHEN ?1 THEN 1 WHEN ?2 THEN 2 WHEN ?3 THEN 3 ELSE 4 END, id";

/// Failures of the store and of the executor that runs store jobs.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no task with id {0}")]
    NotFound(i32),

    #[error("a task with id {0} already exists")]
    AlreadyExists(i32),

    #[error("unknown priority '{0}' in database")]
    UnknownPriority(String),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("background executor stopped before the job completed")]
    ExecutorClosed,
}

/// A row as read, before the priority text is decoded.
struct RawToDo {
    id: i32,
    title: String,
    priority: String,
    description: String,
}

impl RawToDo {
    fn into_todo(self) -> Result<ToDo, StoreError> {
        Ok(ToDo {
            id: self.id,
            title: self.title,
            priority: Priority::from_stored(&self.priority)?,
            description: self.description,
        })
    }
}

pub struct Todos {
    conn: Connection,
}

impl Todos {
    /// Takes over the connection of an already migrated database.
    pub fn new(db: Db) -> Self {
        Todos { conn: db.conn }
    }

    /// Writes a record and returns its identity.
    ///
    /// A record with id 0 gets a fresh identity. A record carrying an id is
    /// written under that id, which is how a deleted record is restored.
    pub fn insert(&mut self, todo: &ToDo) -> Result<i32, StoreError> {
        if !todo.is_persisted() {
            self.conn.execute(INSERT_TODO, params![todo.title, todo.priority.as_stored(), todo.description])?;
            return Ok(self.conn.last_insert_rowid() as i32);
        }

        match self.conn.execute(
            INSERT_TODO_WITH_ID,
            params![todo.id, todo.title, todo.priority.as_stored(), todo.description],
        ) {
            Ok(_) => Ok(todo.id),
            Err(rusqlite::Error::SqliteFailure(err, _)) if err.code == ErrorCode::ConstraintViolation => Err(StoreError::AlreadyExists(todo.id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Replaces every field of the record with the same identity.
    pub fn update(&mut self, todo: &ToDo) -> Result<(), StoreError> {
        let affected = self.conn.execute(
            UPDATE_TODO,
            params![todo.id, todo.title, todo.priority.as_stored(), todo.description],
        )?;

        if affected == 0 {
            return Err(StoreError::NotFound(todo.id));
        }

        Ok(())
    }

    pub fn delete(&mut self, todo: &ToDo) -> Result<(), StoreError> {
        let affected = self.conn.execute(DELETE_TODO, params![todo.id])?;

        if affected == 0 {
            return Err(StoreError::NotFound(todo.id));
        }

        Ok(())
    }

    /// Empties the table and returns how many rows were removed.
    pub fn delete_all(&mut self) -> Result<usize, StoreError> {
        Ok(self.conn.execute(DELETE_ALL, [])?)
    }

    pub fn get_by_id(&mut self, id: i32) -> Result<Option<ToDo>, StoreError> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_TODOS, WHERE_ID))?;
        let mut todos = collect(&mut stmt, params![id])?;
        Ok(todos.pop())
    }

    pub fn get_all(&mut self) -> Result<Vec<ToDo>, StoreError> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_TODOS, ORDER_BY_ROW))?;
        collect(&mut stmt, [])
    }

    pub fn sort_by_high_priority(&mut self) -> Result<Vec<ToDo>, StoreError> {
        self.by_rank([Priority::High, Priority::Medium, Priority::Low])
    }

    pub fn sort_by_low_priority(&mut self) -> Result<Vec<ToDo>, StoreError> {
        self.by_rank([Priority::Low, Priority::Medium, Priority::High])
    }

    /// Records whose title contains `query` literally and case-sensitively.
    pub fn search(&mut self, query: &str) -> Result<Vec<ToDo>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} {} {}", SELECT_TODOS, WHERE_TITLE_CONTAINS, ORDER_BY_ROW))?;
        collect(&mut stmt, params![query])
    }

    pub fn count(&mut self) -> Result<usize, StoreError> {
        let count: i64 = self.conn.query_row(COUNT_TODOS, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Runs whichever canned query `query` names.
    pub fn fetch(&mut self, query: &ToDoQuery) -> Result<Vec<ToDo>, StoreError> {
        match query {
            ToDoQuery::All => self.get_all(),
            ToDoQuery::HighPriorityFirst => self.sort_by_high_priority(),
            ToDoQuery::LowPriorityFirst => self.sort_by_low_priority(),
            ToDoQuery::Search(text) => self.search(text),
        }
    }

    fn by_rank(&mut self, rank: [Priority; 3]) -> Result<Vec<ToDo>, StoreError> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_TODOS, ORDER_BY_RANK))?;
        collect(
            &mut stmt,
            params![rank[0].as_stored(), rank[1].as_stored(), rank[2].as_stored()],
        )
    }
}

fn collect<P: Params>(stmt: &mut Statement<'_>, params: P) -> Result<Vec<ToDo>, StoreError> {
    let rows = stmt.query_map(params, |row| {
        Ok(RawToDo {
            id: row.get(0)?,
            title: row.get(1)?,
            priority: row.get(2)?,
            description: row.get(3)?,
        })
    })?;

    let mut todos = Vec::new();
    for row in rows {
        todos.push(row?.into_todo()?);
    }

    Ok(todos)
}
