//! Presentation state for the list screen.
//!
//! Mutations are handed to a [`SerialExecutor`] and return at once with a
//! [`MutationHandle`]. Mutations issued through one view model reach the store
//! in the order they were issued. Live queries are registered immediately and
//! their first snapshot is read on the same executor, so it reflects every
//! mutation issued before the subscription.

use super::executor::{MutationHandle, SerialExecutor};
use super::live::LiveQuery;
use super::repository::ToDoRepository;
use super::todo::{ToDo, ToDoQuery};
use tokio::sync::watch;
use tracing::warn;

pub struct ToDoViewModel {
    repository: ToDoRepository,
    executor: SerialExecutor,
    empty_database: watch::Sender<bool>,
}

impl ToDoViewModel {
    /// Must be called from within a tokio runtime.
    pub fn new(repository: ToDoRepository) -> Self {
        let (empty_database, _) = watch::channel(false);
        ToDoViewModel {
            repository,
            executor: SerialExecutor::spawn(),
            empty_database,
        }
    }

    pub fn insert_data(&self, todo: ToDo) -> MutationHandle<i32> {
        let repository = self.repository.clone();
        self.executor.execute(move || repository.insert_data(&todo))
    }

    pub fn update_data(&self, todo: ToDo) -> MutationHandle<()> {
        let repository = self.repository.clone();
        self.executor.execute(move || repository.update_data(&todo))
    }

    pub fn delete_data(&self, todo: ToDo) -> MutationHandle<()> {
        let repository = self.repository.clone();
        self.executor.execute(move || repository.delete_item(&todo))
    }

    pub fn delete_all(&self) -> MutationHandle<usize> {
        let repository = self.repository.clone();
        self.executor.execute(move || repository.delete_all())
    }

    /// Deletes `todo` and keeps a copy that [`UndoDelete::undo`] writes back
    /// under the same identity.
    pub fn delete_with_undo(&self, todo: ToDo) -> (MutationHandle<()>, UndoDelete) {
        let handle = self.delete_data(todo.clone());
        (handle, UndoDelete { item: todo })
    }

    /// Reads one record behind every mutation already queued.
    pub fn find(&self, id: i32) -> MutationHandle<Option<ToDo>> {
        let repository = self.repository.clone();
        self.executor.execute(move || repository.get_by_id(id))
    }

    pub fn get_all_data(&self) -> LiveQuery {
        self.observe(ToDoQuery::All)
    }

    pub fn sort_by_high_priority(&self) -> LiveQuery {
        self.observe(ToDoQuery::HighPriorityFirst)
    }

    pub fn sort_by_low_priority(&self) -> LiveQuery {
        self.observe(ToDoQuery::LowPriorityFirst)
    }

    /// Live titles containing `query`. The text is matched literally.
    pub fn search_database(&self, query: &str) -> LiveQuery {
        self.observe(ToDoQuery::Search(query.to_string()))
    }

    pub fn observe(&self, query: ToDoQuery) -> LiveQuery {
        let live = self.repository.observe_pending(query);
        let repository = self.repository.clone();
        let subscription = live.id();
        let initial_load = self.executor.execute(move || repository.refresh(subscription));
        tokio::spawn(async move {
            if let Err(e) = initial_load.await {
                warn!(subscription, error = %e, "initial load of live query failed");
            }
        });
        live
    }

    /// Records whether the list the screen just received is empty.
    pub fn check_if_database_empty(&self, data: &[ToDo]) {
        self.empty_database.send_replace(data.is_empty());
    }

    pub fn empty_database(&self) -> watch::Receiver<bool> {
        self.empty_database.subscribe()
    }
}

/// A deleted record kept around so the deletion can be reverted.
#[derive(Debug, Clone)]
pub struct UndoDelete {
    item: ToDo,
}

impl UndoDelete {
    pub fn item(&self) -> &ToDo {
        &self.item
    }

    /// Writes the record back with its original identity.
    pub fn undo(self, view_model: &ToDoViewModel) -> MutationHandle<i32> {
        view_model.insert_data(self.item)
    }
}
