//! Reactive data access over the task table.
//!
//! Every mutation goes through [`ToDoDao`], which commits it and then
//! recomputes every query that has a live subscriber, whether or not the
//! changed rows could affect that query. Subscribers therefore always look at
//! the latest full state of the table.
//!
//! The store lock is held across "mutate, recompute, publish", so a snapshot
//! is never published out of order with the mutation that produced it.

use super::live::{LiveQueries, LiveQuery, Snapshot};
use super::todo::{ToDo, ToDoQuery};
use crate::db::todos::{StoreError, Todos};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct ToDoDao {
    store: Mutex<Todos>,
    live: Arc<LiveQueries>,
}

impl ToDoDao {
    pub fn new(todos: Todos) -> Self {
        ToDoDao {
            store: Mutex::new(todos),
            live: LiveQueries::new(),
        }
    }

    pub fn insert_data(&self, todo: &ToDo) -> Result<i32, StoreError> {
        self.mutate("insert", |store| store.insert(todo))
    }

    pub fn update_data(&self, todo: &ToDo) -> Result<(), StoreError> {
        self.mutate("update", |store| store.update(todo))
    }

    pub fn delete_item(&self, todo: &ToDo) -> Result<(), StoreError> {
        self.mutate("delete", |store| store.delete(todo))
    }

    pub fn delete_all(&self) -> Result<usize, StoreError> {
        self.mutate("delete_all", |store| store.delete_all())
    }

    pub fn get_all_data(&self) -> Result<LiveQuery, StoreError> {
        self.observe(ToDoQuery::All)
    }

    pub fn sort_by_high_priority(&self) -> Result<LiveQuery, StoreError> {
        self.observe(ToDoQuery::HighPriorityFirst)
    }

    pub fn sort_by_low_priority(&self) -> Result<LiveQuery, StoreError> {
        self.observe(ToDoQuery::LowPriorityFirst)
    }

    pub fn search_database(&self, query: &str) -> Result<LiveQuery, StoreError> {
        self.observe(ToDoQuery::Search(query.to_string()))
    }

    /// Subscribes to `query`, reading its current result on the calling thread.
    pub fn observe(&self, query: ToDoQuery) -> Result<LiveQuery, StoreError> {
        let mut store = self.store.lock();
        let initial = store.fetch(&query)?;
        Ok(self.live.subscribe(query, initial))
    }

    /// Subscribes to `query` without reading it. The first snapshot arrives
    /// after [`ToDoDao::refresh`] runs for the returned subscription, or with
    /// the next mutation, whichever is first.
    pub fn observe_pending(&self, query: ToDoQuery) -> LiveQuery {
        self.live.subscribe_pending(query)
    }

    /// Reads the current result of one subscription's query and delivers it.
    pub fn refresh(&self, subscription: u64) -> Result<(), StoreError> {
        let mut store = self.store.lock();
        let Some(query) = self.live.query_of(subscription) else {
            return Ok(());
        };
        let snapshot = Arc::new(store.fetch(&query)?);
        self.live.publish_to(subscription, snapshot);
        Ok(())
    }

    /// One-shot read, no subscription.
    pub fn fetch(&self, query: &ToDoQuery) -> Result<Vec<ToDo>, StoreError> {
        self.store.lock().fetch(query)
    }

    pub fn get_by_id(&self, id: i32) -> Result<Option<ToDo>, StoreError> {
        self.store.lock().get_by_id(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.live.subscriber_count()
    }

    fn mutate<T>(&self, operation: &str, op: impl FnOnce(&mut Todos) -> Result<T, StoreError>) -> Result<T, StoreError> {
        let mut store = self.store.lock();
        let result = op(&mut store)?;
        debug!(operation, "committed");
        self.publish(&mut store);
        Ok(result)
    }

    /// Recomputes each distinct active query once and publishes the results.
    fn publish(&self, store: &mut Todos) {
        let mut results: HashMap<ToDoQuery, Snapshot> = HashMap::new();
        for query in self.live.active_queries() {
            match store.fetch(&query) {
                Ok(todos) => {
                    results.insert(query, Arc::new(todos));
                }
                // The mutation is already committed; a failed re-read only
                // leaves that query's subscribers on their previous snapshot.
                Err(e) => warn!(?query, error = %e, "failed to refresh live query"),
            }
        }
        debug!(queries = results.len(), "publishing snapshots");
        self.live.publish(&results);
    }
}
