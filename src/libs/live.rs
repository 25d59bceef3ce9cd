//! Live query subscriptions.
//!
//! [`LiveQueries`] is a registry of subscriptions, each a `tokio::sync::watch`
//! channel tagged with the [`ToDoQuery`] it follows. The owner of the store
//! recomputes every active query after each mutation and hands the results to
//! [`LiveQueries::publish`]. Subscribers hold a [`LiveQuery`]; dropping it (or
//! calling [`LiveQuery::unsubscribe`]) removes the registry entry.

use super::todo::{ToDo, ToDoQuery};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tokio::sync::watch;
use tracing::debug;

/// An immutable query result shared between all subscribers of the same query.
pub type Snapshot = Arc<Vec<ToDo>>;

struct Subscription {
    query: ToDoQuery,
    tx: watch::Sender<Snapshot>,
}

#[derive(Default)]
pub struct LiveQueries {
    next_id: AtomicU64,
    subscriptions: Mutex<HashMap<u64, Subscription>>,
}

impl LiveQueries {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Registers a subscription whose first value is `initial`.
    ///
    /// The subscriber sees `initial` on its first [`LiveQuery::next`] call
    /// without waiting for a mutation.
    pub fn subscribe(self: &Arc<Self>, query: ToDoQuery, initial: Vec<ToDo>) -> LiveQuery {
        let mut live = self.register(query, Arc::new(initial));
        live.rx.rx.mark_changed();
        live
    }

    /// Registers a subscription with no value yet. The first published
    /// snapshot is delivered as its first value.
    pub fn subscribe_pending(self: &Arc<Self>, query: ToDoQuery) -> LiveQuery {
        self.register(query, Arc::new(Vec::new()))
    }

    fn register(self: &Arc<Self>, query: ToDoQuery, initial: Snapshot) -> LiveQuery {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = watch::channel(initial);
        self.subscriptions.lock().insert(id, Subscription { query: query.clone(), tx });
        debug!(subscription = id, ?query, "subscribed");

        LiveQuery {
            id,
            query,
            rx: Receiver { rx, owner: Arc::downgrade(self), id },
        }
    }

    pub fn unsubscribe(&self, id: u64) {
        if self.subscriptions.lock().remove(&id).is_some() {
            debug!(subscription = id, "unsubscribed");
        }
    }

    /// Distinct queries with at least one subscriber.
    pub fn active_queries(&self) -> Vec<ToDoQuery> {
        let subscriptions = self.subscriptions.lock();
        let mut queries: Vec<ToDoQuery> = Vec::new();
        for subscription in subscriptions.values() {
            if !queries.contains(&subscription.query) {
                queries.push(subscription.query.clone());
            }
        }
        queries
    }

    /// Query followed by one subscription, if it is still registered.
    pub fn query_of(&self, id: u64) -> Option<ToDoQuery> {
        self.subscriptions.lock().get(&id).map(|s| s.query.clone())
    }

    /// Sends each subscription the snapshot computed for its query.
    ///
    /// Subscriptions whose query has no entry in `results` keep their last
    /// value. Subscriptions nobody listens to any more are dropped.
    pub fn publish(&self, results: &HashMap<ToDoQuery, Snapshot>) {
        let mut subscriptions = self.subscriptions.lock();
        subscriptions.retain(|id, subscription| {
            let Some(snapshot) = results.get(&subscription.query) else {
                return true;
            };
            if subscription.tx.send(snapshot.clone()).is_err() {
                debug!(subscription = *id, "pruned closed subscription");
                return false;
            }
            true
        });
    }

    /// Sends one subscription a snapshot.
    pub fn publish_to(&self, id: u64, snapshot: Snapshot) {
        if let Some(subscription) = self.subscriptions.lock().get(&id) {
            let _ = subscription.tx.send(snapshot);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.lock().len()
    }
}

/// Receiving half of a subscription; unregisters itself on drop.
struct Receiver {
    rx: watch::Receiver<Snapshot>,
    owner: Weak<LiveQueries>,
    id: u64,
}

impl Drop for Receiver {
    fn drop(&mut self) {
        if let Some(owner) = self.owner.upgrade() {
            owner.unsubscribe(self.id);
        }
    }
}

/// A query result that re-delivers after every mutation of the table.
pub struct LiveQuery {
    id: u64,
    query: ToDoQuery,
    rx: Receiver,
}

impl LiveQuery {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn query(&self) -> &ToDoQuery {
        &self.query
    }

    /// Latest snapshot, whether or not it has been seen.
    pub fn current(&self) -> Snapshot {
        self.rx.rx.borrow().clone()
    }

    /// Waits for an unseen snapshot. Returns `None` once the registry is gone.
    pub async fn next(&mut self) -> Option<Snapshot> {
        self.rx.rx.changed().await.ok()?;
        Some(self.rx.rx.borrow_and_update().clone())
    }

    /// Unseen snapshot if one is ready, without waiting.
    pub fn try_next(&mut self) -> Option<Snapshot> {
        match self.rx.rx.has_changed() {
            Ok(true) => Some(self.rx.rx.borrow_and_update().clone()),
            _ => None,
        }
    }

    /// Stops delivery. Dropping the subscription has the same effect.
    pub fn unsubscribe(self) {}
}
