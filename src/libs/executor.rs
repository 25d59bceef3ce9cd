//! Serial background executor for store jobs.
//!
//! Jobs are queued on an unbounded channel and run one at a time on tokio's
//! blocking pool, in the order they were submitted. Submitting never blocks;
//! the caller gets a [`MutationHandle`] it may await or drop.

use crate::db::todos::StoreError;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

type Job = Box<dyn FnOnce() + Send + 'static>;

#[derive(Clone)]
pub struct SerialExecutor {
    tx: mpsc::UnboundedSender<Job>,
}

impl SerialExecutor {
    /// Starts the worker task. Must be called from within a tokio runtime.
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run(rx));
        SerialExecutor { tx }
    }

    /// Queues `job` behind every job submitted before it.
    pub fn execute<T, F>(&self, job: F) -> MutationHandle<T>
    where
        T: Send + 'static,
        F: FnOnce() -> Result<T, StoreError> + Send + 'static,
    {
        let (done_tx, done_rx) = oneshot::channel();
        let job: Job = Box::new(move || {
            // The caller may have dropped its handle; the job still counts.
            let _ = done_tx.send(job());
        });

        if self.tx.send(job).is_err() {
            warn!("background executor is gone, job discarded");
        }

        MutationHandle { rx: done_rx }
    }
}

async fn run(mut rx: mpsc::UnboundedReceiver<Job>) {
    while let Some(job) = rx.recv().await {
        if let Err(e) = tokio::task::spawn_blocking(job).await {
            warn!(error = %e, "background job panicked");
        }
    }
    debug!("background executor stopped");
}

/// Eventual outcome of a queued job.
///
/// Resolves to [`StoreError::ExecutorClosed`] if the job never ran to
/// completion (executor gone or job panicked).
#[must_use = "dropping the handle ignores the outcome; the job still runs"]
pub struct MutationHandle<T> {
    rx: oneshot::Receiver<Result<T, StoreError>>,
}

impl<T> Future for MutationHandle<T> {
    type Output = Result<T, StoreError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|received| received.unwrap_or(Err(StoreError::ExecutorClosed)))
    }
}
