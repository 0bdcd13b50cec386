//! Bounded concurrent map with completion-ordered collection.
//!
//! Every item is submitted up front as its own Tokio task; a semaphore with
//! `workers` permits bounds how many run at once. Tasks send their result on
//! one channel and the caller's loop receives them in completion order, which
//! is the only place progress and aggregate counters are updated. A task
//! that panics is replaced by the caller's fallback result for its item, so
//! every input yields exactly one result.

use std::future::Future;
use std::sync::Arc;

use log::warn;
use tokio::sync::{mpsc, Semaphore};

/// Progress callback invoked with `(completed, total)` after each result arrives.
pub type ProgressCallback = Option<Arc<dyn Fn(usize, usize) + Send + Sync>>;

/// Runs `task` over `items` with at most `workers` in flight.
///
/// `on_result` is called from the calling task, once per item, in completion
/// order. A task that panics does not abort the batch: `on_panic` builds the
/// result for its item, which is delivered after the surviving results.
/// Returns the number of results delivered, always `items.len()`.
pub async fn run_bounded<T, R, F, Fut, P, C>(
    items: Vec<T>,
    workers: usize,
    task: F,
    on_panic: P,
    progress: &ProgressCallback,
    mut on_result: C,
) -> usize
where
    T: Clone + Send + 'static,
    R: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    P: Fn(T) -> R,
    C: FnMut(R),
{
    let total = items.len();
    let semaphore = Arc::new(Semaphore::new(workers.max(1)));
    let task = Arc::new(task);
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut handles = Vec::with_capacity(total);
    for item in items {
        let semaphore = Arc::clone(&semaphore);
        let task = Arc::clone(&task);
        let tx = tx.clone();
        let kept = item.clone();
        handles.push((kept, tokio::spawn(async move {
            // Hold permit until the task completes
            let Ok(_permit) = semaphore.acquire_owned().await else {
                return;
            };
            let result = task(item).await;
            // The receiver only goes away if the caller was dropped mid-batch
            let _ = tx.send(result);
        })));
    }
    // Channel closes once every task has sent or died
    drop(tx);

    let mut completed = 0usize;
    let mut deliver = |result: R| {
        completed += 1;
        if let Some(callback) = progress {
            callback(completed, total);
        }
        on_result(result);
    };
    while let Some(result) = rx.recv().await {
        deliver(result);
    }

    for (item, handle) in handles {
        if let Err(e) = handle.await {
            warn!("Worker task failed, recording fallback result: {e}");
            deliver(on_panic(item));
        }
    }

    if completed < total {
        warn!(
            "{} of {} tasks finished without a result",
            total - completed,
            total
        );
    }

    completed
}

/// Runs `task` over `items` and returns the results in completion order.
pub async fn collect_bounded<T, R, F, Fut, P>(
    items: Vec<T>,
    workers: usize,
    task: F,
    on_panic: P,
    progress: &ProgressCallback,
) -> Vec<R>
where
    T: Clone + Send + 'static,
    R: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    P: Fn(T) -> R,
{
    let mut results = Vec::with_capacity(items.len());
    run_bounded(items, workers, task, on_panic, progress, |r| results.push(r)).await;
    results
}
