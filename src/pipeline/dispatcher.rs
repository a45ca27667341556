//! Bounded worker pool with single-writer result collection
//!
//! All items are submitted up front; a dedicated rayon pool of `pool_size`
//! threads bounds how many tasks actually run at once. Results flow back
//! over a channel and are handed to the collector on the calling thread,
//! in completion order, so aggregates never need a lock.

use anyhow::{Context, Result};
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::sync::Arc;

/// What a single unit of work produced.
#[derive(Debug)]
pub enum Completion<T, R> {
    /// The task ran to completion.
    Done(R),
    /// The task panicked; the original item is returned for reporting.
    Panicked(T),
}

/// Run `task` over every item on a pool of exactly `pool_size` threads.
///
/// `on_complete` is invoked on the calling thread as each task finishes,
/// in completion order (which is unrelated to submission order). A panic
/// inside `task` is caught and surfaced as `Completion::Panicked` instead
/// of tearing down the run. Returns once every submitted task has
/// completed; errors only if the thread pool cannot be built.
pub fn run_tasks<T, R, F, C>(
    items: Vec<T>,
    pool_size: usize,
    task: F,
    mut on_complete: C,
) -> Result<()>
where
    T: Send + 'static,
    R: Send + 'static,
    F: Fn(&T) -> R + Send + Sync + 'static,
    C: FnMut(Completion<T, R>),
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(pool_size.max(1))
        .build()
        .context("Failed to build worker pool")?;

    let (tx, rx) = mpsc::channel();
    let task = Arc::new(task);

    for item in items {
        let tx = tx.clone();
        let task = Arc::clone(&task);
        pool.spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| task(&item)));
            let completion = match result {
                Ok(output) => Completion::Done(output),
                Err(_panic) => Completion::Panicked(item),
            };
            // The receiver only disappears if the caller was torn down;
            // nothing useful to do with the result then.
            let _ = tx.send(completion);
        });
    }
    drop(tx);

    for completion in rx {
        on_complete(completion);
    }

    Ok(())
}
