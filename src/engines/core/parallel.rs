//! Shared thread pool for batch analysis
//!
//! Sequence analysis holds no shared mutable state, so batches can be
//! fanned out freely. The pool is built lazily on first use.

use std::sync::OnceLock;

use rayon::{ThreadPool, ThreadPoolBuilder};

static GLOBAL_POOL: OnceLock<Option<ThreadPool>> = OnceLock::new();

/// Get the default number of threads to use
pub fn default_num_threads() -> usize {
    num_cpus::get()
}

fn build_pool(num_threads: usize) -> Option<ThreadPool> {
    match ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .thread_name(|idx| format!("nucleo-worker-{}", idx))
        .build()
    {
        Ok(pool) => {
            log::info!("Initialized thread pool with {} threads", num_threads);
            Some(pool)
        }
        Err(err) => {
            log::warn!("Failed to build thread pool, using rayon's global pool: {}", err);
            None
        }
    }
}

/// Initialize the thread pool with `num_threads` workers
///
/// Only the first call has an effect. Returns `false` if the pool had
/// already been set up.
pub fn initialize_thread_pool(num_threads: Option<usize>) -> bool {
    let mut initialized = false;
    GLOBAL_POOL.get_or_init(|| {
        initialized = true;
        build_pool(num_threads.unwrap_or_else(default_num_threads))
    });
    initialized
}

/// Run `op` inside the shared pool
pub fn install<OP, R>(op: OP) -> R
where
    OP: FnOnce() -> R + Send,
    R: Send,
{
    match GLOBAL_POOL.get_or_init(|| build_pool(default_num_threads())) {
        Some(pool) => pool.install(op),
        None => op(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn test_install_runs_parallel_work() {
        initialize_thread_pool(Some(2));

        let total: usize = install(|| (1..=100usize).into_par_iter().sum());
        assert_eq!(total, 5050);
    }

    #[test]
    fn test_initialize_only_once() {
        initialize_thread_pool(None);
        assert!(!initialize_thread_pool(Some(1)));
    }
}
