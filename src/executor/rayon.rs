//! Rayon-based parallel executor.
//!
//! Uses rayon's global work-stealing pool. Configure its size with
//! `rayon::ThreadPoolBuilder` before the first batch if the default of one
//! thread per core is not wanted.

use super::Executor;
use rayon::prelude::*;

#[derive(Debug, Clone)]
pub struct RayonExecutor {
    /// Size of rayon's global pool when the executor was created.
    num_threads: usize,
}

impl RayonExecutor {
    pub fn new() -> Self {
        Self {
            num_threads: rayon::current_num_threads(),
        }
    }
}

impl Default for RayonExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for RayonExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send,
        R: Send,
        F: Fn(T) -> R + Send + Sync,
    {
        items.into_par_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        self.num_threads
    }
}
