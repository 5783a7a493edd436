// Tue Jan 13 2026 - Alex

use std::sync::atomic::{AtomicUsize, Ordering};

/// Completed-probe counter shared by all workers of one scan.
#[derive(Debug, Default)]
pub struct ProgressCounter {
    completed: AtomicUsize,
}

impl ProgressCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) -> usize {
        self.completed.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn get(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}
