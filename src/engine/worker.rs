// Tue Jan 13 2026 - Alex

use crate::engine::progress::ProgressCounter;
use crate::engine::rate::RateLimiter;
use crate::probe::classifier::Classify;
use crate::probe::result::ProbeResult;
use ahash::AHashSet;
use log::trace;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// State every worker of one scan shares.
pub struct WorkerShared {
    pub queue: Mutex<VecDeque<String>>,
    pub seen: Mutex<AHashSet<String>>,
    pub classifier: Arc<dyn Classify>,
    pub limiter: Option<RateLimiter>,
    pub progress: Arc<ProgressCounter>,
}

impl WorkerShared {
    fn next_candidate(&self) -> Option<String> {
        loop {
            let candidate = self.queue.lock().pop_front()?;
            if self.seen.lock().insert(candidate.clone()) {
                return Some(candidate);
            }
            trace!("Skipping duplicate candidate {}", candidate);
        }
    }
}

pub struct Worker {
    thread_handle: Option<JoinHandle<()>>,
}

impl Worker {
    pub fn spawn(id: usize, shared: Arc<WorkerShared>, result_sender: Sender<ProbeResult>) -> Self {
        let handle = thread::spawn(move || {
            Worker::worker_loop(id, shared, result_sender);
        });

        Self {
            thread_handle: Some(handle),
        }
    }

    fn worker_loop(id: usize, shared: Arc<WorkerShared>, result_sender: Sender<ProbeResult>) {
        while let Some(candidate) = shared.next_candidate() {
            if let Some(limiter) = &shared.limiter {
                limiter.acquire();
            }

            let result = shared.classifier.classify(&candidate);
            shared.progress.increment();

            if result_sender.send(result).is_err() {
                trace!("Worker {} stopping, receiver dropped", id);
                break;
            }
        }
    }

    pub fn join(&mut self) {
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        self.join();
    }
}
