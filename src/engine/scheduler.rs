// Tue Jan 13 2026 - Alex

use crate::engine::progress::ProgressCounter;
use crate::engine::rate::RateLimiter;
use crate::engine::worker::{Worker, WorkerShared};
use crate::probe::classifier::Classify;
use crate::probe::result::ProbeResult;
use ahash::AHashSet;
use log::info;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

pub const DEFAULT_CONCURRENCY: usize = 50;

pub struct ScanScheduler {
    classifier: Arc<dyn Classify>,
    concurrency: usize,
    rate_per_second: u32,
}

impl ScanScheduler {
    pub fn new(classifier: Arc<dyn Classify>) -> Self {
        Self {
            classifier,
            concurrency: DEFAULT_CONCURRENCY,
            rate_per_second: 0,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Zero disables rate limiting.
    pub fn with_rate_limit(mut self, rate_per_second: u32) -> Self {
        self.rate_per_second = rate_per_second;
        self
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Starts the worker pool and returns the result stream. Every queued
    /// name is probed at most once; duplicates are dropped at dispatch.
    pub fn run<I>(&self, candidates: I) -> ScanRun
    where
        I: IntoIterator<Item = String>,
    {
        let queue: VecDeque<String> = candidates.into_iter().collect();
        let queued = queue.len();
        let worker_count = self.concurrency.min(queued).max(1);

        info!(
            "Scanning {} candidates with {} workers{}",
            queued,
            worker_count,
            if self.rate_per_second > 0 {
                format!(" at {} req/s", self.rate_per_second)
            } else {
                String::new()
            }
        );

        let progress = Arc::new(ProgressCounter::new());
        let shared = Arc::new(WorkerShared {
            queue: Mutex::new(queue),
            seen: Mutex::new(AHashSet::with_capacity(queued)),
            classifier: self.classifier.clone(),
            limiter: RateLimiter::per_second(self.rate_per_second),
            progress: progress.clone(),
        });

        let (result_sender, result_receiver) = channel();
        let workers = (0..worker_count)
            .map(|id| Worker::spawn(id, shared.clone(), result_sender.clone()))
            .collect();

        ScanRun {
            receiver: result_receiver,
            workers,
            progress,
            queued,
        }
    }
}

/// Lazy, single-pass stream of probe results in completion order.
pub struct ScanRun {
    receiver: Receiver<ProbeResult>,
    workers: Vec<Worker>,
    progress: Arc<ProgressCounter>,
    queued: usize,
}

impl ScanRun {
    pub fn progress(&self) -> Arc<ProgressCounter> {
        self.progress.clone()
    }

    pub fn queued(&self) -> usize {
        self.queued
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }
}

impl Iterator for ScanRun {
    type Item = ProbeResult;

    fn next(&mut self) -> Option<ProbeResult> {
        self.receiver.recv().ok()
    }
}

impl Drop for ScanRun {
    fn drop(&mut self) {
        for worker in &mut self.workers {
            worker.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::generator::generate;
    use crate::probe::result::Permission;
    use std::collections::HashMap;
    use std::time::{Duration, Instant};

    struct CountingClassifier {
        calls: Mutex<HashMap<String, usize>>,
        starts: Mutex<Vec<Instant>>,
    }

    impl CountingClassifier {
        fn new() -> Self {
            Self {
                calls: Mutex::new(HashMap::new()),
                starts: Mutex::new(Vec::new()),
            }
        }
    }

    impl Classify for CountingClassifier {
        fn classify(&self, candidate: &str) -> ProbeResult {
            self.starts.lock().push(Instant::now());
            *self.calls.lock().entry(candidate.to_string()).or_insert(0) += 1;
            ProbeResult {
                candidate: candidate.to_string(),
                url: format!("http://{}.s3.amazonaws.com", candidate),
                exists: candidate.ends_with("dev"),
                status: Some(if candidate.ends_with("dev") { 403 } else { 404 }),
                permission: Permission::Unknown,
                region: None,
                object_count: None,
                total_size_bytes: None,
            }
        }
    }

    #[test]
    fn test_every_candidate_exactly_once() {
        let candidates = generate("acme", &["data", "logs", "media"]);
        let expected = candidates.len();

        for concurrency in [1, 2, 7, 50, 500] {
            let classifier = Arc::new(CountingClassifier::new());
            let scheduler = ScanScheduler::new(classifier.clone()).with_concurrency(concurrency);
            let run = scheduler.run(candidates.clone());
            let progress = run.progress();

            let results: Vec<ProbeResult> = run.collect();
            assert_eq!(results.len(), expected);
            assert_eq!(progress.get(), expected);

            let calls = classifier.calls.lock();
            assert_eq!(calls.len(), expected);
            assert!(calls.values().all(|count| *count == 1));
        }
    }

    #[test]
    fn test_duplicates_dropped_at_dispatch() {
        let classifier = Arc::new(CountingClassifier::new());
        let scheduler = ScanScheduler::new(classifier.clone()).with_concurrency(4);
        let names: Vec<String> = ["a", "b", "a", "c", "b", "a"].iter().map(|s| s.to_string()).collect();

        let run = scheduler.run(names);
        assert_eq!(run.queued(), 6);
        assert_eq!(run.count(), 3);
        assert_eq!(classifier.calls.lock().get("a"), Some(&1));
    }

    #[test]
    fn test_worker_count_bounded_by_candidates() {
        let classifier = Arc::new(CountingClassifier::new());
        let scheduler = ScanScheduler::new(classifier).with_concurrency(50);

        let run = scheduler.run(vec!["one".to_string(), "two".to_string()]);
        assert_eq!(run.worker_count(), 2);
        assert_eq!(run.count(), 2);

        let empty = scheduler.run(Vec::<String>::new());
        assert_eq!(empty.worker_count(), 1);
        assert_eq!(empty.count(), 0);
    }

    #[test]
    fn test_zero_concurrency_clamped() {
        let scheduler = ScanScheduler::new(Arc::new(CountingClassifier::new())).with_concurrency(0);
        assert_eq!(scheduler.concurrency(), 1);
    }

    #[test]
    fn test_rate_limit_bounds_throughput() {
        let rate = 10u32;
        let classifier = Arc::new(CountingClassifier::new());
        let scheduler = ScanScheduler::new(classifier.clone())
            .with_concurrency(20)
            .with_rate_limit(rate);

        let names: Vec<String> = (0..25).map(|i| format!("bucket-{}", i)).collect();
        let started = Instant::now();
        assert_eq!(scheduler.run(names).count(), 25);
        assert!(started.elapsed() >= Duration::from_millis(2300));

        let mut starts = classifier.starts.lock().clone();
        starts.sort();
        for (i, start) in starts.iter().enumerate() {
            let in_window = starts[i..]
                .iter()
                .take_while(|s| **s - *start < Duration::from_secs(1))
                .count();
            assert!(in_window <= rate as usize + 1);
        }
    }

    #[test]
    fn test_dropping_run_early_joins_workers() {
        let classifier = Arc::new(CountingClassifier::new());
        let scheduler = ScanScheduler::new(classifier.clone()).with_concurrency(3);
        let names: Vec<String> = (0..100).map(|i| format!("n{}", i)).collect();

        let mut run = scheduler.run(names);
        assert!(run.next().is_some());
        drop(run);

        // the receiver outlives the joins, so the queue is drained
        assert_eq!(classifier.calls.lock().len(), 100);
    }
}
