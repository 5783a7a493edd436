// Tue Jan 13 2026 - Alex

pub mod progress;
pub mod rate;
pub mod scheduler;
pub mod worker;

pub use progress::ProgressCounter;
pub use rate::RateLimiter;
pub use scheduler::{ScanRun, ScanScheduler, DEFAULT_CONCURRENCY};
pub use worker::Worker;
