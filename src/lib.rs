// Tue Jan 15 2026 - Alex

pub mod candidates;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod probe;
pub mod ui;
pub mod utils;

pub use candidates::{aggregate, generate, CandidateSet, Feed, SourceAggregator};
pub use config::ScanConfig;
pub use engine::{ScanRun, ScanScheduler};
pub use error::{Result, ScanError};
pub use output::{FilterSpec, ResultSink};
pub use pipeline::ScanSummary;
pub use probe::{Classify, Permission, ProbeClassifier, ProbeResult};
