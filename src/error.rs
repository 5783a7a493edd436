// Tue Jan 13 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("No target specified")]
    MissingTarget,
    #[error("Candidate set is empty, nothing to scan")]
    EmptyCandidateSet,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Failed to read wordlist {path}: {source}")]
    Wordlist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to create output file {path}: {source}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to load config file {path}: {message}")]
    ConfigFile { path: PathBuf, message: String },
    #[error("HTTP client error: {0}")]
    Client(String),
}

pub type Result<T> = std::result::Result<T, ScanError>;

