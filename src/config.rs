// Tue Jan 13 2026 - Alex

use crate::engine::scheduler::DEFAULT_CONCURRENCY;
use crate::error::{Result, ScanError};
use crate::output::filter::FilterSpec;
use crate::output::formatter::LineFormat;
use crate::probe::classifier::{DEFAULT_PROVIDER_DOMAIN, DEFAULT_REGION};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub target: String,
    pub wordlist: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub concurrency: usize,
    pub rate_limit: u32,
    pub include_code: Option<u16>,
    pub exclude_codes: BTreeSet<u16>,
    pub acl_fallback: bool,
    pub feeds_enabled: bool,
    pub extra_candidates: Vec<String>,
    pub verbosity: u8,
    pub probe_timeout_secs: u64,
    pub feed_timeout_secs: u64,
    pub provider_domain: String,
    pub default_region: String,
    pub show_progress: bool,
    pub format: LineFormat,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            target: String::new(),
            wordlist: None,
            output: None,
            concurrency: DEFAULT_CONCURRENCY,
            rate_limit: 0,
            include_code: None,
            exclude_codes: BTreeSet::new(),
            acl_fallback: false,
            feeds_enabled: true,
            extra_candidates: Vec::new(),
            verbosity: 0,
            probe_timeout_secs: 5,
            feed_timeout_secs: 10,
            provider_domain: DEFAULT_PROVIDER_DOMAIN.to_string(),
            default_region: DEFAULT_REGION.to_string(),
            show_progress: true,
            format: LineFormat::Text,
        }
    }
}

impl ScanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| ScanError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&contents).map_err(|e| ScanError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn with_target(mut self, target: &str) -> Self {
        self.target = target.to_string();
        self
    }

    pub fn with_wordlist(mut self, wordlist: PathBuf) -> Self {
        self.wordlist = Some(wordlist);
        self
    }

    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_rate_limit(mut self, rate_limit: u32) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    pub fn with_include_code(mut self, code: u16) -> Self {
        self.include_code = Some(code);
        self
    }

    pub fn with_exclude_codes<I: IntoIterator<Item = u16>>(mut self, codes: I) -> Self {
        self.exclude_codes.extend(codes);
        self
    }

    pub fn with_acl_fallback(mut self, enabled: bool) -> Self {
        self.acl_fallback = enabled;
        self
    }

    pub fn with_feeds(mut self, enabled: bool) -> Self {
        self.feeds_enabled = enabled;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.target.trim().is_empty() {
            return Err(ScanError::MissingTarget);
        }
        if self.concurrency == 0 {
            return Err(ScanError::InvalidConfig("concurrency must be greater than 0".to_string()));
        }
        if !(1..=60).contains(&self.probe_timeout_secs) {
            return Err(ScanError::InvalidConfig(
                "probe timeout must be between 1 and 60 seconds".to_string(),
            ));
        }
        if self.feed_timeout_secs == 0 {
            return Err(ScanError::InvalidConfig("feed timeout must be greater than 0".to_string()));
        }
        if self.provider_domain.trim().is_empty() {
            return Err(ScanError::InvalidConfig("provider domain must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn filter(&self) -> FilterSpec {
        FilterSpec {
            include_code: self.include_code,
            exclude_codes: self.exclude_codes.clone(),
        }
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    pub fn feed_timeout(&self) -> Duration {
        Duration::from_secs(self.feed_timeout_secs)
    }
}
