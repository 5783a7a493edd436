// Tue Jan 13 2026 - Alex

use crate::probe::transport::HttpTransport;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

pub const GRAYHAT_ENDPOINT: &str = "https://buckets.grayhatwarfare.com/api/v1/buckets";
pub const OSINT_ENDPOINT: &str = "https://osint.sh/buckets/";

static S3_HOST: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z0-9\.-]+)\.s3\.amazonaws\.com").unwrap());

#[derive(Error, Debug)]
enum FeedError {
    #[error("feed unavailable: {0}")]
    Unavailable(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Payload(String),
}

/// External intelligence source of extra candidate names.
///
/// Any failure yields an empty list; callers cannot tell an unavailable feed
/// from one that found nothing.
pub trait Feed: Send + Sync {
    fn name(&self) -> &str;

    fn fetch(&self, target: &str) -> Vec<String>;
}

fn build_url(base: &str, key: &str, value: &str) -> Result<String, FeedError> {
    reqwest::Url::parse_with_params(base, &[(key, value)])
        .map(|url| url.to_string())
        .map_err(|e| FeedError::Unavailable(e.to_string()))
}

/// Keyword search against the GrayHatWarfare bucket index.
pub struct GrayHatFeed {
    transport: Arc<dyn HttpTransport>,
    api_key: Option<String>,
}

impl GrayHatFeed {
    pub fn new(transport: Arc<dyn HttpTransport>, api_key: Option<String>) -> Self {
        Self { transport, api_key }
    }

    fn query(&self, target: &str) -> Result<Vec<String>, FeedError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| FeedError::Unavailable("no API key".to_string()))?;

        let url = build_url(GRAYHAT_ENDPOINT, "keywords", target)?;
        let auth = format!("Bearer {}", api_key);
        let response = self
            .transport
            .get(&url, &[("Authorization", auth.as_str())])
            .map_err(|e| FeedError::Unavailable(e.to_string()))?;

        if !response.is_ok() {
            return Err(FeedError::Status(response.status));
        }

        let payload: Value =
            serde_json::from_str(&response.body).map_err(|e| FeedError::Payload(e.to_string()))?;

        let mut buckets = Vec::new();
        collect_bucket_fields(&payload, &mut buckets);
        Ok(buckets)
    }
}

fn collect_bucket_fields(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                match child {
                    Value::String(name) if key == "bucket" => out.push(name.clone()),
                    _ => collect_bucket_fields(child, out),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_bucket_fields(item, out);
            }
        }
        _ => {}
    }
}

impl Feed for GrayHatFeed {
    fn name(&self) -> &str {
        "grayhatwarfare"
    }

    fn fetch(&self, target: &str) -> Vec<String> {
        self.query(target).unwrap_or_else(|e| {
            debug!("{} skipped: {}", self.name(), e);
            Vec::new()
        })
    }
}

/// Scrapes bucket hostnames out of the osint.sh search page.
pub struct OsintFeed {
    transport: Arc<dyn HttpTransport>,
}

impl OsintFeed {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    fn query(&self, target: &str) -> Result<Vec<String>, FeedError> {
        let url = build_url(OSINT_ENDPOINT, "q", target)?;
        let response = self
            .transport
            .get(&url, &[])
            .map_err(|e| FeedError::Unavailable(e.to_string()))?;

        if !response.is_ok() {
            return Err(FeedError::Status(response.status));
        }

        Ok(extract_bucket_hosts(&response.body))
    }
}

pub fn extract_bucket_hosts(body: &str) -> Vec<String> {
    S3_HOST
        .captures_iter(body)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

impl Feed for OsintFeed {
    fn name(&self) -> &str {
        "osint.sh"
    }

    fn fetch(&self, target: &str) -> Vec<String> {
        self.query(target).unwrap_or_else(|e| {
            debug!("{} skipped: {}", self.name(), e);
            Vec::new()
        })
    }
}

/// Fixed list of names, independent of the target.
pub struct StaticFeed {
    name: String,
    names: Vec<String>,
}

impl StaticFeed {
    pub fn new(name: &str, names: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            names,
        }
    }
}

impl Feed for StaticFeed {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self, _target: &str) -> Vec<String> {
        self.names.clone()
    }
}
