// Tue Jan 13 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Permission {
    Public,
    Private,
    Unknown,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Public => "PUBLIC",
            Permission::Private => "PRIVATE",
            Permission::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of probing one candidate. Built once by the classifier and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub candidate: String,
    pub url: String,
    pub exists: bool,
    /// `None` when the existence probe failed at the transport level.
    pub status: Option<u16>,
    pub permission: Permission,
    pub region: Option<String>,
    pub object_count: Option<u64>,
    pub total_size_bytes: Option<u64>,
}

impl ProbeResult {
    pub fn unreachable(candidate: &str, url: &str) -> Self {
        Self {
            candidate: candidate.to_string(),
            url: url.to_string(),
            exists: false,
            status: None,
            permission: Permission::Unknown,
            region: None,
            object_count: None,
            total_size_bytes: None,
        }
    }

    pub fn is_public(&self) -> bool {
        self.permission == Permission::Public
    }

    pub fn status_label(&self) -> String {
        match self.status {
            Some(code) => code.to_string(),
            None => "none".to_string(),
        }
    }
}
