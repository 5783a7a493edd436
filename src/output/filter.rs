// Tue Jan 13 2026 - Alex

use crate::probe::result::ProbeResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Status-code policy applied to results before they are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub include_code: Option<u16>,
    pub exclude_codes: BTreeSet<u16>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include(mut self, code: u16) -> Self {
        self.include_code = Some(code);
        self
    }

    pub fn with_exclude<I: IntoIterator<Item = u16>>(mut self, codes: I) -> Self {
        self.exclude_codes.extend(codes);
        self
    }

    pub fn accepts(&self, result: &ProbeResult) -> bool {
        if !result.exists {
            return false;
        }

        if let Some(include) = self.include_code {
            if result.status != Some(include) {
                return false;
            }
        }

        match result.status {
            Some(code) => !self.exclude_codes.contains(&code),
            None => true,
        }
    }
}
