// Tue Jan 13 2026 - Alex

use crate::error::{Result, ScanError};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_WORDLIST_FILE: &str = "common_bucket_prefixes.txt";

pub const BUILTIN_WORDS: &[&str] = &[
    "admin", "api", "app", "archive", "assets", "attachments", "audit", "backup", "backups",
    "billing", "bucket", "build", "cdn", "client", "cloud", "config", "content", "corp",
    "customer", "dashboard", "data", "database", "db", "deploy", "docs", "downloads", "dump",
    "export", "files", "finance", "images", "img", "import", "infra", "internal", "invoices",
    "logs", "marketing", "media", "mobile", "private", "public", "raw", "release", "reports",
    "resources", "sandbox", "secrets", "share", "shared", "site", "static", "storage", "store",
    "support", "temp", "tmp", "upload", "uploads", "users", "video", "web", "website", "www",
];

/// One word per line; surrounding whitespace and blank lines are dropped.
pub fn parse_words(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn load_wordlist(path: &Path) -> Result<Vec<String>> {
    debug!("Loading wordlist: {}", path.display());
    let contents = fs::read_to_string(path).map_err(|source| ScanError::Wordlist {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_words(&contents))
}

pub fn builtin_words() -> Vec<String> {
    BUILTIN_WORDS.iter().map(|w| w.to_string()).collect()
}

/// Explicit path, then `common_bucket_prefixes.txt` in the working
/// directory, then the built-in list.
pub fn resolve_words(explicit: Option<&Path>) -> Result<Vec<String>> {
    if let Some(path) = explicit {
        return load_wordlist(path);
    }

    let default_path = PathBuf::from(DEFAULT_WORDLIST_FILE);
    if default_path.is_file() {
        return load_wordlist(&default_path);
    }

    Ok(builtin_words())
}
