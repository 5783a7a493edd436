// Tue Jan 13 2026 - Alex

use crate::probe::result::ProbeResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineFormat {
    #[default]
    Text,
    Json,
}

pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

/// `<url> | <status> | <permission>`, extended with the region and listing
/// stats when they are known.
pub fn format_line(result: &ProbeResult) -> String {
    let mut line = format!(
        "{} | {} | {}",
        result.url,
        result.status_label(),
        result.permission
    );

    if let Some(region) = &result.region {
        line.push_str(" | ");
        line.push_str(region);
    }

    if let Some(count) = result.object_count {
        let noun = if count == 1 { "object" } else { "objects" };
        line.push_str(&format!(" | {} {}", count, noun));
        if let Some(size) = result.total_size_bytes {
            line.push_str(&format!(" | {}", format_bytes(size)));
        }
    }

    line
}

pub fn render(result: &ProbeResult, format: LineFormat) -> String {
    match format {
        LineFormat::Text => format_line(result),
        LineFormat::Json => serde_json::to_string(result).unwrap_or_else(|_| format_line(result)),
    }
}
