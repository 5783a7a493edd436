// Tue Jan 13 2026 - Alex

use once_cell::sync::Lazy;
use regex::Regex;

static LIST_RESULT: Lazy<Regex> = Lazy::new(|| Regex::new(r"<ListBucketResult[\s>]").unwrap());
static CONTENTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"<Contents>").unwrap());
static SIZE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<Size>\s*(\d+)\s*</Size>").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListingSummary {
    pub object_count: u64,
    pub total_size_bytes: u64,
}

/// Parses an anonymous `ListObjectsV2` response body.
///
/// Returns `None` if the body is not a bucket listing (error documents,
/// HTML, empty bodies).
pub fn parse_listing(body: &str) -> Option<ListingSummary> {
    if !LIST_RESULT.is_match(body) {
        return None;
    }

    let object_count = CONTENTS.find_iter(body).count() as u64;
    let total_size_bytes = SIZE
        .captures_iter(body)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u64>().ok())
        .fold(0u64, |acc, size| acc.saturating_add(size));

    Some(ListingSummary {
        object_count,
        total_size_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Name>acme-data</Name>
  <KeyCount>2</KeyCount>
  <Contents><Key>a.txt</Key><Size>1024</Size></Contents>
  <Contents><Key>b/c.json</Key><Size>2048</Size></Contents>
</ListBucketResult>"#;

    #[test]
    fn test_parse_listing_counts_and_sums() {
        let summary = parse_listing(LISTING).unwrap();
        assert_eq!(summary.object_count, 2);
        assert_eq!(summary.total_size_bytes, 3072);
    }

    #[test]
    fn test_parse_empty_bucket() {
        let body = r#"<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/"><Name>x</Name><KeyCount>0</KeyCount></ListBucketResult>"#;
        assert_eq!(parse_listing(body), Some(ListingSummary::default()));
    }

    #[test]
    fn test_error_document_is_not_a_listing() {
        let body = "<Error><Code>AccessDenied</Code><Message>Access Denied</Message></Error>";
        assert_eq!(parse_listing(body), None);
        assert_eq!(parse_listing(""), None);
        assert_eq!(parse_listing("<html><body>hi</body></html>"), None);
    }
}
