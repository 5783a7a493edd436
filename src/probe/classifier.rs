// Tue Jan 13 2026 - Alex

use crate::probe::acl::{AclProbe, DisabledAcl};
use crate::probe::listing::parse_listing;
use crate::probe::result::{Permission, ProbeResult};
use crate::probe::transport::HttpTransport;
use log::{debug, trace};
use std::sync::Arc;

pub const DEFAULT_PROVIDER_DOMAIN: &str = "s3.amazonaws.com";
pub const DEFAULT_REGION: &str = "us-east-1";
pub const REGION_HEADER: &str = "x-amz-bucket-region";

/// Existence policy: only 200 and 403 mean a bucket answered under that name.
pub fn bucket_exists(status: u16) -> bool {
    matches!(status, 200 | 403)
}

pub trait Classify: Send + Sync {
    fn classify(&self, candidate: &str) -> ProbeResult;
}

pub struct ProbeClassifier {
    transport: Arc<dyn HttpTransport>,
    acl: Arc<dyn AclProbe>,
    provider_domain: String,
    default_region: String,
}

impl ProbeClassifier {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            acl: Arc::new(DisabledAcl),
            provider_domain: DEFAULT_PROVIDER_DOMAIN.to_string(),
            default_region: DEFAULT_REGION.to_string(),
        }
    }

    pub fn with_acl(mut self, acl: Arc<dyn AclProbe>) -> Self {
        self.acl = acl;
        self
    }

    pub fn with_provider_domain(mut self, domain: &str) -> Self {
        self.provider_domain = domain.to_string();
        self
    }

    pub fn with_default_region(mut self, region: &str) -> Self {
        self.default_region = region.to_string();
        self
    }

    pub fn endpoint(&self, candidate: &str) -> String {
        format!("http://{}.{}", candidate, self.provider_domain)
    }

    fn classify_permission(&self, candidate: &str, endpoint: &str, status: u16) -> (Permission, Option<(u64, u64)>) {
        if status == 403 {
            return (Permission::Private, None);
        }

        let listing_url = format!("{}?list-type=2", endpoint);
        match self.transport.get(&listing_url, &[]) {
            Ok(response) if response.is_ok() => {
                if let Some(summary) = parse_listing(&response.body) {
                    return (
                        Permission::Public,
                        Some((summary.object_count, summary.total_size_bytes)),
                    );
                }
                trace!("{}: listing body not parseable", candidate);
            }
            Ok(response) => trace!("{}: listing returned {}", candidate, response.status),
            Err(e) => trace!("{}: listing failed: {}", candidate, e),
        }

        if self.acl.is_available() && self.acl.anonymous_access(candidate) {
            debug!("{}: anonymous access confirmed by {}", candidate, self.acl.name());
            return (Permission::Public, None);
        }

        (Permission::Private, None)
    }

    fn discover_region(&self, endpoint: &str) -> String {
        self.transport
            .head(endpoint)
            .ok()
            .and_then(|response| response.header(REGION_HEADER).map(str::to_string))
            .filter(|region| !region.is_empty())
            .unwrap_or_else(|| self.default_region.clone())
    }
}

impl Classify for ProbeClassifier {
    fn classify(&self, candidate: &str) -> ProbeResult {
        let endpoint = self.endpoint(candidate);
        debug!("Checking {}", endpoint);

        let status = match self.transport.get_status(&endpoint) {
            Ok(response) => response.status,
            Err(e) => {
                debug!("{}: {}", endpoint, e);
                return ProbeResult::unreachable(candidate, &endpoint);
            }
        };

        if !bucket_exists(status) {
            return ProbeResult {
                candidate: candidate.to_string(),
                url: endpoint,
                exists: false,
                status: Some(status),
                permission: Permission::Unknown,
                region: None,
                object_count: None,
                total_size_bytes: None,
            };
        }

        let (permission, stats) = self.classify_permission(candidate, &endpoint, status);
        let region = self.discover_region(&endpoint);

        ProbeResult {
            candidate: candidate.to_string(),
            url: endpoint,
            exists: true,
            status: Some(status),
            permission,
            region: Some(region),
            object_count: stats.map(|(count, _)| count),
            total_size_bytes: stats.map(|(_, size)| size),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::probe::error::ProbeError;
    use crate::probe::transport::HttpResponse;
    use parking_lot::Mutex;
    use std::collections::HashMap;

    #[derive(Default)]
    pub(crate) struct FakeTransport {
        gets: HashMap<String, HttpResponse>,
        heads: HashMap<String, HttpResponse>,
        truncated: HashMap<String, HttpResponse>,
        pub(crate) calls: Mutex<Vec<String>>,
    }

    impl FakeTransport {
        pub(crate) fn on_get(mut self, url: &str, response: HttpResponse) -> Self {
            self.gets.insert(url.to_string(), response);
            self
        }

        /// Status and headers arrive for `url`, the body never does.
        pub(crate) fn on_truncated_get(mut self, url: &str, response: HttpResponse) -> Self {
            self.truncated.insert(url.to_string(), response);
            self
        }

        pub(crate) fn on_head(mut self, url: &str, response: HttpResponse) -> Self {
            self.heads.insert(url.to_string(), response);
            self
        }
    }

    impl HttpTransport for FakeTransport {
        fn get(&self, url: &str, _headers: &[(&str, &str)]) -> Result<HttpResponse, ProbeError> {
            self.calls.lock().push(format!("GET {}", url));
            if self.truncated.contains_key(url) {
                return Err(ProbeError::Body("connection closed mid-body".to_string()));
            }
            self.gets
                .get(url)
                .cloned()
                .ok_or_else(|| ProbeError::Transport("connection refused".to_string()))
        }

        fn get_status(&self, url: &str) -> Result<HttpResponse, ProbeError> {
            if let Some(response) = self.truncated.get(url) {
                self.calls.lock().push(format!("GET {}", url));
                return Ok(HttpResponse::new(response.status));
            }
            self.get(url, &[]).map(|response| HttpResponse::new(response.status))
        }

        fn head(&self, url: &str) -> Result<HttpResponse, ProbeError> {
            self.calls.lock().push(format!("HEAD {}", url));
            self.heads.get(url).cloned().ok_or(ProbeError::Timeout)
        }
    }

    struct FakeAcl {
        public: bool,
        calls: Mutex<usize>,
    }

    impl AclProbe for FakeAcl {
        fn name(&self) -> &str {
            "fake"
        }

        fn is_available(&self) -> bool {
            true
        }

        fn anonymous_access(&self, _bucket: &str) -> bool {
            *self.calls.lock() += 1;
            self.public
        }
    }

    const ROOT: &str = "http://acme.s3.amazonaws.com";
    const LIST: &str = "http://acme.s3.amazonaws.com?list-type=2";
    const LISTING: &str = "<ListBucketResult><Contents><Size>10</Size></Contents><Contents><Size>5</Size></Contents></ListBucketResult>";

    #[test]
    fn test_exists_policy() {
        assert!(bucket_exists(200));
        assert!(bucket_exists(403));
        assert!(!bucket_exists(404));
        assert!(!bucket_exists(301));
        assert!(!bucket_exists(500));
    }

    #[test]
    fn test_transport_failure_is_unknown() {
        let classifier = ProbeClassifier::new(Arc::new(FakeTransport::default()));
        let result = classifier.classify("acme");

        assert!(!result.exists);
        assert_eq!(result.status, None);
        assert_eq!(result.permission, Permission::Unknown);
        assert_eq!(result.region, None);
    }

    #[test]
    fn test_not_found_is_not_probed_further() {
        let transport = Arc::new(FakeTransport::default().on_get(ROOT, HttpResponse::new(404)));
        let classifier = ProbeClassifier::new(transport.clone());
        let result = classifier.classify("acme");

        assert!(!result.exists);
        assert_eq!(result.status, Some(404));
        assert_eq!(result.permission, Permission::Unknown);
        assert_eq!(transport.calls.lock().len(), 1);
    }

    #[test]
    fn test_forbidden_short_circuits_to_private() {
        let transport = Arc::new(
            FakeTransport::default()
                .on_get(ROOT, HttpResponse::new(403))
                .on_head(ROOT, HttpResponse::new(403).with_header(REGION_HEADER, "eu-west-1")),
        );
        let classifier = ProbeClassifier::new(transport.clone());
        let result = classifier.classify("acme");

        assert!(result.exists);
        assert_eq!(result.status, Some(403));
        assert_eq!(result.permission, Permission::Private);
        assert_eq!(result.region.as_deref(), Some("eu-west-1"));
        assert!(!transport.calls.lock().iter().any(|c| c.contains("list-type")));
    }

    #[test]
    fn test_status_survives_broken_root_body() {
        let transport = Arc::new(
            FakeTransport::default()
                .on_truncated_get(ROOT, HttpResponse::new(403))
                .on_head(ROOT, HttpResponse::new(403).with_header(REGION_HEADER, "us-west-1")),
        );
        let result = ProbeClassifier::new(transport).classify("acme");

        assert!(result.exists);
        assert_eq!(result.status, Some(403));
        assert_eq!(result.permission, Permission::Private);
        assert_eq!(result.region.as_deref(), Some("us-west-1"));
    }

    #[test]
    fn test_broken_listing_body_is_inconclusive() {
        let transport = Arc::new(
            FakeTransport::default()
                .on_truncated_get(ROOT, HttpResponse::new(200))
                .on_truncated_get(LIST, HttpResponse::new(200)),
        );
        let acl = Arc::new(FakeAcl { public: true, calls: Mutex::new(0) });
        let result = ProbeClassifier::new(transport).with_acl(acl.clone()).classify("acme");

        assert!(result.exists);
        assert_eq!(result.status, Some(200));
        assert_eq!(result.permission, Permission::Public);
        assert_eq!(result.object_count, None);
        assert_eq!(*acl.calls.lock(), 1);
    }

    #[test]
    fn test_public_listing_collects_stats() {
        let transport = Arc::new(
            FakeTransport::default()
                .on_get(ROOT, HttpResponse::new(200))
                .on_get(LIST, HttpResponse::new(200).with_body(LISTING)),
        );
        let classifier = ProbeClassifier::new(transport);
        let result = classifier.classify("acme");

        assert!(result.exists);
        assert_eq!(result.permission, Permission::Public);
        assert_eq!(result.object_count, Some(2));
        assert_eq!(result.total_size_bytes, Some(15));
        assert_eq!(result.region.as_deref(), Some(DEFAULT_REGION));
    }

    #[test]
    fn test_unparseable_listing_falls_back_to_acl() {
        let transport = Arc::new(
            FakeTransport::default()
                .on_get(ROOT, HttpResponse::new(200))
                .on_get(LIST, HttpResponse::new(200).with_body("<html></html>")),
        );

        let acl = Arc::new(FakeAcl { public: true, calls: Mutex::new(0) });
        let classifier = ProbeClassifier::new(transport.clone()).with_acl(acl.clone());
        let result = classifier.classify("acme");
        assert_eq!(result.permission, Permission::Public);
        assert_eq!(result.object_count, None);
        assert_eq!(*acl.calls.lock(), 1);

        let acl = Arc::new(FakeAcl { public: false, calls: Mutex::new(0) });
        let classifier = ProbeClassifier::new(transport).with_acl(acl);
        assert_eq!(classifier.classify("acme").permission, Permission::Private);
    }

    #[test]
    fn test_http_listing_wins_over_acl() {
        let transport = Arc::new(
            FakeTransport::default()
                .on_get(ROOT, HttpResponse::new(200))
                .on_get(LIST, HttpResponse::new(200).with_body(LISTING)),
        );
        let acl = Arc::new(FakeAcl { public: false, calls: Mutex::new(0) });
        let classifier = ProbeClassifier::new(transport).with_acl(acl.clone());

        assert_eq!(classifier.classify("acme").permission, Permission::Public);
        assert_eq!(*acl.calls.lock(), 0);
    }

    #[test]
    fn test_listing_transport_error_is_private_without_acl() {
        let transport = Arc::new(FakeTransport::default().on_get(ROOT, HttpResponse::new(200)));
        let classifier = ProbeClassifier::new(transport);
        let result = classifier.classify("acme");

        assert!(result.exists);
        assert_eq!(result.permission, Permission::Private);
    }

    #[test]
    fn test_custom_domain_and_region() {
        let transport = Arc::new(
            FakeTransport::default().on_get("http://acme.storage.test", HttpResponse::new(403)),
        );
        let classifier = ProbeClassifier::new(transport)
            .with_provider_domain("storage.test")
            .with_default_region("local-1");
        let result = classifier.classify("acme");

        assert_eq!(result.url, "http://acme.storage.test");
        assert_eq!(result.region.as_deref(), Some("local-1"));
    }
}
