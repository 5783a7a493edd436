// Tue Jan 13 2026 - Alex

pub mod acl;
pub mod classifier;
pub mod error;
pub mod listing;
pub mod result;
pub mod transport;

pub use acl::{AclProbe, AwsCliAcl, DisabledAcl};
pub use classifier::{bucket_exists, Classify, ProbeClassifier};
pub use error::ProbeError;
pub use listing::{parse_listing, ListingSummary};
pub use result::{Permission, ProbeResult};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
