// Tue Jan 13 2026 - Alex

pub mod filter;
pub mod formatter;
pub mod sink;

pub use filter::FilterSpec;
pub use formatter::{format_bytes, format_line, LineFormat};
pub use sink::{Destination, ResultSink};
