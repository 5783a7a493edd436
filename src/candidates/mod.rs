// Tue Jan 13 2026 - Alex

pub mod aggregator;
pub mod feeds;
pub mod generator;
pub mod wordlist;

pub use aggregator::{aggregate, SourceAggregator};
pub use feeds::{Feed, GrayHatFeed, OsintFeed, StaticFeed};
pub use generator::{generate, CandidateSet, ENVIRONMENTS};
pub use wordlist::{builtin_words, load_wordlist, resolve_words};
