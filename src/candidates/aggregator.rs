// Tue Jan 13 2026 - Alex

use crate::candidates::feeds::Feed;
use crate::candidates::generator::CandidateSet;
use log::info;
use std::thread;

pub struct SourceAggregator {
    feeds: Vec<Box<dyn Feed>>,
}

impl SourceAggregator {
    pub fn new() -> Self {
        Self { feeds: Vec::new() }
    }

    pub fn with_feed(mut self, feed: Box<dyn Feed>) -> Self {
        self.feeds.push(feed);
        self
    }

    pub fn feed_count(&self) -> usize {
        self.feeds.len()
    }

    pub fn aggregate(&self, target: &str, generated: CandidateSet) -> CandidateSet {
        aggregate(target, generated, &self.feeds)
    }
}

impl Default for SourceAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Unions `generated` with every feed's names. Feeds run concurrently but
/// their results are merged in declaration order, so the output order only
/// depends on the inputs.
pub fn aggregate(target: &str, generated: CandidateSet, feeds: &[Box<dyn Feed>]) -> CandidateSet {
    let mut merged = generated;

    let feed_results: Vec<(&str, Vec<String>)> = thread::scope(|scope| {
        let handles: Vec<_> = feeds
            .iter()
            .map(|feed| scope.spawn(move || (feed.name(), feed.fetch(target))))
            .collect();

        handles
            .into_iter()
            .filter_map(|handle| handle.join().ok())
            .collect()
    });

    for (name, names) in feed_results {
        let before = merged.len();
        merged.extend(names);
        info!("{} contributed {} new candidates", name, merged.len() - before);
    }

    merged
}
