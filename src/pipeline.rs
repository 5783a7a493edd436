// Tue Jan 13 2026 - Alex

use crate::candidates::{generate, resolve_words, CandidateSet, Feed, GrayHatFeed, OsintFeed, SourceAggregator, StaticFeed};
use crate::config::ScanConfig;
use crate::engine::ScanRun;
use crate::error::{Result, ScanError};
use crate::output::{Destination, ResultSink};
use crate::probe::{AclProbe, AwsCliAcl, DisabledAcl, HttpTransport, ProbeClassifier, ProbeResult, ReqwestTransport};
use crate::ui::ScanProgress;
use crate::utils::scoped_timer;
use log::{info, warn};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub scanned: usize,
    pub found: usize,
    pub public: usize,
    pub emitted: usize,
}

impl ScanSummary {
    pub fn record(&mut self, result: &ProbeResult, emitted: bool) {
        self.scanned += 1;
        if result.exists {
            self.found += 1;
        }
        if result.is_public() {
            self.public += 1;
        }
        if emitted {
            self.emitted += 1;
        }
    }
}

fn http_transport(timeout: std::time::Duration) -> Result<Arc<dyn HttpTransport>> {
    let transport = ReqwestTransport::new(timeout).map_err(|e| ScanError::Client(e.to_string()))?;
    Ok(Arc::new(transport))
}

/// Network feeds get their own transport so their timeout is independent of
/// the probe timeout.
pub fn build_feeds(config: &ScanConfig, grayhat_key: Option<String>) -> Result<Vec<Box<dyn Feed>>> {
    let mut feeds: Vec<Box<dyn Feed>> = Vec::new();

    if !config.extra_candidates.is_empty() {
        feeds.push(Box::new(StaticFeed::new("extra", config.extra_candidates.clone())));
    }

    if config.feeds_enabled {
        let transport = http_transport(config.feed_timeout())?;
        if grayhat_key.is_none() {
            info!("GHW_API_KEY not set, keyword search feed skipped");
        }
        feeds.push(Box::new(GrayHatFeed::new(transport.clone(), grayhat_key)));
        feeds.push(Box::new(OsintFeed::new(transport)));
    }

    Ok(feeds)
}

pub fn build_candidates(target: &str, words: &[String], feeds: Vec<Box<dyn Feed>>) -> Result<CandidateSet> {
    let _timer = scoped_timer("candidate generation");

    let generated = generate(target, words);
    info!("Generated {} permutations from {} words", generated.len(), words.len());

    let aggregator = feeds
        .into_iter()
        .fold(SourceAggregator::new(), |aggregator, feed| aggregator.with_feed(feed));
    let candidates = aggregator.aggregate(target, generated);

    if candidates.is_empty() {
        return Err(ScanError::EmptyCandidateSet);
    }
    Ok(candidates)
}

pub fn build_classifier(config: &ScanConfig) -> Result<ProbeClassifier> {
    let transport = http_transport(config.probe_timeout())?;

    let acl: Arc<dyn AclProbe> = if config.acl_fallback {
        let acl = AwsCliAcl::new(config.probe_timeout());
        if !acl.is_available() {
            warn!("ACL fallback requested but the aws CLI is not available");
        }
        Arc::new(acl)
    } else {
        Arc::new(DisabledAcl)
    };

    Ok(ProbeClassifier::new(transport)
        .with_acl(acl)
        .with_provider_domain(&config.provider_domain)
        .with_default_region(&config.default_region))
}

pub fn build_sink(config: &ScanConfig) -> Result<ResultSink> {
    let mut sink = ResultSink::new(config.filter())
        .with_format(config.format)
        .with_destination(Destination::stdout());

    if let Some(path) = &config.output {
        sink = sink.with_destination(Destination::file(path)?);
    }

    Ok(sink)
}

/// Word corpus for `config`: explicit file, local default file, or the
/// built-in list.
pub fn load_words(config: &ScanConfig) -> Result<Vec<String>> {
    let words = resolve_words(config.wordlist.as_deref())?;
    if words.is_empty() {
        warn!("Wordlist is empty, scanning permutation-free candidates only");
    }
    Ok(words)
}

/// Drains `run` into `sink`, keeping `progress` in step. Lines are written
/// with the bar suspended so they never interleave with it.
pub fn drain(run: ScanRun, sink: &ResultSink, progress: &ScanProgress) -> ScanSummary {
    let mut summary = ScanSummary::default();

    for result in run {
        let line = progress.suspend(|| sink.accept(&result));
        summary.record(&result, line.is_some());
        if line.is_some() {
            progress.set_found(summary.emitted);
        }
        progress.refresh();
    }

    summary
}
