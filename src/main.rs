// Tue Jan 13 2026 - Alex

use anyhow::Context;
use bucket_hunter::{
    config::ScanConfig,
    engine::ScanScheduler,
    error::ScanError,
    output::LineFormat,
    pipeline,
    ui::{Banner, ScanProgress},
    utils::{format_duration, init_logging},
};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version)]
#[command(about = "Discover and audit S3 buckets for a target name", long_about = None)]
struct Args {
    /// Target name used as the base of every candidate
    #[arg(short, long)]
    target: Option<String>,

    /// Wordlist file, one word per line
    #[arg(short, long)]
    wordlist: Option<PathBuf>,

    /// Also write accepted results to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON config file; command-line flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    concurrency: Option<usize>,

    /// Maximum probes started per second (0 = unlimited)
    #[arg(short, long)]
    rate: Option<u32>,

    /// Only report results with this status code
    #[arg(long)]
    include_code: Option<u16>,

    /// Never report results with these status codes
    #[arg(long, value_delimiter = ',')]
    exclude_codes: Vec<u16>,

    /// Fall back to `aws s3 ls --no-sign-request` when the HTTP listing is inconclusive
    #[arg(long)]
    acl_fallback: bool,

    /// Skip the keyword-search and scrape feeds
    #[arg(long)]
    no_feeds: bool,

    /// Extra bucket names to probe as-is
    #[arg(long, value_delimiter = ',')]
    extra: Vec<String>,

    /// Probe timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Emit JSON lines instead of `url | status | permission`
    #[arg(long)]
    json: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(long)]
    no_progress: bool,

    #[arg(long)]
    no_banner: bool,
}

impl Args {
    fn into_config(self) -> anyhow::Result<ScanConfig> {
        let mut config = match &self.config {
            Some(path) => ScanConfig::from_file(path)?,
            None => ScanConfig::default(),
        };

        if let Some(target) = self.target {
            config.target = target;
        }
        if let Some(wordlist) = self.wordlist {
            config.wordlist = Some(wordlist);
        }
        if let Some(output) = self.output {
            config.output = Some(output);
        }
        if let Some(concurrency) = self.concurrency {
            config.concurrency = concurrency;
        }
        if let Some(rate) = self.rate {
            config.rate_limit = rate;
        }
        if let Some(code) = self.include_code {
            config.include_code = Some(code);
        }
        if let Some(timeout) = self.timeout {
            config.probe_timeout_secs = timeout;
        }

        config.exclude_codes.extend(self.exclude_codes);
        config.extra_candidates.extend(self.extra);
        config.acl_fallback |= self.acl_fallback;
        config.feeds_enabled &= !self.no_feeds;
        config.verbosity = config.verbosity.max(self.verbose);
        config.show_progress &= !self.no_progress;
        if self.json {
            config.format = LineFormat::Json;
        }

        Ok(config)
    }
}

fn main() {
    let args = Args::parse();
    let interactive = atty::is(atty::Stream::Stderr);
    let no_banner = args.no_banner;

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    init_logging(config.verbosity, interactive);

    if !no_banner {
        Banner::new()
            .with_subtitle("S3 bucket discovery")
            .with_version(env!("CARGO_PKG_VERSION"))
            .with_color(interactive)
            .print();
    }

    if let Err(e) = run(config, interactive) {
        eprintln!("{} {:#}", "[!]".red(), e);
        if matches!(e.downcast_ref::<ScanError>(), Some(ScanError::MissingTarget)) {
            eprintln!("Usage: bucket-hunter -t <target> [-w wordlist] [-o output]");
        }
        std::process::exit(1);
    }
}

fn run(config: ScanConfig, interactive: bool) -> anyhow::Result<()> {
    config.validate()?;
    let start_time = Instant::now();

    let sink = pipeline::build_sink(&config)?;
    let words = pipeline::load_words(&config)?;

    eprintln!("{} Target: {}", "[*]".blue(), config.target.bold());
    let feeds = pipeline::build_feeds(&config, std::env::var("GHW_API_KEY").ok())?;
    let candidates = pipeline::build_candidates(&config.target, &words, feeds)?;
    eprintln!("{} {} candidates queued", "[*]".blue(), candidates.len());

    let classifier = pipeline::build_classifier(&config).context("failed to set up the probe client")?;
    let scheduler = ScanScheduler::new(Arc::new(classifier))
        .with_concurrency(config.concurrency)
        .with_rate_limit(config.rate_limit);

    let run = scheduler.run(candidates);
    let progress = ScanProgress::new(run.queued() as u64, run.progress(), config.show_progress && interactive);

    let summary = pipeline::drain(run, &sink, &progress);
    progress.finish();

    for label in sink.failed_destinations() {
        eprintln!("{} Output to {} was incomplete", "[!]".yellow(), label);
    }

    eprintln!();
    eprintln!(
        "{} Scanned {} candidates in {}",
        "[+]".green(),
        summary.scanned,
        format_duration(start_time.elapsed())
    );
    eprintln!(
        "{} Buckets found: {} ({} public, {} reported)",
        "[+]".green(),
        summary.found.to_string().green(),
        summary.public.to_string().red(),
        summary.emitted
    );

    Ok(())
}
