// Tue Jan 13 2026 - Alex

use crate::error::{Result, ScanError};
use crate::output::filter::FilterSpec;
use crate::output::formatter::{render, LineFormat};
use crate::probe::result::ProbeResult;
use log::warn;
use parking_lot::Mutex;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct Destination {
    label: String,
    writer: Box<dyn Write + Send>,
    failed: bool,
}

impl Destination {
    pub fn new(label: &str, writer: Box<dyn Write + Send>) -> Self {
        Self {
            label: label.to_string(),
            writer,
            failed: false,
        }
    }

    pub fn stdout() -> Self {
        Self::new("stdout", Box::new(io::stdout()))
    }

    /// Creates or truncates `path`. Failure here is fatal for the run.
    pub fn file(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| ScanError::OutputCreate {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(&path.display().to_string(), Box::new(BufWriter::new(file))))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    fn write_line(&mut self, line: &str) {
        if self.failed {
            return;
        }

        let outcome = writeln!(self.writer, "{}", line).and_then(|_| self.writer.flush());
        if let Err(e) = outcome {
            warn!("Writing to {} failed, disabling it for this scan: {}", self.label, e);
            self.failed = true;
        }
    }
}

/// Filters results and fans accepted lines out to every destination, one
/// line at a time.
pub struct ResultSink {
    filter: FilterSpec,
    format: LineFormat,
    destinations: Mutex<Vec<Destination>>,
    emitted: AtomicUsize,
}

impl ResultSink {
    pub fn new(filter: FilterSpec) -> Self {
        Self {
            filter,
            format: LineFormat::Text,
            destinations: Mutex::new(Vec::new()),
            emitted: AtomicUsize::new(0),
        }
    }

    pub fn with_format(mut self, format: LineFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_destination(self, destination: Destination) -> Self {
        self.destinations.lock().push(destination);
        self
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    /// Returns the line that was written, or `None` if the result was
    /// filtered out.
    pub fn accept(&self, result: &ProbeResult) -> Option<String> {
        if !self.filter.accepts(result) {
            return None;
        }

        let line = render(result, self.format);
        let mut destinations = self.destinations.lock();
        for destination in destinations.iter_mut() {
            destination.write_line(&line);
        }
        self.emitted.fetch_add(1, Ordering::SeqCst);

        Some(line)
    }

    pub fn emitted(&self) -> usize {
        self.emitted.load(Ordering::SeqCst)
    }

    pub fn failed_destinations(&self) -> Vec<String> {
        self.destinations
            .lock()
            .iter()
            .filter(|d| d.has_failed())
            .map(|d| d.label().to_string())
            .collect()
    }
}
