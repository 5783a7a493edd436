// Tue Jan 13 2026 - Alex

use crate::engine::progress::ProgressCounter;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

const SCAN_TEMPLATE: &str =
    "{spinner:.cyan} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec}) {msg}";

/// Status line for one scan, driven by the shared progress counter.
pub struct ScanProgress {
    bar: ProgressBar,
    counter: Arc<ProgressCounter>,
}

impl ScanProgress {
    pub fn new(total: u64, counter: Arc<ProgressCounter>, enabled: bool) -> Self {
        let bar = if enabled {
            let bar = ProgressBar::new(total);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template(SCAN_TEMPLATE)
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("█▓▒░ "),
            );
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        } else {
            let bar = ProgressBar::new(total);
            bar.set_draw_target(ProgressDrawTarget::hidden());
            bar
        };

        Self { bar, counter }
    }

    pub fn set_found(&self, found: usize) {
        self.bar.set_message(format!("{} found", found));
    }

    pub fn refresh(&self) {
        self.bar.set_position(self.counter.get() as u64);
    }

    /// Runs `f` with the bar cleared so plain stdout lines stay intact.
    pub fn suspend<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.bar.suspend(f)
    }

    pub fn finish(&self) {
        self.refresh();
        self.bar.finish_and_clear();
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_follows_counter() {
        let counter = Arc::new(ProgressCounter::new());
        let progress = ScanProgress::new(10, counter.clone(), false);

        counter.increment();
        counter.increment();
        progress.refresh();
        assert_eq!(progress.position(), 2);

        let value = progress.suspend(|| 7);
        assert_eq!(value, 7);
    }
}
