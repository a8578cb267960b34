use std::time::{Duration, Instant};

/// Counters for one run.
#[derive(Debug)]
pub struct RunStats {
    pub total: usize,
    pub copied: usize,
    pub skipped: usize,
    started: Instant,
}

impl RunStats {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            copied: 0,
            skipped: 0,
            started: Instant::now(),
        }
    }

    pub fn record_copied(&mut self) {
        self.copied += 1;
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn handled(&self) -> usize {
        self.copied + self.skipped
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn progress_lines(&self) -> [String; 2] {
        progress_lines(self.handled(), self.total, self.elapsed())
    }

    pub fn summary_lines(&self) -> [String; 3] {
        [
            format!("Total Images Processed: {}", self.copied),
            format!("Total Images Skipped: {}", self.skipped),
            format!("Total Operation Time: {}", format_clock(self.elapsed())),
        ]
    }
}

/// Percentage complete after `done` of `total` files.
pub fn percent(done: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    done as f64 / total as f64 * 100.0
}

/// Average time per handled file times the files still to go.
pub fn eta(elapsed: Duration, done: usize, total: usize) -> Duration {
    if done == 0 {
        return Duration::ZERO;
    }
    let remaining = total.saturating_sub(done) as u32;
    (elapsed / done as u32) * remaining
}

/// `MM:SS`, minutes keep counting past 59.
pub fn format_clock(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

pub fn progress_lines(done: usize, total: usize, elapsed: Duration) -> [String; 2] {
    [
        format!(
            "Processing image {}/{} ({:.2}%)",
            done,
            total,
            percent(done, total)
        ),
        format!(
            "Estimated time remaining: {}",
            format_clock(eta(elapsed, done, total))
        ),
    ]
}
