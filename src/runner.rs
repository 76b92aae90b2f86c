// src/runner.rs
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{error, info};

use crate::config::consts::SLEEP_SLICE;
use crate::dom::PageSource;
use crate::engine::types::BoardSpec;
use crate::notify::{dispatch, AlertOutcome, Notifier, SkipReason};
use crate::progress::Progress;
use crate::scrape::scrape_jobs;
use crate::store::SeenJobs;

/// What one cycle did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleReport {
    /// Jobs returned by the scrape (after area filtering).
    pub scraped: usize,
    pub new_jobs: usize,
    pub alert: AlertOutcome,
    /// Set when the scrape failed outright.
    pub error: Option<String>,
}

impl CycleReport {
    fn quiet(scraped: usize) -> Self {
        Self { scraped, new_jobs: 0, alert: AlertOutcome::Skipped(SkipReason::NoNewJobs), error: None }
    }

    fn failed(error: String) -> Self {
        Self { error: Some(error), ..Self::quiet(0) }
    }
}

/// Owns the seen-set and drives scrape → filter → dedup → alert, one cycle at a time.
pub struct Monitor<S, N> {
    source: S,
    notifier: Option<N>,
    spec: &'static BoardSpec,
    areas: Vec<String>,
    interval: Duration,
    seen: SeenJobs,
}

impl<S: PageSource, N: Notifier> Monitor<S, N> {
    pub fn new(
        source: S,
        notifier: Option<N>,
        spec: &'static BoardSpec,
        areas: Vec<String>,
        interval: Duration,
    ) -> Self {
        Self { source, notifier, spec, areas, interval, seen: SeenJobs::new() }
    }

    pub fn seen(&self) -> &SeenJobs { &self.seen }

    /// A single scrape cycle.
    pub fn run_once(&mut self) -> CycleReport {
        info!(areas = ?self.areas, "starting scrape cycle");
        let result = scrape_jobs(&self.source, self.spec, &self.areas);

        // A failed scrape leaves the seen-set untouched.
        if let Some(err) = result.error {
            error!(error = %err, "scrape failed");
            return CycleReport::failed(err);
        }
        if result.jobs.is_empty() {
            info!("no jobs found this cycle");
            return CycleReport::quiet(0);
        }

        let scraped = result.jobs.len();
        let fresh = self.seen.delta(&result.jobs);
        if fresh.is_empty() {
            info!(scraped, "no new jobs, all already seen");
            return CycleReport::quiet(scraped);
        }

        info!(new = fresh.len(), scraped, "found new jobs");
        let alert = dispatch(self.notifier.as_ref(), &fresh, &self.areas, self.spec.origin);
        CycleReport { scraped, new_jobs: fresh.len(), alert, error: None }
    }

    /// Poll until `stop` is set. A running cycle always completes; only the
    /// sleep between cycles is cut short. Returns the number of cycles run.
    pub fn run(&mut self, stop: &AtomicBool, mut progress: Option<&mut dyn Progress>) -> u64 {
        let mut cycles = 0u64;
        while !stop.load(Ordering::SeqCst) {
            cycles += 1;
            if let Some(p) = progress.as_deref_mut() {
                p.begin(cycles);
            }

            let report = self.run_once();
            if let Some(p) = progress.as_deref_mut() {
                p.finish(cycles, &report);
                p.log(&format!("Sleeping {}s until next check...", self.interval.as_secs()));
            }

            info!(secs = self.interval.as_secs(), "sleeping until next check");
            if sleep_interruptible(self.interval, SLEEP_SLICE, stop) {
                break;
            }
        }
        info!(cycles, "monitor stopped");
        cycles
    }
}

/// Sleep for `total` in slices of at most `slice`, checking `stop` between
/// slices. Returns true if stopped early.
/// `total` may be arbitrarily large.
pub fn sleep_interruptible(total: Duration, slice: Duration, stop: &AtomicBool) -> bool {
    let start = Instant::now();
    loop {
        if stop.load(Ordering::SeqCst) {
            return true;
        }
        let elapsed = start.elapsed();
        if elapsed >= total {
            return false;
        }
        thread::sleep(slice.min(total - elapsed));
    }
}
