//! Interval scheduler for synchronization passes

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Handle for stopping a running scheduler from another thread.
#[derive(Debug, Clone)]
pub struct StopHandle {
    stop: Arc<AtomicBool>,
}

impl StopHandle {
    /// Request the scheduler to exit after the current tick or sleep slice.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }
}

/// Owns the polling-loop state: the tick interval and the stop flag.
///
/// One logical worker: each tick runs to completion before the scheduler
/// sleeps the interval, so passes never overlap. The tick itself decides
/// what a failure means; the scheduler just keeps ticking.
#[derive(Debug)]
pub struct Scheduler {
    interval: Duration,
    stop: Arc<AtomicBool>,
}

/// Sleep granularity so a stop request is honored promptly mid-interval.
const SLEEP_SLICE: Duration = Duration::from_millis(200);

impl Scheduler {
    /// Create a scheduler ticking every `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The configured tick interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Handle to stop the loop from another thread.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            stop: Arc::clone(&self.stop),
        }
    }

    /// Run `tick` forever at the configured interval until stopped.
    ///
    /// The first tick fires immediately. Tick errors are the tick's own
    /// business (log and move on); they never end the loop.
    pub fn run<F>(&self, mut tick: F)
    where
        F: FnMut(),
    {
        while !self.stop.load(Ordering::SeqCst) {
            tick();
            self.sleep_interval();
        }
    }

    fn sleep_interval(&self) {
        let mut remaining = self.interval;
        while remaining > Duration::ZERO && !self.stop.load(Ordering::SeqCst) {
            let slice = remaining.min(SLEEP_SLICE);
            std::thread::sleep(slice);
            remaining = remaining.saturating_sub(slice);
        }
    }
}
