//! Progress reporting for in-flight downloads.

use std::time::{Duration, Instant};

use dqsus_core::DatasetFile;

/// Callback invoked with `(file, downloaded_bytes, total_bytes)` as a
/// transfer progresses. `total_bytes` is `None` when the mirror does not
/// send a content length.
pub type ProgressFn = Box<dyn Fn(&DatasetFile, u64, Option<u64>) + Send + Sync>;

/// Rate-limiter for progress reports.
///
/// Keeps a callback from firing more often than the configured interval;
/// the first check after construction or [`reset`](Self::reset) always
/// passes.
#[derive(Debug)]
pub struct ProgressThrottle {
    last_emit: Option<Instant>,
    min_interval: Duration,
}

impl ProgressThrottle {
    /// Throttle with the given minimum interval between reports.
    #[must_use]
    pub const fn new(min_interval: Duration) -> Self {
        Self {
            last_emit: None,
            min_interval,
        }
    }

    /// Whether enough time has passed to report again.
    pub fn should_emit(&mut self) -> bool {
        let now = Instant::now();
        match self.last_emit {
            Some(last) if now.duration_since(last) < self.min_interval => false,
            _ => {
                self.last_emit = Some(now);
                true
            }
        }
    }

    /// Let the next check pass regardless of elapsed time.
    pub const fn reset(&mut self) {
        self.last_emit = None;
    }
}

impl Default for ProgressThrottle {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}
