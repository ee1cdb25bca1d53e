//! Per-session classification statistics.

use std::fmt;
use std::time::Duration;

/// Counters for the classifications a session has run.
///
/// Only requests that actually entered the pipeline are counted; `NotReady`
/// and `Busy` rejections are not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassificationStats {
    /// Requests that reached the preprocessing stage.
    pub total: usize,
    /// Requests that produced a ranked result.
    pub successful: usize,
    /// Requests that failed in some stage.
    pub failed: usize,
    /// Mean wall time of the inference stage, over requests that reached it,
    /// whether or not the engine succeeded.
    pub average_inference_time_ms: f64,
    inference_samples: usize,
}

impl ClassificationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of successful requests, 0.0 to 100.0.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.successful as f64 / self.total as f64) * 100.0
        }
    }

    /// Number of inference runs folded into the average.
    pub fn inference_count(&self) -> usize {
        self.inference_samples
    }

    pub(crate) fn record_inference(&mut self, elapsed: Duration) {
        let ms = elapsed.as_secs_f64() * 1000.0;
        let previous = self.average_inference_time_ms * self.inference_samples as f64;
        self.inference_samples += 1;
        self.average_inference_time_ms = (previous + ms) / self.inference_samples as f64;
    }

    pub(crate) fn record_outcome(&mut self, success: bool) {
        self.total += 1;
        if success {
            self.successful += 1;
        } else {
            self.failed += 1;
        }
    }
}

impl fmt::Display for ClassificationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} classified, {} failed ({:.1}% success), average inference {:.2} ms",
            self.successful,
            self.failed,
            self.success_rate(),
            self.average_inference_time_ms
        )
    }
}
