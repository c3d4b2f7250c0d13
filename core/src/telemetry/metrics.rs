use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Point-in-time copy of the evaluation counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub evaluations: usize,
    pub in_range: usize,
    pub rejected: usize,
}

/// Counts evaluations, in-range hits, and rejected samples on behalf of
/// whatever drives the detector.
pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_evaluation(&self, in_range: bool) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.evaluations += 1;
            if in_range {
                metrics.in_range += 1;
            }
        }
    }

    pub fn record_rejected(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rejected += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(metrics) = self.inner.lock() {
            *metrics
        } else {
            MetricsSnapshot::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let recorder = MetricsRecorder::new();
        recorder.record_evaluation(true);
        recorder.record_evaluation(false);
        recorder.record_rejected();

        let snapshot = recorder.snapshot();
        assert_eq!(snapshot.evaluations, 2);
        assert_eq!(snapshot.in_range, 1);
        assert_eq!(snapshot.rejected, 1);
    }
}
