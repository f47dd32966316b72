use std::sync::Mutex;

/// Counters for rounds scored and caller contract faults.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    rounds_scored: usize,
    contract_faults: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                rounds_scored: 0,
                contract_faults: 0,
            }),
        }
    }

    pub fn record_round(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rounds_scored += 1;
        }
    }

    pub fn record_fault(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.contract_faults += 1;
        }
    }

    /// (rounds scored, contract faults)
    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (metrics.rounds_scored, metrics.contract_faults)
        } else {
            (0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
