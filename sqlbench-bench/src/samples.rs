use std::sync::{Arc, Mutex};

/// Shared store of elapsed-time samples in milliseconds.
///
/// Cloning yields another handle to the same underlying sample set, so any
/// number of concurrent producers can feed one collector. `record`, `reset`
/// and `snapshot` each hold the lock for their whole critical section, so
/// none of them can observe a partially-applied state from another.
///
/// The lock is only poisoned if a recording thread panicked mid-benchmark;
/// at that point the run is already lost, so these methods panic on poison.
#[derive(Clone, Default)]
pub struct SampleCollector {
    samples: Arc<Mutex<Vec<f64>>>,
}

impl SampleCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one elapsed-time sample (milliseconds).
    pub fn record(&self, elapsed_ms: f64) {
        self.samples.lock().expect("sample lock poisoned").push(elapsed_ms);
    }

    /// Atomically discard every recorded sample.
    pub fn reset(&self) {
        self.samples.lock().expect("sample lock poisoned").clear();
    }

    /// Atomically copy out the samples recorded since the last reset.
    pub fn snapshot(&self) -> Vec<f64> {
        self.samples.lock().expect("sample lock poisoned").clone()
    }

    /// Number of samples recorded since the last reset.
    pub fn len(&self) -> usize {
        self.samples.lock().expect("sample lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
