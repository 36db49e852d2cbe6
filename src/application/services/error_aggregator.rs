use std::sync::atomic::{AtomicUsize, Ordering};

/// Failure counter shared by every worker of a run.
#[derive(Debug, Default)]
pub struct ErrorAggregator {
    count: AtomicUsize,
}

impl ErrorAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one failed job and returns the new total.
    pub fn increment(&self) -> usize {
        self.count.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub fn read(&self) -> usize {
        self.count.load(Ordering::Acquire)
    }
}
