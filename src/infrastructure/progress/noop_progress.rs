use crate::application::ports::{ProgressReporter, ProgressTracker};
use crate::domain::Job;

pub struct NoopProgressTracker;

struct NoopProgressReporter;

impl ProgressReporter for NoopProgressReporter {
    fn update(&self, _progress: f64, _status: &str) {}
}

impl ProgressTracker for NoopProgressTracker {
    fn track(&self, _job: &Job) -> Box<dyn ProgressReporter> {
        Box::new(NoopProgressReporter)
    }
}
