use std::sync::Mutex;

use crate::application::ports::{ProgressReporter, ProgressTracker};
use crate::domain::Job;

/// Emits a `debug` event whenever a job's status label or progress changes.
pub struct TracingProgressTracker;

impl ProgressTracker for TracingProgressTracker {
    fn track(&self, job: &Job) -> Box<dyn ProgressReporter> {
        Box::new(TracingProgressReporter {
            name: job.display_name(),
            last: Mutex::new(None),
        })
    }
}

struct TracingProgressReporter {
    name: String,
    last: Mutex<Option<(f64, String)>>,
}

impl ProgressReporter for TracingProgressReporter {
    fn update(&self, progress: f64, status: &str) {
        let Ok(mut last) = self.last.lock() else {
            return;
        };
        let unchanged = last
            .as_ref()
            .is_some_and(|(p, s)| *p == progress && s == status);
        if unchanged {
            return;
        }
        *last = Some((progress, status.to_string()));

        tracing::debug!(file = %self.name, progress, status, "Transcription progress");
    }
}
