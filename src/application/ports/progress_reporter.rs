use crate::domain::Job;

/// Receives `(progress, status)` updates for a single job.
pub trait ProgressReporter: Send + Sync {
    fn update(&self, progress: f64, status: &str);
}

/// Hands out one reporter per job as workers pick jobs up.
pub trait ProgressTracker: Send + Sync {
    fn track(&self, job: &Job) -> Box<dyn ProgressReporter>;
}
