mod noop_progress;
mod tracing_progress;

pub use noop_progress::NoopProgressTracker;
pub use tracing_progress::TracingProgressTracker;
