mod progress_reporter;
mod transcription_service;

pub use progress_reporter::{ProgressReporter, ProgressTracker};
pub use transcription_service::{TranscriptionError, TranscriptionService};
