use std::fmt;

use super::Job;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// Outputs were already on disk; the remote service was not contacted.
    Exists,
    Done,
    Failed(String),
}

impl JobOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, JobOutcome::Failed(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobOutcome::Exists => "exists",
            JobOutcome::Done => "done",
            JobOutcome::Failed(_) => "error",
        }
    }

    pub fn describe(&self, job: &Job) -> String {
        match self {
            JobOutcome::Exists | JobOutcome::Done => {
                format!("{} - {}", job.output_path.display(), self.as_str())
            }
            JobOutcome::Failed(message) => {
                format!("    error {}: {}", job.input_path.display(), message)
            }
        }
    }
}

impl fmt::Display for JobOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobOutcome::Failed(message) => write!(f, "error: {}", message),
            other => f.write_str(other.as_str()),
        }
    }
}
