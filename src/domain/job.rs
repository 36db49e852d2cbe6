use std::path::{Path, PathBuf};

use super::{JobId, JobOutcome};

const FALLBACK_UPLOAD_NAME: &str = "audio";

/// One input file and the transcript file(s) it should produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: JobId,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub secondary_output_path: Option<PathBuf>,
}

impl Job {
    pub fn new(
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        secondary_output_path: Option<PathBuf>,
    ) -> Self {
        Self {
            id: JobId::new(),
            input_path: input_path.into(),
            output_path: output_path.into(),
            secondary_output_path,
        }
    }

    /// Base name sent with the multipart upload, with `..` sequences collapsed.
    pub fn upload_file_name(&self) -> String {
        let name = self
            .input_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut sanitized = name;
        while sanitized.contains("..") {
            sanitized = sanitized.replace("..", ".");
        }

        if sanitized.is_empty() || sanitized == "." {
            FALLBACK_UPLOAD_NAME.to_string()
        } else {
            sanitized
        }
    }

    /// Input file stem, used to label progress.
    pub fn display_name(&self) -> String {
        self.input_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input_path.display().to_string())
    }

    pub fn output_paths(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.output_path.as_path()).chain(self.secondary_output_path.as_deref())
    }

    pub fn wants_restored(&self) -> bool {
        self.secondary_output_path.is_some()
    }
}

/// A job handed back to the observer after its worker finished with it.
#[derive(Debug, Clone)]
pub struct CompletedJob {
    pub job: Job,
    pub outcome: JobOutcome,
}

impl CompletedJob {
    pub fn new(job: Job, outcome: JobOutcome) -> Self {
        Self { job, outcome }
    }

    pub fn is_failure(&self) -> bool {
        self.outcome.is_failure()
    }

    /// Single report line with embedded newlines flattened.
    pub fn report_line(&self) -> String {
        self.outcome.describe(&self.job).replace('\n', " ")
    }
}
