use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{ProgressReporter, TranscriptionError, TranscriptionService};
use crate::domain::{ArtifactNames, Job, JobOutcome, ProtocolStage, SessionId};

use super::ErrorAggregator;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

const UPLOADING_STATUS: &str = "Uploading";

/// Runs the upload → poll → fetch → cleanup protocol for one job at a time.
///
/// Any error inside the protocol is turned into [`JobOutcome::Failed`] here and
/// counted once in the shared [`ErrorAggregator`].
pub struct JobProcessor {
    service: Arc<dyn TranscriptionService>,
    errors: Arc<ErrorAggregator>,
    artifacts: ArtifactNames,
    poll_interval: Duration,
}

struct Transcript {
    primary: String,
    restored: Option<String>,
}

impl JobProcessor {
    pub fn new(
        service: Arc<dyn TranscriptionService>,
        errors: Arc<ErrorAggregator>,
        artifacts: ArtifactNames,
        poll_interval: Duration,
    ) -> Self {
        Self {
            service,
            errors,
            artifacts,
            poll_interval,
        }
    }

    pub fn errors(&self) -> &Arc<ErrorAggregator> {
        &self.errors
    }

    pub async fn process(&self, job: &Job, progress: &dyn ProgressReporter) -> JobOutcome {
        if outputs_exist(job).await {
            tracing::debug!(output = %job.output_path.display(), "Outputs already present, skipping");
            return JobOutcome::Exists;
        }

        let mut stage = ProtocolStage::Idle;
        match self.run_protocol(job, progress, &mut stage).await {
            Ok(()) => {
                tracing::info!(output = %job.output_path.display(), "Transcription completed");
                JobOutcome::Done
            }
            Err(e) => {
                let failures = self.errors.increment();
                tracing::warn!(
                    error = %e,
                    stage = %stage,
                    failures,
                    "Transcription job failed"
                );
                advance(&mut stage, ProtocolStage::Failed);
                JobOutcome::Failed(e.to_string())
            }
        }
    }

    async fn run_protocol(
        &self,
        job: &Job,
        progress: &dyn ProgressReporter,
        stage: &mut ProtocolStage,
    ) -> Result<(), JobError> {
        progress.update(0.0, UPLOADING_STATUS);

        let audio = tokio::fs::read(&job.input_path)
            .await
            .map_err(|source| JobError::ReadInput {
                path: job.input_path.clone(),
                source,
            })?;

        let session = self
            .service
            .upload(&job.upload_file_name(), audio)
            .await?;
        advance(stage, ProtocolStage::Submitted);
        tracing::debug!(session = %session, "Audio uploaded");

        if let Err(e) = self.collect(job, &session, progress, stage).await {
            self.release_after_failure(&session).await;
            return Err(e);
        }

        self.service.clean(&session).await?;
        advance(stage, ProtocolStage::Cleaned);
        tracing::debug!(session = %session, "Remote session cleaned");

        Ok(())
    }

    async fn collect(
        &self,
        job: &Job,
        session: &SessionId,
        progress: &dyn ProgressReporter,
        stage: &mut ProtocolStage,
    ) -> Result<(), JobError> {
        advance(stage, ProtocolStage::Polling);
        self.wait_for_completion(session, progress).await?;
        advance(stage, ProtocolStage::Completed);

        let transcript = self.fetch(job, session).await?;
        advance(stage, ProtocolStage::Fetched);

        write_output(&job.output_path, &transcript.primary).await?;
        if let (Some(path), Some(restored)) = (&job.secondary_output_path, &transcript.restored) {
            write_output(path, restored).await?;
        }

        Ok(())
    }

    async fn wait_for_completion(
        &self,
        session: &SessionId,
        progress: &dyn ProgressReporter,
    ) -> Result<(), JobError> {
        loop {
            let status = self.service.status(session).await?;
            progress.update(status.progress, &status.status);

            if let Some(error) = status.reported_error() {
                return Err(TranscriptionError::RemoteReported(error.to_string()).into());
            }
            if status.is_completed() {
                return Ok(());
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }

    async fn fetch(&self, job: &Job, session: &SessionId) -> Result<Transcript, JobError> {
        let primary = self
            .service
            .fetch_result(session, &self.artifacts.primary)
            .await?;

        let restored = if job.wants_restored() {
            Some(
                self.service
                    .fetch_result(session, &self.artifacts.restored)
                    .await?,
            )
        } else {
            None
        };

        Ok(Transcript { primary, restored })
    }

    async fn release_after_failure(&self, session: &SessionId) {
        if let Err(e) = self.service.clean(session).await {
            tracing::warn!(
                error = %e,
                session = %session,
                "Failed to clean remote session after job failure"
            );
        }
    }
}

fn advance(stage: &mut ProtocolStage, next: ProtocolStage) {
    debug_assert!(
        stage.can_transition_to(next),
        "invalid protocol transition {} -> {}",
        stage,
        next
    );
    tracing::debug!(from = %stage, to = %next, "Protocol stage transition");
    *stage = next;
}

async fn outputs_exist(job: &Job) -> bool {
    for path in job.output_paths() {
        if !non_empty_file(path).await {
            return false;
        }
    }
    true
}

async fn non_empty_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file() && m.len() > 0)
        .unwrap_or(false)
}

async fn write_output(path: &Path, contents: &str) -> Result<(), JobError> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| JobError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })
}

#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("can't read '{}': {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("can't write '{}': {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{0}")]
    Transcription(#[from] TranscriptionError),
}
