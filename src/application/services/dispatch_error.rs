use crate::domain::JobId;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("job #{index} ({job_id}) was dropped without signalling completion")]
    CompletionLost { index: usize, job_id: JobId },
    #[error("producer task failed: {0}")]
    ProducerFailed(String),
    #[error("worker task failed: {0}")]
    WorkerFailed(String),
}
