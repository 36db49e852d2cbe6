use async_trait::async_trait;

use crate::domain::{RemoteStatus, SessionId};

/// The remote side of the per-job protocol. Every call is one HTTP request.
#[async_trait]
pub trait TranscriptionService: Send + Sync {
    async fn upload(&self, file_name: &str, audio: Vec<u8>)
    -> Result<SessionId, TranscriptionError>;

    async fn status(&self, session: &SessionId) -> Result<RemoteStatus, TranscriptionError>;

    async fn fetch_result(
        &self,
        session: &SessionId,
        artifact: &str,
    ) -> Result<String, TranscriptionError>;

    async fn clean(&self, session: &SessionId) -> Result<(), TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("can't upload (status {status}): {body}")]
    UploadRejected { status: u16, body: String },
    #[error("can't {operation} (status {status}): {body}")]
    RequestRejected {
        operation: &'static str,
        status: u16,
        body: String,
    },
    #[error("{0}")]
    RemoteReported(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("rate limited: {0}")]
    RateLimited(String),
}
