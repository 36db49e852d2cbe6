use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{TranscriptionError, TranscriptionService};
use crate::domain::{RemoteStatus, SessionId};

use super::RateLimiter;

pub const DEFAULT_BASE_URL: &str = "https://atpazinimas.intelektika.lt";
pub const DEFAULT_RECOGNIZER: &str = "ben";
pub const DEFAULT_UPLOAD_TIMEOUT: Duration = Duration::from_secs(20);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Which delete route releases a session on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupEndpoint {
    /// `DELETE /ausis/clean.service/delete/{id}`
    #[default]
    Current,
    /// `DELETE /ausis/clean.service/{id}`
    Legacy,
}

impl CleanupEndpoint {
    fn path(&self, session: &SessionId) -> String {
        match self {
            CleanupEndpoint::Current => format!("/ausis/clean.service/delete/{}", session),
            CleanupEndpoint::Legacy => format!("/ausis/clean.service/{}", session),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AusisClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub recognizer: String,
    pub speakers: Option<u32>,
    pub cleanup: CleanupEndpoint,
    pub upload_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for AusisClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            recognizer: DEFAULT_RECOGNIZER.to_string(),
            speakers: None,
            cleanup: CleanupEndpoint::default(),
            upload_timeout: DEFAULT_UPLOAD_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// HTTP client for the `ausis` transcription service.
///
/// Every request first passes through the shared [`RateLimiter`].
pub struct AusisClient {
    client: reqwest::Client,
    base_url: String,
    config: AusisClientConfig,
    limiter: Arc<RateLimiter>,
}

impl AusisClient {
    pub fn new(config: AusisClientConfig, limiter: Arc<RateLimiter>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            config,
            limiter,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn throttle(&self) -> Result<(), TranscriptionError> {
        self.limiter
            .acquire()
            .await
            .map_err(|e| TranscriptionError::RateLimited(e.to_string()))
    }
}

#[derive(Deserialize)]
struct UploadResponse {
    id: String,
}

#[derive(Deserialize)]
struct StatusResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    progress: Option<f64>,
    #[serde(default)]
    error: Option<String>,
}

impl StatusResponse {
    /// A non-empty `error` wins over everything else; otherwise `status` is required.
    fn into_remote_status(self) -> Result<RemoteStatus, TranscriptionError> {
        let progress = self.progress.unwrap_or_default();
        if let Some(error) = self.error.filter(|e| !e.is_empty()) {
            return Ok(RemoteStatus::new(
                self.status.unwrap_or_default(),
                progress,
                Some(error),
            ));
        }
        let status = self.status.ok_or_else(|| {
            TranscriptionError::MalformedResponse("status: missing status field".to_string())
        })?;
        Ok(RemoteStatus::new(status, progress, None))
    }
}

#[async_trait]
impl TranscriptionService for AusisClient {
    async fn upload(
        &self,
        file_name: &str,
        audio: Vec<u8>,
    ) -> Result<SessionId, TranscriptionError> {
        let file_part = multipart::Part::bytes(audio).file_name(file_name.to_string());

        let mut form = multipart::Form::new()
            .part("file", file_part)
            .text("recognizer", self.config.recognizer.clone());
        if let Some(speakers) = self.config.speakers {
            form = form.text("numberOfSpeakers", speakers.to_string());
        }

        let mut request = self
            .client
            .post(self.url("/ausis/transcriber/upload"))
            .timeout(self.config.upload_timeout)
            .multipart(form);
        if let Some(key) = self.config.api_key.as_deref().filter(|k| !k.is_empty()) {
            request = request.header(reqwest::header::AUTHORIZATION, format!("Key {}", key));
        }

        tracing::debug!(
            file = file_name,
            recognizer = %self.config.recognizer,
            "Uploading audio to transcription service"
        );

        self.throttle().await?;
        let response = request
            .send()
            .await
            .map_err(|e| TranscriptionError::Transport(format!("upload: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::UploadRejected { status, body });
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::MalformedResponse(format!("upload: {}", e)))?;

        Ok(SessionId::new(body.id))
    }

    async fn status(&self, session: &SessionId) -> Result<RemoteStatus, TranscriptionError> {
        let url = self.url(&format!("/ausis/status.service/status/{}", session));

        self.throttle().await?;
        let response = self
            .client
            .get(url)
            .timeout(self.config.request_timeout)
            .send()
            .await
            .map_err(|e| TranscriptionError::Transport(format!("status: {}", e)))?;

        let response = ensure_success(response, "get status").await?;
        let body: StatusResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::MalformedResponse(format!("status: {}", e)))?;

        body.into_remote_status()
    }

    async fn fetch_result(
        &self,
        session: &SessionId,
        artifact: &str,
    ) -> Result<String, TranscriptionError> {
        let url = self.url(&format!(
            "/ausis/result.service/result/{}/{}",
            session, artifact
        ));

        self.throttle().await?;
        let response = self
            .client
            .get(url)
            .timeout(self.config.request_timeout)
            .send()
            .await
            .map_err(|e| TranscriptionError::Transport(format!("result: {}", e)))?;

        let response = ensure_success(response, "get result").await?;
        let text = response
            .text()
            .await
            .map_err(|e| TranscriptionError::Transport(format!("result body: {}", e)))?;

        tracing::debug!(artifact, chars = text.len(), "Fetched transcription artifact");
        Ok(text)
    }

    async fn clean(&self, session: &SessionId) -> Result<(), TranscriptionError> {
        let url = self.url(&self.config.cleanup.path(session));

        self.throttle().await?;
        let response = self
            .client
            .delete(url)
            .timeout(self.config.request_timeout)
            .send()
            .await
            .map_err(|e| TranscriptionError::Transport(format!("clean: {}", e)))?;

        ensure_success(response, "clean transcription").await?;
        Ok(())
    }
}

async fn ensure_success(
    response: reqwest::Response,
    operation: &'static str,
) -> Result<reqwest::Response, TranscriptionError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    Err(TranscriptionError::RequestRejected {
        operation,
        status,
        body,
    })
}
