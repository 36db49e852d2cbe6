pub const COMPLETED_STATUS: &str = "COMPLETED";

/// One status poll answer from the transcription service.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteStatus {
    pub status: String,
    pub progress: f64,
    pub error: Option<String>,
}

impl RemoteStatus {
    pub fn new(status: impl Into<String>, progress: f64, error: Option<String>) -> Self {
        Self {
            status: status.into(),
            progress,
            error,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == COMPLETED_STATUS
    }

    /// The service-side error, ignoring empty strings.
    pub fn reported_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}
