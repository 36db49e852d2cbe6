use std::fmt;

/// Where a job is in the upload → poll → fetch → cleanup protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolStage {
    Idle,
    Submitted,
    Polling,
    Completed,
    Fetched,
    Cleaned,
    Failed,
}

impl ProtocolStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolStage::Idle => "IDLE",
            ProtocolStage::Submitted => "SUBMITTED",
            ProtocolStage::Polling => "POLLING",
            ProtocolStage::Completed => "COMPLETED",
            ProtocolStage::Fetched => "FETCHED",
            ProtocolStage::Cleaned => "CLEANED",
            ProtocolStage::Failed => "FAILED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ProtocolStage::Cleaned | ProtocolStage::Failed)
    }

    /// Successor on the success path; `None` once terminal.
    pub fn next(&self) -> Option<ProtocolStage> {
        match self {
            ProtocolStage::Idle => Some(ProtocolStage::Submitted),
            ProtocolStage::Submitted => Some(ProtocolStage::Polling),
            ProtocolStage::Polling => Some(ProtocolStage::Completed),
            ProtocolStage::Completed => Some(ProtocolStage::Fetched),
            ProtocolStage::Fetched => Some(ProtocolStage::Cleaned),
            ProtocolStage::Cleaned | ProtocolStage::Failed => None,
        }
    }

    pub fn can_transition_to(&self, target: ProtocolStage) -> bool {
        match target {
            ProtocolStage::Failed => !self.is_terminal(),
            other => self.next() == Some(other),
        }
    }
}

impl fmt::Display for ProtocolStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
