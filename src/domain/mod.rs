mod artifact;
mod job;
mod job_id;
mod job_outcome;
mod protocol_stage;
mod remote_status;
mod session_id;

pub use artifact::ArtifactNames;
pub use job::{CompletedJob, Job};
pub use job_id::JobId;
pub use job_outcome::JobOutcome;
pub use protocol_stage::ProtocolStage;
pub use remote_status::RemoteStatus;
pub use session_id::SessionId;
