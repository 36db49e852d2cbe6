mod credential_mask;
mod init_tracing;
mod tracing_config;

pub use credential_mask::mask_credential;
pub use init_tracing::init_tracing;
pub use tracing_config::{DEFAULT_LOG_FILTER, TracingConfig};
