pub mod observability;
pub mod progress;
pub mod remote;
