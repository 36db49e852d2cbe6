mod batch_run;
mod completion;
mod dispatch_error;
mod dispatcher;
mod error_aggregator;
mod job_processor;

pub use batch_run::{BatchRun, BatchSummary};
pub use completion::{JobHandle, PendingJob, completion_pair};
pub use dispatch_error::DispatchError;
pub use dispatcher::{DEFAULT_QUEUE_CAPACITY, DEFAULT_WORKER_COUNT, Dispatcher};
pub use error_aggregator::ErrorAggregator;
pub use job_processor::{DEFAULT_POLL_INTERVAL, JobError, JobProcessor};
