use tokio::sync::oneshot;

use crate::domain::{CompletedJob, Job, JobId, JobOutcome};

use super::DispatchError;

/// Splits a job into the half a worker consumes and the half the observer waits on.
pub fn completion_pair(index: usize, job: Job) -> (PendingJob, JobHandle) {
    let (sender, receiver) = oneshot::channel();
    let handle = JobHandle {
        index,
        job_id: job.id,
        receiver,
    };
    let pending = PendingJob { job, sender };
    (pending, handle)
}

/// A queued job together with its single-use completion signal.
///
/// `complete` consumes the value, so a job can be signalled at most once.
pub struct PendingJob {
    job: Job,
    sender: oneshot::Sender<CompletedJob>,
}

impl PendingJob {
    pub fn job(&self) -> &Job {
        &self.job
    }

    pub fn complete(self, outcome: JobOutcome) {
        let job_id = self.job.id;
        if self.sender.send(CompletedJob::new(self.job, outcome)).is_err() {
            tracing::warn!(job_id = %job_id, "Observer went away before job completion was delivered");
        }
    }
}

/// Observer side of a job's completion signal.
pub struct JobHandle {
    index: usize,
    job_id: JobId,
    receiver: oneshot::Receiver<CompletedJob>,
}

impl JobHandle {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Blocks until the worker that owns this job signals completion.
    pub async fn wait(self) -> Result<CompletedJob, DispatchError> {
        let Self {
            index,
            job_id,
            receiver,
        } = self;
        receiver
            .await
            .map_err(|_| DispatchError::CompletionLost { index, job_id })
    }
}
