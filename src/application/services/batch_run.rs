use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::domain::CompletedJob;

use super::completion::JobHandle;
use super::{DispatchError, ErrorAggregator};

/// A dispatched batch, observed from the driving task.
pub struct BatchRun {
    handles: Vec<JobHandle>,
    producer: JoinHandle<()>,
    workers: Vec<JoinHandle<()>>,
    errors: Arc<ErrorAggregator>,
}

impl BatchRun {
    pub(crate) fn new(
        handles: Vec<JobHandle>,
        producer: JoinHandle<()>,
        workers: Vec<JoinHandle<()>>,
        errors: Arc<ErrorAggregator>,
    ) -> Self {
        Self {
            handles,
            producer,
            workers,
            errors,
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Waits for every job in input order, calling `on_completed` as each one
    /// is reached, then joins the producer and workers and reads the failure count.
    pub async fn observe<F>(self, mut on_completed: F) -> Result<BatchSummary, DispatchError>
    where
        F: FnMut(&CompletedJob),
    {
        let mut jobs = Vec::with_capacity(self.handles.len());
        for handle in self.handles {
            let completed = handle.wait().await?;
            on_completed(&completed);
            jobs.push(completed);
        }

        self.producer
            .await
            .map_err(|e| DispatchError::ProducerFailed(e.to_string()))?;
        for result in futures::future::join_all(self.workers).await {
            result.map_err(|e| DispatchError::WorkerFailed(e.to_string()))?;
        }

        let failures = self.errors.read();
        Ok(BatchSummary { jobs, failures })
    }
}

#[derive(Debug)]
pub struct BatchSummary {
    pub jobs: Vec<CompletedJob>,
    pub failures: usize,
}

impl BatchSummary {
    pub fn is_success(&self) -> bool {
        self.failures == 0
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }

    pub fn failed_jobs(&self) -> impl Iterator<Item = &CompletedJob> {
        self.jobs.iter().filter(|j| j.is_failure())
    }
}
