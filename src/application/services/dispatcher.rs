use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::application::ports::ProgressTracker;
use crate::domain::Job;

use super::completion::{PendingJob, completion_pair};
use super::{BatchRun, JobProcessor};

pub const DEFAULT_QUEUE_CAPACITY: usize = 10;
pub const DEFAULT_WORKER_COUNT: usize = 4;

enum QueueItem {
    Job(PendingJob),
    Terminate,
}

type SharedReceiver = Arc<Mutex<mpsc::Receiver<QueueItem>>>;

/// Feeds jobs through a bounded queue to a fixed pool of workers.
pub struct Dispatcher {
    processor: Arc<JobProcessor>,
    progress: Arc<dyn ProgressTracker>,
    worker_count: usize,
    queue_capacity: usize,
}

impl Dispatcher {
    pub fn new(
        processor: Arc<JobProcessor>,
        progress: Arc<dyn ProgressTracker>,
        worker_count: usize,
        queue_capacity: usize,
    ) -> Self {
        Self {
            processor,
            progress,
            worker_count: worker_count.max(1),
            queue_capacity: queue_capacity.max(1),
        }
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Starts the producer and the worker pool. Must be called inside a tokio runtime.
    ///
    /// The returned [`BatchRun`] holds one handle per job in input order.
    pub fn run(&self, jobs: Vec<Job>) -> BatchRun {
        let (sender, receiver) = mpsc::channel(self.queue_capacity);
        let receiver: SharedReceiver = Arc::new(Mutex::new(receiver));

        let mut pending = Vec::with_capacity(jobs.len());
        let mut handles = Vec::with_capacity(jobs.len());
        for (index, job) in jobs.into_iter().enumerate() {
            let (job, handle) = completion_pair(index, job);
            pending.push(job);
            handles.push(handle);
        }

        tracing::info!(
            jobs = handles.len(),
            workers = self.worker_count,
            queue_capacity = self.queue_capacity,
            "Dispatching transcription jobs"
        );

        let producer = tokio::spawn(produce(sender, pending, self.worker_count));

        let workers: Vec<JoinHandle<()>> = (0..self.worker_count)
            .map(|worker_id| {
                let worker = Worker {
                    id: worker_id,
                    queue: Arc::clone(&receiver),
                    processor: Arc::clone(&self.processor),
                    progress: Arc::clone(&self.progress),
                };
                tokio::spawn(worker.run())
            })
            .collect();

        BatchRun::new(
            handles,
            producer,
            workers,
            Arc::clone(self.processor.errors()),
        )
    }
}

async fn produce(sender: mpsc::Sender<QueueItem>, jobs: Vec<PendingJob>, terminators: usize) {
    for job in jobs {
        if sender.send(QueueItem::Job(job)).await.is_err() {
            tracing::error!("Job queue closed before all jobs were enqueued");
            return;
        }
    }
    for _ in 0..terminators {
        if sender.send(QueueItem::Terminate).await.is_err() {
            return;
        }
    }
    tracing::debug!("All jobs enqueued");
}

struct Worker {
    id: usize,
    queue: SharedReceiver,
    processor: Arc<JobProcessor>,
    progress: Arc<dyn ProgressTracker>,
}

impl Worker {
    async fn run(self) {
        tracing::debug!(worker = self.id, "Transcription worker started");
        loop {
            let item = self.queue.lock().await.recv().await;
            let pending = match item {
                Some(QueueItem::Job(pending)) => pending,
                Some(QueueItem::Terminate) => break,
                None => {
                    tracing::warn!(worker = self.id, "Job queue closed without termination marker");
                    break;
                }
            };

            let job = pending.job();
            let span = tracing::info_span!(
                "transcription_job",
                worker = self.id,
                job_id = %job.id,
                input = %job.input_path.display(),
            );
            let reporter = self.progress.track(job);
            let outcome = self
                .processor
                .process(job, reporter.as_ref())
                .instrument(span)
                .await;
            pending.complete(outcome);
        }
        tracing::debug!(worker = self.id, "Transcription worker stopped");
    }
}
