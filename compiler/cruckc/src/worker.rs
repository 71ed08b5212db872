//! Isolated run thread.
//!
//! A [`RunWorker`] owns one OS thread that executes runs strictly one at a
//! time. Callers only exchange messages with it: a source text goes in
//! over a `crossbeam` channel together with a reply channel, and exactly
//! one [`RunOutcome`] comes back. No interpreter state is visible outside
//! the thread.

use std::io;
use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, Receiver, Sender};
use cruck_eval::{RunConfig, RunOutcome};
use thiserror::Error;
use tracing::{debug, trace};

/// The worker could not take or answer a request.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("failed to start the run worker: {0}")]
    Spawn(#[from] io::Error),
    #[error("the run worker has stopped")]
    Disconnected,
}

/// A queued run.
struct Job {
    source: String,
    reply: Sender<RunOutcome>,
}

/// Handle to the run thread. Dropping it stops the thread after the
/// current run finishes.
pub struct RunWorker {
    jobs: Option<Sender<Job>>,
    thread: Option<JoinHandle<()>>,
}

impl RunWorker {
    /// Start the run thread; every run uses `config`.
    pub fn spawn(config: RunConfig) -> Result<Self, WorkerError> {
        let (jobs, queue) = channel::unbounded::<Job>();
        let thread = thread::Builder::new()
            .name("cruck-run".to_owned())
            .spawn(move || serve_jobs(&queue, &config))?;
        debug!("run worker started");
        Ok(RunWorker {
            jobs: Some(jobs),
            thread: Some(thread),
        })
    }

    /// Queue `source` for execution; the outcome arrives on the returned
    /// receiver. Runs are answered in submission order.
    pub fn submit(&self, source: impl Into<String>) -> Result<Receiver<RunOutcome>, WorkerError> {
        let jobs = self.jobs.as_ref().ok_or(WorkerError::Disconnected)?;
        let (reply, answer) = channel::bounded(1);
        jobs.send(Job {
            source: source.into(),
            reply,
        })
        .map_err(|_| WorkerError::Disconnected)?;
        Ok(answer)
    }

    /// Run `source` and wait for its outcome.
    pub fn request(&self, source: impl Into<String>) -> Result<RunOutcome, WorkerError> {
        self.submit(source)?
            .recv()
            .map_err(|_| WorkerError::Disconnected)
    }
}

fn serve_jobs(queue: &Receiver<Job>, config: &RunConfig) {
    for job in queue {
        trace!(bytes = job.source.len(), "run started");
        let outcome = cruck_eval::run(&job.source, config);
        // The caller may have stopped waiting; that is not an error here.
        let _ = job.reply.send(outcome);
    }
    debug!("run worker stopped");
}

impl Drop for RunWorker {
    fn drop(&mut self) {
        // Closing the queue ends the thread's receive loop.
        drop(self.jobs.take());
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
