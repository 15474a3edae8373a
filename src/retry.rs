//! The bounded, single-consumer retry queue backing the saga orchestrator's
//! background worker (§4.6).
//!
//! A task is an opaque boxed future; the worker neither inspects nor knows
//! which saga step produced it. Submission is non-blocking: a full queue
//! drops the task rather than stalling the caller, and the drop is logged
//! so it stays operationally visible.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;
use tracing::warn;

const TASK_DEADLINE: Duration = Duration::from_secs(10);

pub type RetryTask = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

#[derive(Clone)]
pub struct RetryQueue {
    sender: mpsc::Sender<RetryTask>,
}

impl RetryQueue {
    /// Builds a retry queue of the given bounded capacity and the worker
    /// that drains it. The worker must be `spawn`ed by the caller once the
    /// surrounding runtime is up.
    pub fn new(capacity: usize) -> (Self, RetryWorker) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self { sender }, RetryWorker { receiver })
    }

    /// Enqueues a task for the background worker. Never blocks: if the
    /// queue is at capacity the task is dropped and a warning is logged
    /// naming the downstream service the task was acting on, for operators
    /// to notice without the caller ever finding out.
    pub fn submit(&self, service: &'static str, task: RetryTask) {
        match self.sender.try_send(task) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!(service, "retry queue full, dropping task");
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                warn!(service, "retry queue closed, dropping task");
            }
        }
    }
}

pub struct RetryWorker {
    receiver: mpsc::Receiver<RetryTask>,
}

impl RetryWorker {
    /// Spawns the single consumer task. Each dequeued task runs under a
    /// fresh 10 second deadline, independent of whatever deadline applied
    /// to the original inbound request.
    pub fn spawn(mut self) {
        tokio::spawn(async move {
            while let Some(task) = self.receiver.recv().await {
                if timeout(TASK_DEADLINE, task).await.is_err() {
                    warn!("retry task exceeded its deadline");
                }
            }
        });
    }
}
