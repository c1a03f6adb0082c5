//! Background re-scoring of suspected foods.
//!
//! Logging a reaction enqueues a job here instead of scoring inline; a single
//! worker drains the queue. Failures never reach the request that enqueued
//! the job.

use tokio::{
    sync::mpsc::{self, Receiver, Sender, error::TrySendError},
    task::JoinHandle,
};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::domain::suspicion::ports::SuspicionService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RescoreJob {
    pub user_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct RescoreQueue {
    sender: Sender<RescoreJob>,
}

impl RescoreQueue {
    pub fn new(capacity: usize) -> (Self, Receiver<RescoreJob>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (Self { sender }, receiver)
    }

    /// Never waits. A full or closed queue drops the job.
    pub fn enqueue(&self, user_id: Uuid) {
        match self.sender.try_send(RescoreJob { user_id }) {
            Ok(()) => debug!(%user_id, "rescore job enqueued"),
            Err(TrySendError::Full(_)) => {
                warn!(%user_id, "rescore queue full, dropping job")
            }
            Err(TrySendError::Closed(_)) => {
                error!(%user_id, "rescore worker stopped, dropping job")
            }
        }
    }
}

pub async fn run_rescore_worker<S>(service: S, mut receiver: Receiver<RescoreJob>)
where
    S: SuspicionService,
{
    info!("rescore worker started");

    while let Some(job) = receiver.recv().await {
        match service.rescore_user(job.user_id).await {
            Ok(changed) => info!(user_id = %job.user_id, changed, "suspected foods rescored"),
            Err(e) => error!(user_id = %job.user_id, "failed to rescore suspected foods: {}", e),
        }
    }

    info!("rescore queue closed, worker exiting");
}

pub fn spawn_rescore_worker<S>(service: S, receiver: Receiver<RescoreJob>) -> JoinHandle<()>
where
    S: SuspicionService + 'static,
{
    tokio::spawn(run_rescore_worker(service, receiver))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::domain::{
        common::entities::app_errors::CoreError, suspicion::entities::SuspicionRecord,
    };

    #[derive(Clone, Default)]
    struct RecordingScorer {
        failing_user: Option<Uuid>,
        rescored: Arc<Mutex<Vec<Uuid>>>,
    }

    impl SuspicionService for RecordingScorer {
        async fn compute_suspected_foods(
            &self,
            _user_id: Uuid,
        ) -> Result<Vec<SuspicionRecord>, CoreError> {
            Ok(Vec::new())
        }

        async fn rescore_user(&self, user_id: Uuid) -> Result<u64, CoreError> {
            self.rescored
                .lock()
                .map_err(|_| CoreError::InternalServerError)?
                .push(user_id);
            if self.failing_user == Some(user_id) {
                return Err(CoreError::InternalServerError);
            }
            Ok(1)
        }
    }

    #[tokio::test]
    async fn worker_keeps_running_after_a_failed_job() {
        let failing = Uuid::new_v4();
        let healthy = Uuid::new_v4();
        let scorer = RecordingScorer {
            failing_user: Some(failing),
            ..Default::default()
        };
        let rescored = Arc::clone(&scorer.rescored);

        let (queue, receiver) = RescoreQueue::new(8);
        let worker = spawn_rescore_worker(scorer, receiver);
        queue.enqueue(failing);
        queue.enqueue(healthy);
        drop(queue);

        worker.await.expect("worker should exit cleanly");

        assert_eq!(*rescored.lock().unwrap(), vec![failing, healthy]);
    }

    #[tokio::test]
    async fn enqueue_on_full_queue_drops_without_blocking() {
        let (queue, mut receiver) = RescoreQueue::new(1);
        let first = Uuid::new_v4();

        queue.enqueue(first);
        queue.enqueue(Uuid::new_v4());
        drop(queue);

        assert_eq!(receiver.recv().await, Some(RescoreJob { user_id: first }));
        assert_eq!(receiver.recv().await, None);
    }

    #[tokio::test]
    async fn enqueue_after_worker_stopped_is_silent() {
        let (queue, receiver) = RescoreQueue::new(4);
        drop(receiver);

        queue.enqueue(Uuid::new_v4());
    }
}
