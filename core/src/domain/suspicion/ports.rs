use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError, suspicion::entities::SuspicionRecord,
};

/// Service trait for suspected-food inference
#[cfg_attr(test, mockall::automock)]
pub trait SuspicionService: Send + Sync {
    /// Ranked suspects for the user. Read-only: nothing is persisted.
    fn compute_suspected_foods(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<SuspicionRecord>, CoreError>> + Send;

    /// Recompute suspects and sync the confident ones into the user's
    /// unsafe-food list. Returns the number of entries written or removed.
    fn rescore_user(&self, user_id: Uuid) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
