use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    cross_reactivity::entities::{CrossReactionEntry, CrossReactivityReport},
};

/// Read-only access to the precomputed cross-reaction reference data.
#[cfg_attr(test, mockall::automock)]
pub trait CrossReactionRepository: Send + Sync {
    fn get_by_ingredient_id(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<Option<CrossReactionEntry>, CoreError>> + Send;

    /// Case-insensitive lookup on the anchor name.
    fn get_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<CrossReactionEntry>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CrossReactivityService: Send + Sync {
    fn get_cross_reactions(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<CrossReactivityReport, CoreError>> + Send;
}
