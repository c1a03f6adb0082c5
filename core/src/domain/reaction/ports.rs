use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    reaction::{
        entities::ReactionEvent,
        value_objects::{CreateReactionInput, GetReactionFilter},
    },
};

/// Repository trait for reaction events
#[cfg_attr(test, mockall::automock)]
pub trait ReactionRepository: Send + Sync {
    fn create_reaction(
        &self,
        reaction: ReactionEvent,
    ) -> impl Future<Output = Result<ReactionEvent, CoreError>> + Send;

    fn get_by_id(
        &self,
        reaction_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<ReactionEvent>, CoreError>> + Send;

    fn list_reactions(
        &self,
        user_id: Uuid,
        filter: GetReactionFilter,
    ) -> impl Future<Output = Result<Vec<ReactionEvent>, CoreError>> + Send;

    fn delete_reaction(
        &self,
        reaction_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// Service trait for the reaction log
#[cfg_attr(test, mockall::automock)]
pub trait ReactionService: Send + Sync {
    fn create_reaction(
        &self,
        input: CreateReactionInput,
    ) -> impl Future<Output = Result<ReactionEvent, CoreError>> + Send;

    fn list_reactions(
        &self,
        user_id: Uuid,
        filter: GetReactionFilter,
    ) -> impl Future<Output = Result<Vec<ReactionEvent>, CoreError>> + Send;

    fn delete_reaction(
        &self,
        user_id: Uuid,
        reaction_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
