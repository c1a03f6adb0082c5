use allertrack_core::domain::reaction::ports::ReactionService;
use axum::{
    Extension,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::application::{
    http::server::{api_entities::api_error::ApiError, app_state::AppState},
    user_middleware::UserContext,
};

#[utoipa::path(
    delete,
    path = "/{reaction_id}",
    tag = "reaction",
    summary = "Delete a reaction",
    params(
        ("x-user-id" = Uuid, Header, description = "User ID"),
        ("reaction_id" = Uuid, Path, description = "Reaction ID"),
    ),
    responses(
        (status = 204, description = "Reaction deleted"),
        (status = 404, description = "Reaction not found")
    )
)]
pub async fn delete_reaction(
    Path(reaction_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .delete_reaction(user.user_id, reaction_id)
        .await
        .map_err(ApiError::from)?;

    state.rescore_queue.enqueue(user.user_id);

    Ok(StatusCode::NO_CONTENT)
}
