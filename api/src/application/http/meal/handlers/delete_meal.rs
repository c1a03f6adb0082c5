use allertrack_core::domain::meal::ports::MealService;
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
    path = "/{meal_id}",
    tag = "meal",
    summary = "Delete a meal",
    description = "Soft-delete a meal. Reactions linked to it are kept.",
    params(
        ("x-user-id" = Uuid, Header, description = "User ID"),
        ("meal_id" = Uuid, Path, description = "Meal ID"),
    ),
    responses(
        (status = 204, description = "Meal deleted"),
        (status = 404, description = "Meal not found")
    )
)]
pub async fn delete_meal(
    Path(meal_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .delete_meal(user.user_id, meal_id)
        .await
        .map_err(ApiError::from)?;

    state.rescore_queue.enqueue(user.user_id);

    Ok(StatusCode::NO_CONTENT)
}
