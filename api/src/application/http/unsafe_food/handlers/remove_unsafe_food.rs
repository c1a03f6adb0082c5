use allertrack_core::domain::ingredient::ports::UnsafeFoodService;
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
    path = "/{ingredient_id}",
    tag = "unsafe-food",
    summary = "Remove an unsafe food",
    params(
        ("x-user-id" = Uuid, Header, description = "User ID"),
        ("ingredient_id" = Uuid, Path, description = "Ingredient ID"),
    ),
    responses(
        (status = 204, description = "Entry removed"),
        (status = 404, description = "Ingredient not on the list")
    )
)]
pub async fn remove_unsafe_food(
    Path(ingredient_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .remove_unsafe_food(user.user_id, ingredient_id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
