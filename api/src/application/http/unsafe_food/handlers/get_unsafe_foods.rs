use allertrack_core::domain::ingredient::{entities::UnsafeFood, ports::UnsafeFoodService};
use axum::{Extension, extract::State};

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user_middleware::UserContext,
};

#[utoipa::path(
    get,
    path = "",
    tag = "unsafe-food",
    summary = "List unsafe foods",
    params(
        ("x-user-id" = Uuid, Header, description = "User ID"),
    ),
    responses(
        (status = 200, body = Vec<UnsafeFood>, description = "Confirmed entries first")
    )
)]
pub async fn get_unsafe_foods(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<Vec<UnsafeFood>>, ApiError> {
    let foods = state
        .service
        .list_unsafe_foods(user.user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(foods))
}
