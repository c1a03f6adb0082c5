use allertrack_core::domain::meal::{entities::MealEvent, ports::MealService};
use axum::{
    Extension,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user_middleware::UserContext,
};

#[utoipa::path(
    get,
    path = "/{meal_id}",
    tag = "meal",
    summary = "Get a meal",
    params(
        ("x-user-id" = Uuid, Header, description = "User ID"),
        ("meal_id" = Uuid, Path, description = "Meal ID"),
    ),
    responses(
        (status = 200, body = MealEvent),
        (status = 404, description = "Meal not found or deleted")
    )
)]
pub async fn get_meal(
    Path(meal_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<MealEvent>, ApiError> {
    let meal = state
        .service
        .get_meal(user.user_id, meal_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(meal))
}
