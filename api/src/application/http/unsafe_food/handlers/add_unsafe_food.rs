use allertrack_core::domain::ingredient::{
    entities::UnsafeFood, ports::UnsafeFoodService, value_objects::AddUnsafeFoodInput,
};
use axum::{Extension, extract::State};

use crate::application::{
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        unsafe_food::validators::AddUnsafeFoodValidator,
    },
    user_middleware::UserContext,
};

#[utoipa::path(
    post,
    path = "",
    tag = "unsafe-food",
    summary = "Add an unsafe food",
    description = "Add or update an entry of the unsafe-food list. A confirmed entry is never downgraded to suspected.",
    params(
        ("x-user-id" = Uuid, Header, description = "User ID"),
    ),
    request_body = AddUnsafeFoodValidator,
    responses(
        (status = 201, body = UnsafeFood),
        (status = 404, description = "Unknown ingredient")
    )
)]
pub async fn add_unsafe_food(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    ValidateJson(payload): ValidateJson<AddUnsafeFoodValidator>,
) -> Result<Response<UnsafeFood>, ApiError> {
    let unsafe_food = state
        .service
        .add_unsafe_food(AddUnsafeFoodInput {
            user_id: user.user_id,
            ingredient_id: payload.ingredient_id,
            status: payload.status,
            pre_existing: payload.pre_existing,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(unsafe_food))
}
