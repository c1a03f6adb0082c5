use allertrack_core::domain::meal::{
    entities::MealEvent, ports::MealService, value_objects::CreateMealInput,
};
use axum::{Extension, extract::State};
use tracing::info;

use crate::application::{
    http::{
        meal::validators::CreateMealValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
    user_middleware::UserContext,
};

#[utoipa::path(
    post,
    path = "",
    tag = "meal",
    summary = "Log a meal",
    description = "Record a meal and the ingredients it contained. Triggers a background re-score of suspected foods.",
    params(
        ("x-user-id" = Uuid, Header, description = "User ID"),
    ),
    request_body = CreateMealValidator,
    responses(
        (status = 201, body = MealEvent, description = "Meal created"),
        (status = 400, description = "Bad request"),
        (status = 401, description = "Missing user")
    )
)]
pub async fn create_meal(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    ValidateJson(payload): ValidateJson<CreateMealValidator>,
) -> Result<Response<MealEvent>, ApiError> {
    let meal = state
        .service
        .create_meal(CreateMealInput {
            user_id: user.user_id,
            timestamp: payload.timestamp,
            ingredient_ids: payload.ingredient_ids,
            had_reaction: payload.had_reaction.unwrap_or(false),
            notes: payload.notes,
        })
        .await
        .map_err(ApiError::from)?;

    info!("meal {} logged for user {}", meal.id, user.user_id);
    state.rescore_queue.enqueue(user.user_id);

    Ok(Response::Created(meal))
}
