use allertrack_core::domain::reaction::{
    entities::ReactionEvent, ports::ReactionService, value_objects::CreateReactionInput,
};
use axum::{Extension, extract::State};
use tracing::info;

use crate::application::{
    http::{
        reaction::validators::CreateReactionValidator,
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
    tag = "reaction",
    summary = "Log a reaction",
    description = "Record symptoms, optionally linked to a meal which is then flagged as having caused a reaction. Triggers a background re-score of suspected foods.",
    params(
        ("x-user-id" = Uuid, Header, description = "User ID"),
    ),
    request_body = CreateReactionValidator,
    responses(
        (status = 201, body = ReactionEvent, description = "Reaction created"),
        (status = 400, description = "Bad request"),
        (status = 404, description = "Linked meal not found")
    )
)]
pub async fn create_reaction(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    ValidateJson(payload): ValidateJson<CreateReactionValidator>,
) -> Result<Response<ReactionEvent>, ApiError> {
    let reaction = state
        .service
        .create_reaction(CreateReactionInput {
            user_id: user.user_id,
            meal_event_id: payload.meal_event_id,
            timestamp: payload.timestamp,
            symptoms: payload.symptoms.into_iter().map(Into::into).collect(),
            notes: payload.notes,
        })
        .await
        .map_err(ApiError::from)?;

    info!("reaction {} logged for user {}", reaction.id, user.user_id);
    state.rescore_queue.enqueue(user.user_id);

    Ok(Response::Created(reaction))
}
