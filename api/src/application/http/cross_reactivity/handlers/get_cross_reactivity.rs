use allertrack_core::domain::cross_reactivity::{
    entities::CrossReactivityReport, ports::CrossReactivityService,
};
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
    tag = "cross-reactivity",
    summary = "Get cross-reactive foods",
    description = "Foods whose proteins resemble those of the caller's confirmed or pre-existing allergens",
    params(
        ("x-user-id" = Uuid, Header, description = "User ID"),
    ),
    responses(
        (status = 200, body = CrossReactivityReport),
        (status = 401, description = "Missing user")
    )
)]
pub async fn get_cross_reactivity(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<CrossReactivityReport>, ApiError> {
    let report = state
        .service
        .get_cross_reactions(user.user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(report))
}
