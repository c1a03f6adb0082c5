use allertrack_core::domain::suspicion::{entities::SuspicionRecord, ports::SuspicionService};
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
    tag = "suspicion",
    summary = "Get suspected foods",
    description = "Rank the caller's ingredients by how strongly they are associated with logged reactions. Nothing is persisted.",
    params(
        ("x-user-id" = Uuid, Header, description = "User ID"),
    ),
    responses(
        (status = 200, body = Vec<SuspicionRecord>, description = "Suspects, most suspicious first"),
        (status = 401, description = "Missing user")
    )
)]
pub async fn get_suspected_foods(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<Vec<SuspicionRecord>>, ApiError> {
    let records = state
        .service
        .compute_suspected_foods(user.user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(records))
}
