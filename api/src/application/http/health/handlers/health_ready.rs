use allertrack_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use axum::extract::State;
use tracing::warn;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Round-trips the database and reports the latency",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, description = "Database unreachable")
    )
)]
pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readness().await.map_err(ApiError::from)?;

    if !status.is_healthy() {
        warn!("readiness check failed: {:?}", status.error);
        return Err(ApiError::ServiceUnavailable(
            "database unavailable".to_string(),
        ));
    }

    Ok(Response::OK(status))
}
