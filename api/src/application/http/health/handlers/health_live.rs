use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct LivenessResponse {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = LivenessResponse)
    )
)]
pub async fn health_live() -> Result<Response<LivenessResponse>, ApiError> {
    Ok(Response::OK(LivenessResponse {
        status: "alive".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::get};
    use axum_test::TestServer;

    use super::*;

    #[tokio::test]
    async fn liveness_answers_without_database() {
        let server = TestServer::new(Router::new().route("/health/live", get(health_live))).unwrap();

        let response = server.get("/health/live").await;

        response.assert_status_ok();
        response.assert_json(&LivenessResponse {
            status: "alive".to_string(),
        });
    }
}
