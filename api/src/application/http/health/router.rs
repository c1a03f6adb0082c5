use super::handlers::{
    health_live::{__path_health_live, health_live},
    health_ready::{__path_health_ready, health_ready},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(health_live, health_ready))]
pub struct HealthApiDoc;

/// Probes stay outside the user middleware.
pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/health/live", root_path), get(health_live))
        .route(&format!("{}/health/ready", root_path), get(health_ready))
}
