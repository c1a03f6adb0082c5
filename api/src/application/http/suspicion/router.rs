use super::handlers::get_suspected_foods::{__path_get_suspected_foods, get_suspected_foods};
use crate::application::{http::server::app_state::AppState, user_middleware::user_middleware};
use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_suspected_foods))]
pub struct SuspicionApiDoc;

pub fn suspicion_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/suspected-foods", state.args.server.root_path),
            get(get_suspected_foods),
        )
        .layer(middleware::from_fn(user_middleware))
}
