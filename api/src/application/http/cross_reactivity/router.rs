use super::handlers::get_cross_reactivity::{__path_get_cross_reactivity, get_cross_reactivity};
use crate::application::{http::server::app_state::AppState, user_middleware::user_middleware};
use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_cross_reactivity))]
pub struct CrossReactivityApiDoc;

pub fn cross_reactivity_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/cross-reactivity", state.args.server.root_path),
            get(get_cross_reactivity),
        )
        .layer(middleware::from_fn(user_middleware))
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderName, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;
    use crate::application::{
        http::server::app_state::test_support::empty_state, user_middleware::USER_ID_HEADER,
    };

    fn server() -> TestServer {
        let state = empty_state();
        TestServer::new(cross_reactivity_routes(state.clone()).with_state(state)).unwrap()
    }

    fn user_header() -> (HeaderName, HeaderValue) {
        (
            HeaderName::from_static(USER_ID_HEADER),
            HeaderValue::from_str(&Uuid::new_v4().to_string()).unwrap(),
        )
    }

    #[tokio::test]
    async fn cross_reactivity_requires_a_user() {
        let response = server().get("/cross-reactivity").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn report_without_allergens_uses_camel_case_keys() {
        let (name, value) = user_header();

        let response = server().get("/cross-reactivity").add_header(name, value).await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "riskOverview": { "high": 0, "medium": 0, "low": 0 },
            "crossReactivities": [],
        }));
    }
}
