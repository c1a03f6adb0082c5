use axum::{extract::Request, middleware::Next, response::Response};
use uuid::Uuid;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Caller identity stored in request extensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserContext {
    pub user_id: Uuid,
}

/// Resolves the caller from the `X-User-Id` header. Every handler receives the
/// user explicitly through the [`UserContext`] extension.
pub async fn user_middleware(mut req: Request, next: Next) -> Result<Response, ApiError> {
    let raw = req
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("missing X-User-Id header".to_string()))?;

    let user_id = Uuid::parse_str(raw.trim())
        .map_err(|_| ApiError::BadRequest(format!("invalid X-User-Id header: {}", raw)))?;

    req.extensions_mut().insert(UserContext { user_id });

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use axum::{
        Extension, Router,
        http::{HeaderName, HeaderValue, StatusCode},
        middleware,
        routing::get,
    };
    use axum_test::TestServer;

    use super::*;

    async fn whoami(Extension(user): Extension<UserContext>) -> String {
        user.user_id.to_string()
    }

    fn server() -> TestServer {
        let app = Router::new()
            .route("/whoami", get(whoami))
            .layer(middleware::from_fn(user_middleware));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn header_is_exposed_as_user_context() {
        let user_id = Uuid::new_v4();

        let response = server()
            .get("/whoami")
            .add_header(
                HeaderName::from_static(USER_ID_HEADER),
                HeaderValue::from_str(&user_id.to_string()).unwrap(),
            )
            .await;

        response.assert_status_ok();
        response.assert_text(user_id.to_string());
    }

    #[tokio::test]
    async fn missing_header_is_unauthorized() {
        let response = server().get("/whoami").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn malformed_header_is_bad_request() {
        let response = server()
            .get("/whoami")
            .add_header(
                HeaderName::from_static(USER_ID_HEADER),
                HeaderValue::from_static("not-a-uuid"),
            )
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
