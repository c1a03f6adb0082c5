use super::handlers::get_monthly_analysis::{__path_get_monthly_analysis, get_monthly_analysis};
use crate::application::{http::server::app_state::AppState, user_middleware::user_middleware};
use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_monthly_analysis))]
pub struct MonthlyAnalysisApiDoc;

pub fn monthly_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/monthly-analysis", state.args.server.root_path),
            get(get_monthly_analysis),
        )
        .layer(middleware::from_fn(user_middleware))
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderName, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use serde_json::Value;
    use uuid::Uuid;

    use super::*;
    use crate::application::{
        http::server::app_state::test_support::empty_state, user_middleware::USER_ID_HEADER,
    };

    fn server() -> TestServer {
        let state = empty_state();
        TestServer::new(monthly_analysis_routes(state.clone()).with_state(state)).unwrap()
    }

    fn user_header() -> (HeaderName, HeaderValue) {
        (
            HeaderName::from_static(USER_ID_HEADER),
            HeaderValue::from_str(&Uuid::new_v4().to_string()).unwrap(),
        )
    }

    #[tokio::test]
    async fn monthly_analysis_requires_a_user() {
        let response = server()
            .get("/monthly-analysis")
            .add_query_param("year", 2025)
            .add_query_param("month", 4)
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn out_of_range_month_is_rejected() {
        let (name, value) = user_header();

        let response = server()
            .get("/monthly-analysis")
            .add_query_param("year", 2025)
            .add_query_param("month", 13)
            .add_header(name, value)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn quiet_month_summary_uses_camel_case_keys() {
        let (name, value) = user_header();

        let response = server()
            .get("/monthly-analysis")
            .add_query_param("year", 2025)
            .add_query_param("month", 4)
            .add_header(name, value)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["year"], 2025);
        assert_eq!(body["month"], 4);
        assert_eq!(body["totalSymptoms"], 0);
        assert_eq!(body["prevMonthSymptoms"], 0);
        assert_eq!(body["totalReactions"], 0);
        assert_eq!(body["monthlyImprovementPct"], 0);
        assert_eq!(body["symptomFreeDays"], body["daysElapsed"]);
        assert!(body["weeklyTrend"].is_array());
        assert!(body["timeOfDayDistribution"].is_object());
        assert!(body.get("total_symptoms").is_none());
    }
}
