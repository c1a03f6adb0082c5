use std::sync::Arc;

use allertrack_core::{
    application::{
        create_service,
        rescore::{RescoreQueue, spawn_rescore_worker},
    },
    domain::common::AllertrackConfig,
};
use axum::Router;
use axum::http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE, LOCATION};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span, warn};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::http::{
    cross_reactivity::router::cross_reactivity_routes, health::router::health_routes,
    meal::router::meal_routes, monthly_analysis::router::monthly_analysis_routes,
    reaction::router::reaction_routes, server::app_state::AppState,
    server::openapi::ApiDoc, suspicion::router::suspicion_routes,
    unsafe_food::router::unsafe_food_routes,
};
use crate::application::user_middleware::USER_ID_HEADER;
use crate::args::Args;

/// Connects the core service and starts the background rescore worker.
pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = AllertrackConfig::from(args.as_ref().clone());
    let service = create_service(config.clone()).await?;

    let (rescore_queue, receiver) = RescoreQueue::new(config.rescore_queue_capacity);
    spawn_rescore_worker(service.clone(), receiver);

    Ok(AppState::new(args, service, rescore_queue))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid allowed origin: {}", origin);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT,
            LOCATION,
            HeaderName::from_static(USER_ID_HEADER),
        ])
        .allow_credentials(true);

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(SwaggerUi::new(format!("{}/swagger-ui", root_path)).url(api_docs_url, openapi))
        .merge(suspicion_routes(state.clone()))
        .merge(cross_reactivity_routes(state.clone()))
        .merge(monthly_analysis_routes(state.clone()))
        .merge(meal_routes(state.clone()))
        .merge(reaction_routes(state.clone()))
        .merge(unsafe_food_routes(state.clone()))
        .merge(health_routes(&root_path))
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);
    Ok(router)
}
