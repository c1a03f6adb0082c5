use super::handlers::{
    create_reaction::{__path_create_reaction, create_reaction},
    delete_reaction::{__path_delete_reaction, delete_reaction},
    get_reactions::{__path_get_reactions, get_reactions},
};
use crate::application::{http::server::app_state::AppState, user_middleware::user_middleware};
use axum::{
    Router, middleware,
    routing::{delete, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_reaction, get_reactions, delete_reaction))]
pub struct ReactionApiDoc;

pub fn reaction_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/reactions", state.args.server.root_path),
            post(create_reaction).get(get_reactions),
        )
        .route(
            &format!("{}/reactions/{{reaction_id}}", state.args.server.root_path),
            delete(delete_reaction),
        )
        .layer(middleware::from_fn(user_middleware))
}
