use super::handlers::{
    add_unsafe_food::{__path_add_unsafe_food, add_unsafe_food},
    get_unsafe_foods::{__path_get_unsafe_foods, get_unsafe_foods},
    remove_unsafe_food::{__path_remove_unsafe_food, remove_unsafe_food},
};
use crate::application::{http::server::app_state::AppState, user_middleware::user_middleware};
use axum::{
    Router, middleware,
    routing::{delete, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(add_unsafe_food, get_unsafe_foods, remove_unsafe_food))]
pub struct UnsafeFoodApiDoc;

pub fn unsafe_food_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/unsafe-foods", state.args.server.root_path),
            post(add_unsafe_food).get(get_unsafe_foods),
        )
        .route(
            &format!(
                "{}/unsafe-foods/{{ingredient_id}}",
                state.args.server.root_path
            ),
            delete(remove_unsafe_food),
        )
        .layer(middleware::from_fn(user_middleware))
}
