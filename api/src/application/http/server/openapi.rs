use crate::application::http::{
    cross_reactivity::router::CrossReactivityApiDoc, health::router::HealthApiDoc,
    meal::router::MealApiDoc, monthly_analysis::router::MonthlyAnalysisApiDoc,
    reaction::router::ReactionApiDoc, suspicion::router::SuspicionApiDoc,
    unsafe_food::router::UnsafeFoodApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Allertrack API"
    ),
    nest(
        (path = "/suspected-foods", api = SuspicionApiDoc),
        (path = "/cross-reactivity", api = CrossReactivityApiDoc),
        (path = "/monthly-analysis", api = MonthlyAnalysisApiDoc),
        (path = "/meals", api = MealApiDoc),
        (path = "/reactions", api = ReactionApiDoc),
        (path = "/unsafe-foods", api = UnsafeFoodApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
