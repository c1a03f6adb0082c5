use allertrack_core::domain::monthly_analysis::{
    entities::MonthlySummary, ports::MonthlyAnalysisService, value_objects::MonthlyAnalysisInput,
};
use axum::{
    Extension,
    extract::{Query, State},
};
use validator::Validate;

use crate::application::{
    http::{
        monthly_analysis::validators::MonthlyAnalysisParams,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
    user_middleware::UserContext,
};

#[utoipa::path(
    get,
    path = "",
    tag = "monthly-analysis",
    summary = "Get monthly analysis",
    description = "Symptom statistics for one calendar month compared with the month before",
    params(
        ("x-user-id" = Uuid, Header, description = "User ID"),
        MonthlyAnalysisParams,
    ),
    responses(
        (status = 200, body = MonthlySummary),
        (status = 400, description = "Invalid year, month or offset"),
        (status = 401, description = "Missing user")
    )
)]
pub async fn get_monthly_analysis(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    Query(params): Query<MonthlyAnalysisParams>,
) -> Result<Response<MonthlySummary>, ApiError> {
    params.validate()?;

    let summary = state
        .service
        .get_monthly_analysis(MonthlyAnalysisInput {
            user_id: user.user_id,
            year: params.year,
            month: params.month,
            utc_offset_minutes: params.utc_offset_minutes.unwrap_or(0),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(summary))
}
