use allertrack_core::domain::meal::{
    entities::MealEvent, ports::MealService, value_objects::GetMealFilter,
};
use axum::{Extension, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        query_extractor::QueryParamsExtractor,
        query_params::{FilterOperator, QueryParams},
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
    user_middleware::UserContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMealsResponse {
    pub items: Vec<MealEvent>,
    pub offset: i64,
    pub limit: i64,
    pub count: usize,
}

fn meal_filter(query_params: &QueryParams) -> Result<GetMealFilter, ApiError> {
    let mut filter = GetMealFilter {
        offset: Some(query_params.pagination.offset as u32),
        limit: Some(query_params.pagination.limit as u32),
        sort: query_params
            .sort
            .to_sort_string()
            .or_else(|| Some("-timestamp".to_string())),
        ..Default::default()
    };

    for cond in &query_params.filter.conditions {
        match (cond.field.as_str(), cond.operator) {
            ("timestamp", FilterOperator::Gte) => filter.timestamp_gte = Some(cond.as_datetime()?),
            ("timestamp", FilterOperator::Lt) => filter.timestamp_lt = Some(cond.as_datetime()?),
            ("ingredient_id", FilterOperator::Eq) => filter.ingredient_id = Some(cond.as_uuid()?),
            _ => {}
        }
    }

    Ok(filter)
}

#[utoipa::path(
    get,
    path = "",
    tag = "meal",
    summary = "List meals",
    description = "List logged meals. Supports filter[timestamp][gte], filter[timestamp][lt], filter[ingredient_id], sort, offset and limit.",
    params(
        ("x-user-id" = Uuid, Header, description = "User ID"),
    ),
    responses(
        (status = 200, body = GetMealsResponse),
        (status = 400, description = "Malformed filter")
    )
)]
pub async fn get_meals(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<GetMealsResponse>, ApiError> {
    let filter = meal_filter(&query_params)?;

    let meals = state
        .service
        .list_meals(user.user_id, filter)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMealsResponse {
        count: meals.len(),
        items: meals,
        offset: query_params.pagination.offset,
        limit: query_params.pagination.limit,
    }))
}
