use allertrack_core::domain::reaction::{
    entities::ReactionEvent, ports::ReactionService, value_objects::GetReactionFilter,
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
pub struct GetReactionsResponse {
    pub items: Vec<ReactionEvent>,
    pub offset: i64,
    pub limit: i64,
    pub count: usize,
}

fn reaction_filter(query_params: &QueryParams) -> Result<GetReactionFilter, ApiError> {
    let mut filter = GetReactionFilter {
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
            ("meal_event_id", FilterOperator::Eq) => filter.meal_event_id = Some(cond.as_uuid()?),
            _ => {}
        }
    }

    Ok(filter)
}

#[utoipa::path(
    get,
    path = "",
    tag = "reaction",
    summary = "List reactions",
    description = "List reactions with their symptoms. Supports filter[timestamp][gte], filter[timestamp][lt], filter[meal_event_id], sort, offset and limit.",
    params(
        ("x-user-id" = Uuid, Header, description = "User ID"),
    ),
    responses(
        (status = 200, body = GetReactionsResponse),
        (status = 400, description = "Malformed filter")
    )
)]
pub async fn get_reactions(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<GetReactionsResponse>, ApiError> {
    let filter = reaction_filter(&query_params)?;

    let reactions = state
        .service
        .list_reactions(user.user_id, filter)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetReactionsResponse {
        count: reactions.len(),
        items: reactions,
        offset: query_params.pagination.offset,
        limit: query_params.pagination.limit,
    }))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        QueryParams::from_query_map(&map)
    }

    #[test]
    fn maps_meal_link_filter() {
        let filter = reaction_filter(&params(&[(
            "filter[meal_event_id]",
            "0b7f1c52-6c1e-4c37-9f8e-2d6f4f7e9a10",
        )]))
        .unwrap();

        assert!(filter.meal_event_id.is_some());
        assert_eq!(filter.sort.as_deref(), Some("-timestamp"));
    }

    #[test]
    fn malformed_timestamp_is_bad_request() {
        let result = reaction_filter(&params(&[("filter[timestamp][gte]", "yesterday")]));

        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }
}
