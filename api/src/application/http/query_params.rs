use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::server::api_entities::{api_error::ApiError, datetime::parse_datetime_utc};

pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 100;

/// Filter operator for query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,  // equals (default)
    Gt,  // greater than
    Gte, // greater than or equal
    Lt,  // less than
    Lte, // less than or equal
}

impl FromStr for FilterOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(FilterOperator::Eq),
            "gt" => Ok(FilterOperator::Gt),
            "gte" => Ok(FilterOperator::Gte),
            "lt" => Ok(FilterOperator::Lt),
            "lte" => Ok(FilterOperator::Lte),
            _ => Err(()),
        }
    }
}

/// Filter condition for a single field
#[derive(Debug, Clone)]
pub struct FilterCondition {
    pub field: String,
    pub operator: FilterOperator,
    pub value: String,
}

impl FilterCondition {
    pub fn as_uuid(&self) -> Result<Uuid, ApiError> {
        Uuid::parse_str(self.value.trim()).map_err(|_| {
            ApiError::BadRequest(format!("filter[{}] must be a UUID", self.field))
        })
    }

    pub fn as_datetime(&self) -> Result<DateTime<Utc>, ApiError> {
        parse_datetime_utc(self.value.trim()).ok_or_else(|| {
            ApiError::BadRequest(format!("filter[{}] must be an RFC3339 datetime", self.field))
        })
    }
}

/// Parsed filter parameters
#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pub conditions: Vec<FilterCondition>,
}

impl FilterParams {
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort specification for a single field
#[derive(Debug, Clone)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

/// Parsed sort parameters
#[derive(Debug, Clone, Default)]
pub struct SortParams {
    pub sorts: Vec<SortSpec>,
}

impl SortParams {
    pub fn is_empty(&self) -> bool {
        self.sorts.is_empty()
    }

    /// Parse sort string like "field1,-field2,field3"
    pub fn from_string(s: &str) -> Self {
        let sorts = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| match part.strip_prefix('-') {
                Some(field) => SortSpec {
                    field: field.to_string(),
                    direction: SortDirection::Desc,
                },
                None => SortSpec {
                    field: part.to_string(),
                    direction: SortDirection::Asc,
                },
            })
            .collect();
        Self { sorts }
    }

    /// Back to the "field,-field" form understood by the repositories, or
    /// `None` when no sort was requested.
    pub fn to_sort_string(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        Some(
            self.sorts
                .iter()
                .map(|s| match s.direction {
                    SortDirection::Desc => format!("-{}", s.field),
                    SortDirection::Asc => s.field.clone(),
                })
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

/// Pagination parameters
#[derive(Debug, Clone, Default)]
pub struct PaginationParams {
    pub offset: i64,
    pub limit: i64,
}

impl PaginationParams {
    pub fn new(offset: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            offset: offset.unwrap_or(0).max(0),
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        }
    }
}

/// Combined query parameters (filter, sort, pagination)
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pub filter: FilterParams,
    pub sort: SortParams,
    pub pagination: PaginationParams,
}

impl QueryParams {
    /// Parse from query string map
    /// Handles formats like:
    /// - filter[field]=value (defaults to eq)
    /// - filter[field][operator]=value
    /// - sort=field or sort=-field
    /// - offset=0, limit=20
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let mut filter = FilterParams::default();
        let mut sort = SortParams::default();
        let mut offset: Option<i64> = None;
        let mut limit: Option<i64> = None;

        for (key, value) in query_map {
            if let Some(filter_key) = key.strip_prefix("filter[") {
                let Some(end_bracket) = filter_key.find(']') else {
                    continue;
                };
                let field = filter_key[..end_bracket].to_string();
                let remaining = &filter_key[end_bracket + 1..];

                let operator = if remaining.is_empty() {
                    Some(FilterOperator::Eq)
                } else if remaining.starts_with('[') && remaining.ends_with(']') {
                    remaining[1..remaining.len() - 1].parse().ok()
                } else {
                    None
                };

                if let Some(operator) = operator {
                    filter.conditions.push(FilterCondition {
                        field,
                        operator,
                        value: value.clone(),
                    });
                }
            } else if key == "sort" {
                sort = SortParams::from_string(value);
            } else if key == "offset" {
                offset = value.parse().ok();
            } else if key == "limit" {
                limit = value.parse().ok();
            }
        }

        Self {
            filter,
            sort,
            pagination: PaginationParams::new(offset, limit),
        }
    }
}
