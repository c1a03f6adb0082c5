use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateMealInput {
    pub user_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub ingredient_ids: Vec<Uuid>,
    pub had_reaction: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GetMealFilter {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub timestamp_gte: Option<DateTime<Utc>>,
    pub timestamp_lt: Option<DateTime<Utc>>,
    pub ingredient_id: Option<Uuid>,
    pub sort: Option<String>, // e.g., "-timestamp"
}
