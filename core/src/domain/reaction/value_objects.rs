use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Raw symptom as received at the boundary, before severity validation.
#[derive(Debug, Clone)]
pub struct SymptomInput {
    pub symptom_id: Uuid,
    pub severity: i32,
    pub onset_minutes: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct CreateReactionInput {
    pub user_id: Uuid,
    pub meal_event_id: Option<Uuid>,
    pub timestamp: DateTime<Utc>,
    pub symptoms: Vec<SymptomInput>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GetReactionFilter {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub meal_event_id: Option<Uuid>,
    pub timestamp_gte: Option<DateTime<Utc>>,
    pub timestamp_lt: Option<DateTime<Utc>>,
    pub sort: Option<String>, // e.g., "-timestamp"
}

impl GetReactionFilter {
    /// Unpaginated window `[start, end)`, used by the analytics services.
    pub fn window(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            timestamp_gte: Some(start),
            timestamp_lt: Some(end),
            sort: Some("timestamp".to_string()),
            ..Default::default()
        }
    }
}
