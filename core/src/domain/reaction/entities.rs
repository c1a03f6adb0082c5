use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::app_errors::CoreError, generate_timestamp};

/// Symptom severity on the 1..=10 scale. Out-of-range values never reach aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "i32", into = "i32")]
pub struct Severity(u8);

impl Severity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for Severity {
    type Error = CoreError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if (Self::MIN as i32..=Self::MAX as i32).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(CoreError::InvalidInput(format!(
                "severity must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )))
        }
    }
}

impl From<Severity> for i32 {
    fn from(severity: Severity) -> Self {
        severity.0 as i32
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SymptomEntry {
    pub symptom_id: Uuid,
    pub severity: Severity,
    pub onset_minutes: Option<u32>,
}

/// A reported reaction. `meal_event_id` is a weak reference: the meal may
/// have been soft-deleted since.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReactionEvent {
    pub id: Uuid,
    pub user_id: Uuid,
    pub meal_event_id: Option<Uuid>,
    pub timestamp: DateTime<Utc>,
    pub symptoms: Vec<SymptomEntry>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ReactionEventConfig {
    pub user_id: Uuid,
    pub meal_event_id: Option<Uuid>,
    pub timestamp: DateTime<Utc>,
    pub symptoms: Vec<SymptomEntry>,
    pub notes: Option<String>,
}

impl ReactionEvent {
    pub fn new(config: ReactionEventConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            meal_event_id: config.meal_event_id,
            timestamp: config.timestamp,
            symptoms: config.symptoms,
            notes: config.notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Highest symptom severity of this reaction, if it reported any symptom.
    pub fn peak_severity(&self) -> Option<u8> {
        self.symptoms.iter().map(|s| s.severity.value()).max()
    }
}
