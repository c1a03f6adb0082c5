use allertrack_core::domain::reaction::value_objects::SymptomInput;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::http::server::api_entities::datetime::deserialize_datetime_utc;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SymptomValidator {
    pub symptom_id: Uuid,
    #[validate(range(min = 1, max = 10, message = "severity must be between 1 and 10"))]
    pub severity: i32,
    #[validate(range(min = 0, message = "onsetMinutes must not be negative"))]
    pub onset_minutes: Option<i32>,
}

impl From<SymptomValidator> for SymptomInput {
    fn from(value: SymptomValidator) -> Self {
        Self {
            symptom_id: value.symptom_id,
            severity: value.severity,
            onset_minutes: value.onset_minutes,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReactionValidator {
    pub meal_event_id: Option<Uuid>,
    #[serde(deserialize_with = "deserialize_datetime_utc")]
    pub timestamp: DateTime<Utc>,
    #[validate(nested)]
    pub symptoms: Vec<SymptomValidator>,
    #[validate(length(max = 2000, message = "notes must be at most 2000 characters"))]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reaction(severity: i32) -> CreateReactionValidator {
        serde_json::from_str(&format!(
            r#"{{"timestamp":"2025-04-02T13:10:00Z","symptoms":[{{"symptomId":"{}","severity":{},"onsetMinutes":40}}]}}"#,
            Uuid::new_v4(),
            severity
        ))
        .unwrap()
    }

    #[test]
    fn accepts_severity_on_scale() {
        let payload = reaction(7);

        assert!(payload.validate().is_ok());
        assert!(payload.meal_event_id.is_none());
    }

    #[test]
    fn rejects_severity_off_scale() {
        assert!(reaction(0).validate().is_err());
        assert!(reaction(11).validate().is_err());
    }
}
