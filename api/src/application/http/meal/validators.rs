use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::http::server::api_entities::datetime::deserialize_datetime_utc;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMealValidator {
    #[serde(deserialize_with = "deserialize_datetime_utc")]
    pub timestamp: DateTime<Utc>,
    #[validate(length(min = 1, message = "a meal needs at least one ingredient"))]
    pub ingredient_ids: Vec<Uuid>,
    pub had_reaction: Option<bool>,
    #[validate(length(max = 2000, message = "notes must be at most 2000 characters"))]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_naive_timestamp_and_rejects_empty_meal() {
        let meal: CreateMealValidator = serde_json::from_str(
            r#"{"timestamp":"2025-04-02T12:30:00","ingredientIds":[]}"#,
        )
        .unwrap();

        assert_eq!(meal.timestamp.to_rfc3339(), "2025-04-02T12:30:00+00:00");
        assert!(meal.validate().is_err());
    }

    #[test]
    fn accepts_meal_with_ingredients() {
        let meal: CreateMealValidator = serde_json::from_str(&format!(
            r#"{{"timestamp":"2025-04-02T12:30:00Z","ingredientIds":["{}"],"hadReaction":true}}"#,
            Uuid::new_v4()
        ))
        .unwrap();

        assert!(meal.validate().is_ok());
        assert_eq!(meal.had_reaction, Some(true));
    }
}
