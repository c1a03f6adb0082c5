use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp},
    suspicion::entities::{Confidence, Track},
};

/// Reference ingredient, populated offline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub scientific_name: Option<String>,
    pub is_fodmap: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UnsafeFoodStatus {
    Suspected,
    Confirmed,
}

impl UnsafeFoodStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnsafeFoodStatus::Suspected => "suspected",
            UnsafeFoodStatus::Confirmed => "confirmed",
        }
    }
}

impl fmt::Display for UnsafeFoodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnsafeFoodStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "suspected" => Ok(UnsafeFoodStatus::Suspected),
            "confirmed" => Ok(UnsafeFoodStatus::Confirmed),
            other => Err(CoreError::InvalidInput(format!(
                "unknown unsafe food status '{}'",
                other
            ))),
        }
    }
}

/// Entry of a user's unsafe-food list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnsafeFood {
    pub id: Uuid,
    pub user_id: Uuid,
    pub ingredient_id: Uuid,
    pub ingredient_name: String,
    pub status: UnsafeFoodStatus,
    pub pre_existing: bool,
    pub suspicion_score: Option<f64>,
    pub confidence: Option<Confidence>,
    pub track: Option<Track>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UnsafeFood {
    pub fn new(
        user_id: Uuid,
        ingredient: &Ingredient,
        status: UnsafeFoodStatus,
        pre_existing: bool,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            ingredient_id: ingredient.id,
            ingredient_name: ingredient.name.clone(),
            status,
            pre_existing,
            suspicion_score: None,
            confidence: None,
            track: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Confirmed or pre-existing entries are established allergies.
    pub fn is_established(&self) -> bool {
        self.status == UnsafeFoodStatus::Confirmed || self.pre_existing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peanut() -> Ingredient {
        Ingredient {
            id: Uuid::new_v4(),
            name: "Peanut".to_string(),
            scientific_name: Some("Arachis hypogaea".to_string()),
            is_fodmap: false,
        }
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in [UnsafeFoodStatus::Suspected, UnsafeFoodStatus::Confirmed] {
            assert_eq!(status.as_str().parse::<UnsafeFoodStatus>(), Ok(status));
        }
        assert!("maybe".parse::<UnsafeFoodStatus>().is_err());
    }

    #[test]
    fn suspected_entry_is_not_established_unless_pre_existing() {
        let user_id = Uuid::new_v4();
        let suspected = UnsafeFood::new(user_id, &peanut(), UnsafeFoodStatus::Suspected, false);
        let onboarding = UnsafeFood::new(user_id, &peanut(), UnsafeFoodStatus::Suspected, true);
        let confirmed = UnsafeFood::new(user_id, &peanut(), UnsafeFoodStatus::Confirmed, false);

        assert!(!suspected.is_established());
        assert!(onboarding.is_established());
        assert!(confirmed.is_established());
    }
}
