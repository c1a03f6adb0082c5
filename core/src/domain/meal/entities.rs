use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// A logged meal and the ingredients it contained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealEvent {
    pub id: Uuid,
    pub user_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub ingredient_ids: Vec<Uuid>,
    pub had_reaction: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MealEventConfig {
    pub user_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub ingredient_ids: Vec<Uuid>,
    pub had_reaction: bool,
    pub notes: Option<String>,
}

impl MealEvent {
    pub fn new(config: MealEventConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        let mut ingredient_ids = Vec::with_capacity(config.ingredient_ids.len());
        for id in config.ingredient_ids {
            if !ingredient_ids.contains(&id) {
                ingredient_ids.push(id);
            }
        }

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            timestamp: config.timestamp,
            ingredient_ids,
            had_reaction: config.had_reaction,
            notes: config.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_meal_drops_duplicate_ingredients_keeping_order() {
        let peanut = Uuid::new_v4();
        let milk = Uuid::new_v4();

        let meal = MealEvent::new(MealEventConfig {
            user_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            ingredient_ids: vec![peanut, milk, peanut],
            had_reaction: false,
            notes: None,
        });

        assert_eq!(meal.ingredient_ids, vec![peanut, milk]);
        assert_eq!(meal.created_at, meal.updated_at);
    }
}
