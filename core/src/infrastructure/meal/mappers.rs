use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    domain::meal::entities::MealEvent,
    entity::{meal_event_ingredients, meal_events},
};

impl From<&meal_events::Model> for MealEvent {
    fn from(model: &meal_events::Model) -> Self {
        // Ingredients are loaded separately
        Self {
            id: model.id,
            user_id: model.user_id,
            timestamp: model.eaten_at.to_utc(),
            ingredient_ids: Vec::new(),
            had_reaction: model.had_reaction,
            notes: model.notes.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<meal_events::Model> for MealEvent {
    fn from(model: meal_events::Model) -> Self {
        Self::from(&model)
    }
}

/// Ingredient ids per meal, in the order they were logged.
pub fn group_ingredients(
    mut rows: Vec<meal_event_ingredients::Model>,
) -> HashMap<Uuid, Vec<Uuid>> {
    rows.sort_by_key(|row| (row.meal_event_id, row.position));

    let mut grouped: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    for row in rows {
        grouped
            .entry(row.meal_event_id)
            .or_default()
            .push(row.ingredient_id);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_ingredients_keeps_logged_order() {
        let meal = Uuid::new_v4();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        let grouped = group_ingredients(vec![
            meal_event_ingredients::Model {
                meal_event_id: meal,
                ingredient_id: second,
                position: 1,
            },
            meal_event_ingredients::Model {
                meal_event_id: meal,
                ingredient_id: first,
                position: 0,
            },
        ]);

        assert_eq!(grouped.get(&meal), Some(&vec![first, second]));
    }
}
