use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    cross_reactivity::ports::CrossReactionRepository,
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    meal::{
        entities::{MealEvent, MealEventConfig},
        ports::{MealRepository, MealService},
        value_objects::{CreateMealInput, GetMealFilter},
    },
    reaction::ports::ReactionRepository,
};

impl<M, R, I, X, HC> MealService for Service<M, R, I, X, HC>
where
    M: MealRepository,
    R: ReactionRepository,
    I: IngredientRepository,
    X: CrossReactionRepository,
    HC: HealthCheckRepository,
{
    async fn create_meal(&self, input: CreateMealInput) -> Result<MealEvent, CoreError> {
        if input.ingredient_ids.is_empty() {
            return Err(CoreError::InvalidInput(
                "a meal needs at least one ingredient".to_string(),
            ));
        }

        let meal = MealEvent::new(MealEventConfig {
            user_id: input.user_id,
            timestamp: input.timestamp,
            ingredient_ids: input.ingredient_ids,
            had_reaction: input.had_reaction,
            notes: input.notes,
        });

        // Every ingredient must exist in the reference data
        let known = self
            .ingredient_repository
            .get_by_ids(meal.ingredient_ids.clone())
            .await?;
        if let Some(missing) = meal
            .ingredient_ids
            .iter()
            .find(|id| !known.iter().any(|ingredient| ingredient.id == **id))
        {
            return Err(CoreError::InvalidInput(format!(
                "unknown ingredient {}",
                missing
            )));
        }

        let created = self.meal_repository.create_meal(meal).await?;
        debug!(meal_id = %created.id, user_id = %created.user_id, "meal logged");

        Ok(created)
    }

    async fn get_meal(&self, user_id: Uuid, meal_id: Uuid) -> Result<MealEvent, CoreError> {
        self.meal_repository
            .get_by_id(meal_id, user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn list_meals(
        &self,
        user_id: Uuid,
        filter: GetMealFilter,
    ) -> Result<Vec<MealEvent>, CoreError> {
        self.meal_repository.list_meals(user_id, filter).await
    }

    async fn delete_meal(&self, user_id: Uuid, meal_id: Uuid) -> Result<(), CoreError> {
        let deleted = self.meal_repository.soft_delete(meal_id, user_id).await?;
        if !deleted {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::{common::services::test_support::Mocks, ingredient::entities::Ingredient};

    fn ingredient(id: Uuid, name: &str) -> Ingredient {
        Ingredient {
            id,
            name: name.to_string(),
            scientific_name: None,
            is_fodmap: false,
        }
    }

    #[tokio::test]
    async fn create_meal_rejects_empty_ingredient_list() {
        let service = Mocks::new().into_service();

        let result = service
            .create_meal(CreateMealInput {
                user_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                ingredient_ids: vec![],
                had_reaction: false,
                notes: None,
            })
            .await;

        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn create_meal_rejects_unknown_ingredient() {
        let known = Uuid::new_v4();
        let unknown = Uuid::new_v4();

        let mut mocks = Mocks::new();
        mocks
            .ingredients
            .expect_get_by_ids()
            .returning(move |_| Box::pin(async move { Ok(vec![ingredient(known, "Peanut")]) }));
        let service = mocks.into_service();

        let result = service
            .create_meal(CreateMealInput {
                user_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                ingredient_ids: vec![known, unknown],
                had_reaction: false,
                notes: None,
            })
            .await;

        assert_eq!(
            result,
            Err(CoreError::InvalidInput(format!("unknown ingredient {}", unknown)))
        );
    }

    #[tokio::test]
    async fn create_meal_persists_when_ingredients_are_known() {
        let peanut = Uuid::new_v4();

        let mut mocks = Mocks::new();
        mocks
            .ingredients
            .expect_get_by_ids()
            .returning(move |_| Box::pin(async move { Ok(vec![ingredient(peanut, "Peanut")]) }));
        mocks
            .meals
            .expect_create_meal()
            .times(1)
            .returning(|meal| Box::pin(async move { Ok(meal) }));
        let service = mocks.into_service();

        let meal = service
            .create_meal(CreateMealInput {
                user_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                ingredient_ids: vec![peanut, peanut],
                had_reaction: false,
                notes: Some("lunch".to_string()),
            })
            .await
            .expect("meal should be created");

        assert_eq!(meal.ingredient_ids, vec![peanut]);
    }

    #[tokio::test]
    async fn delete_meal_reports_missing_meal() {
        let mut mocks = Mocks::new();
        mocks
            .meals
            .expect_soft_delete()
            .returning(|_, _| Box::pin(async { Ok(false) }));
        let service = mocks.into_service();

        let result = service.delete_meal(Uuid::new_v4(), Uuid::new_v4()).await;

        assert_eq!(result, Err(CoreError::NotFound));
    }
}
