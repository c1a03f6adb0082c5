use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    cross_reactivity::ports::CrossReactionRepository,
    health::ports::HealthCheckRepository,
    ingredient::{
        entities::UnsafeFood,
        ports::{IngredientRepository, UnsafeFoodService},
        value_objects::AddUnsafeFoodInput,
    },
    meal::ports::MealRepository,
    reaction::ports::ReactionRepository,
};

impl<M, R, I, X, HC> UnsafeFoodService for Service<M, R, I, X, HC>
where
    M: MealRepository,
    R: ReactionRepository,
    I: IngredientRepository,
    X: CrossReactionRepository,
    HC: HealthCheckRepository,
{
    async fn add_unsafe_food(&self, input: AddUnsafeFoodInput) -> Result<UnsafeFood, CoreError> {
        let ingredient = self
            .ingredient_repository
            .get_by_ids(vec![input.ingredient_id])
            .await?
            .into_iter()
            .next()
            .ok_or(CoreError::NotFound)?;

        let unsafe_food =
            UnsafeFood::new(input.user_id, &ingredient, input.status, input.pre_existing);

        self.ingredient_repository
            .upsert_unsafe_food(unsafe_food)
            .await
    }

    async fn list_unsafe_foods(&self, user_id: Uuid) -> Result<Vec<UnsafeFood>, CoreError> {
        self.ingredient_repository.list_unsafe_foods(user_id).await
    }

    async fn remove_unsafe_food(&self, user_id: Uuid, ingredient_id: Uuid) -> Result<(), CoreError> {
        let removed = self
            .ingredient_repository
            .remove_unsafe_food(user_id, ingredient_id)
            .await?;
        if !removed {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::services::test_support::Mocks,
        ingredient::entities::{Ingredient, UnsafeFoodStatus},
    };

    #[tokio::test]
    async fn add_unsafe_food_requires_known_ingredient() {
        let mut mocks = Mocks::new();
        mocks
            .ingredients
            .expect_get_by_ids()
            .returning(|_| Box::pin(async { Ok(vec![]) }));
        let service = mocks.into_service();

        let result = service
            .add_unsafe_food(AddUnsafeFoodInput {
                user_id: Uuid::new_v4(),
                ingredient_id: Uuid::new_v4(),
                status: UnsafeFoodStatus::Confirmed,
                pre_existing: false,
            })
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn add_unsafe_food_copies_ingredient_name() {
        let shellfish = Ingredient {
            id: Uuid::new_v4(),
            name: "Shellfish".to_string(),
            scientific_name: None,
            is_fodmap: false,
        };
        let ingredient_id = shellfish.id;

        let mut mocks = Mocks::new();
        mocks.ingredients.expect_get_by_ids().returning(move |_| {
            let shellfish = shellfish.clone();
            Box::pin(async move { Ok(vec![shellfish]) })
        });
        mocks
            .ingredients
            .expect_upsert_unsafe_food()
            .times(1)
            .returning(|food| Box::pin(async move { Ok(food) }));
        let service = mocks.into_service();

        let food = service
            .add_unsafe_food(AddUnsafeFoodInput {
                user_id: Uuid::new_v4(),
                ingredient_id,
                status: UnsafeFoodStatus::Confirmed,
                pre_existing: true,
            })
            .await
            .expect("unsafe food should be stored");

        assert_eq!(food.ingredient_name, "Shellfish");
        assert!(food.is_established());
    }
}
