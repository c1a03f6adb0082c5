use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal::{
        entities::MealEvent,
        value_objects::{CreateMealInput, GetMealFilter},
    },
};

/// Repository trait for meal events. Soft-deleted meals are never returned.
#[cfg_attr(test, mockall::automock)]
pub trait MealRepository: Send + Sync {
    fn create_meal(
        &self,
        meal: MealEvent,
    ) -> impl Future<Output = Result<MealEvent, CoreError>> + Send;

    fn get_by_id(
        &self,
        meal_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<MealEvent>, CoreError>> + Send;

    fn list_meals(
        &self,
        user_id: Uuid,
        filter: GetMealFilter,
    ) -> impl Future<Output = Result<Vec<MealEvent>, CoreError>> + Send;

    fn mark_had_reaction(
        &self,
        meal_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Reset the reaction flag once the meal has no linked reaction left.
    fn clear_had_reaction(
        &self,
        meal_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn soft_delete(
        &self,
        meal_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// Service trait for the meal log
#[cfg_attr(test, mockall::automock)]
pub trait MealService: Send + Sync {
    fn create_meal(
        &self,
        input: CreateMealInput,
    ) -> impl Future<Output = Result<MealEvent, CoreError>> + Send;

    fn get_meal(
        &self,
        user_id: Uuid,
        meal_id: Uuid,
    ) -> impl Future<Output = Result<MealEvent, CoreError>> + Send;

    fn list_meals(
        &self,
        user_id: Uuid,
        filter: GetMealFilter,
    ) -> impl Future<Output = Result<Vec<MealEvent>, CoreError>> + Send;

    fn delete_meal(
        &self,
        user_id: Uuid,
        meal_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
