use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::{Ingredient, UnsafeFood},
        value_objects::{AddUnsafeFoodInput, SuspectedFoodUpdate},
    },
};

/// Repository trait for reference ingredients and the per-user unsafe-food list
#[cfg_attr(test, mockall::automock)]
pub trait IngredientRepository: Send + Sync {
    /// Ingredients for the given ids; unknown ids are simply absent.
    fn get_by_ids(
        &self,
        ingredient_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    /// Ingredients on the user's list with `status == confirmed` or `pre_existing`.
    fn get_confirmed_allergens(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn list_unsafe_foods(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<UnsafeFood>, CoreError>> + Send;

    /// Insert or update one entry. A confirmed status is never downgraded.
    fn upsert_unsafe_food(
        &self,
        unsafe_food: UnsafeFood,
    ) -> impl Future<Output = Result<UnsafeFood, CoreError>> + Send;

    /// Replace the user's scorer-owned suspected entries with `updates`.
    /// Suspected entries absent from `updates` are removed; confirmed and
    /// pre-existing entries are left untouched. Returns rows written plus
    /// rows removed.
    fn sync_suspected_foods(
        &self,
        user_id: Uuid,
        updates: Vec<SuspectedFoodUpdate>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn remove_unsafe_food(
        &self,
        user_id: Uuid,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// Service trait for the unsafe-food list
#[cfg_attr(test, mockall::automock)]
pub trait UnsafeFoodService: Send + Sync {
    fn add_unsafe_food(
        &self,
        input: AddUnsafeFoodInput,
    ) -> impl Future<Output = Result<UnsafeFood, CoreError>> + Send;

    fn list_unsafe_foods(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<UnsafeFood>, CoreError>> + Send;

    fn remove_unsafe_food(
        &self,
        user_id: Uuid,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
