use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DatabaseBackend, DatabaseConnection, EntityTrait,
    FromQueryResult, QueryFilter, QueryOrder, QuerySelect, Statement, TransactionTrait,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_timestamp, generate_uuid_v7},
        ingredient::{
            entities::{Ingredient, UnsafeFood, UnsafeFoodStatus},
            ports::IngredientRepository,
            value_objects::SuspectedFoodUpdate,
        },
    },
    entity::{
        ingredients::{Column as IngredientColumn, Entity as IngredientEntity},
        unsafe_foods::{self, Column, Entity},
    },
    infrastructure::ingredient::mappers::map_unsafe_food,
};

const UPSERT_UNSAFE_FOOD: &str = r#"
    INSERT INTO unsafe_foods
        (id, user_id, ingredient_id, status, pre_existing, created_at, updated_at)
    VALUES ($1, $2, $3, $4, $5, $6, $6)
    ON CONFLICT (user_id, ingredient_id) DO UPDATE SET
        status = CASE
            WHEN unsafe_foods.status = 'confirmed' THEN 'confirmed'
            ELSE EXCLUDED.status
        END,
        pre_existing = unsafe_foods.pre_existing OR EXCLUDED.pre_existing,
        updated_at = EXCLUDED.updated_at
    RETURNING *
"#;

const UPSERT_SUSPECTED_FOOD: &str = r#"
    INSERT INTO unsafe_foods
        (id, user_id, ingredient_id, status, pre_existing,
         suspicion_score, confidence, track, created_at, updated_at)
    VALUES ($1, $2, $3, 'suspected', FALSE, $4, $5, $6, $7, $7)
    ON CONFLICT (user_id, ingredient_id) DO UPDATE SET
        suspicion_score = EXCLUDED.suspicion_score,
        confidence = EXCLUDED.confidence,
        track = EXCLUDED.track,
        updated_at = EXCLUDED.updated_at
    WHERE unsafe_foods.status = 'suspected' AND unsafe_foods.pre_existing = FALSE
"#;

#[derive(Debug, Clone)]
pub struct PostgresIngredientRepository {
    pub db: DatabaseConnection,
}

impl PostgresIngredientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl IngredientRepository for PostgresIngredientRepository {
    async fn get_by_ids(&self, ingredient_ids: Vec<Uuid>) -> Result<Vec<Ingredient>, CoreError> {
        if ingredient_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ingredients = IngredientEntity::find()
            .filter(IngredientColumn::Id.is_in(ingredient_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ingredients.into_iter().map(Ingredient::from).collect())
    }

    async fn get_confirmed_allergens(&self, user_id: Uuid) -> Result<Vec<Ingredient>, CoreError> {
        let ingredients = IngredientEntity::find()
            .inner_join(Entity)
            .filter(Column::UserId.eq(user_id))
            .filter(
                Condition::any()
                    .add(Column::Status.eq(UnsafeFoodStatus::Confirmed.as_str()))
                    .add(Column::PreExisting.eq(true)),
            )
            .order_by_asc(IngredientColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get confirmed allergens: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ingredients.into_iter().map(Ingredient::from).collect())
    }

    async fn list_unsafe_foods(&self, user_id: Uuid) -> Result<Vec<UnsafeFood>, CoreError> {
        let rows = Entity::find()
            .find_also_related(IngredientEntity)
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Status)
            .order_by_asc(IngredientColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list unsafe foods: {}", e);
                CoreError::InternalServerError
            })?;

        rows.iter()
            .map(|(model, ingredient)| {
                let name = ingredient
                    .as_ref()
                    .map(|i| i.name.clone())
                    .unwrap_or_default();
                map_unsafe_food(model, name)
            })
            .collect()
    }

    async fn upsert_unsafe_food(&self, unsafe_food: UnsafeFood) -> Result<UnsafeFood, CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            UPSERT_UNSAFE_FOOD,
            [
                unsafe_food.id.into(),
                unsafe_food.user_id.into(),
                unsafe_food.ingredient_id.into(),
                unsafe_food.status.as_str().into(),
                unsafe_food.pre_existing.into(),
                unsafe_food.updated_at.fixed_offset().into(),
            ],
        );

        let stored = unsafe_foods::Model::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to upsert unsafe food: {}", e);
                CoreError::InternalServerError
            })?
            .ok_or(CoreError::InternalServerError)?;

        map_unsafe_food(&stored, unsafe_food.ingredient_name)
    }

    async fn sync_suspected_foods(
        &self,
        user_id: Uuid,
        updates: Vec<SuspectedFoodUpdate>,
    ) -> Result<u64, CoreError> {
        let current: Vec<Uuid> = updates.iter().map(|u| u.ingredient_id).collect();

        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to start suspected foods transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let (now, _) = generate_timestamp();
        let mut written = 0;
        for update in updates {
            let stmt = Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                UPSERT_SUSPECTED_FOOD,
                [
                    generate_uuid_v7().into(),
                    user_id.into(),
                    update.ingredient_id.into(),
                    update.suspicion_score.into(),
                    update.confidence.as_str().into(),
                    update.track.as_str().into(),
                    now.fixed_offset().into(),
                ],
            );

            let result = txn.execute(stmt).await.map_err(|e| {
                error!("Failed to upsert suspected food: {}", e);
                CoreError::InternalServerError
            })?;
            written += result.rows_affected();
        }

        let mut stale = Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Status.eq(UnsafeFoodStatus::Suspected.as_str()))
            .filter(Column::PreExisting.eq(false));
        if !current.is_empty() {
            stale = stale.filter(Column::IngredientId.is_not_in(current));
        }
        let removed = stale.exec(&txn).await.map_err(|e| {
            error!("Failed to remove stale suspected foods: {}", e);
            CoreError::InternalServerError
        })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit suspected foods: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(written + removed.rows_affected)
    }

    async fn remove_unsafe_food(&self, user_id: Uuid, ingredient_id: Uuid) -> Result<bool, CoreError> {
        let result = Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::IngredientId.eq(ingredient_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to remove unsafe food: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected > 0)
    }
}
