use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait, Order, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait, sea_query::Expr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_timestamp},
        meal::{entities::MealEvent, ports::MealRepository, value_objects::GetMealFilter},
    },
    entity::{
        meal_event_ingredients::{
            ActiveModel as MealIngredientActiveModel, Column as MealIngredientColumn,
            Entity as MealIngredientEntity,
        },
        meal_events::{ActiveModel, Column, Entity},
    },
    infrastructure::meal::mappers::group_ingredients,
};

#[derive(Debug, Clone)]
pub struct PostgresMealRepository {
    pub db: DatabaseConnection,
}

impl PostgresMealRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn attach_ingredients(&self, meals: Vec<MealEvent>) -> Result<Vec<MealEvent>, CoreError> {
        if meals.is_empty() {
            return Ok(meals);
        }

        let meal_ids: Vec<Uuid> = meals.iter().map(|meal| meal.id).collect();
        let rows = MealIngredientEntity::find()
            .filter(MealIngredientColumn::MealEventId.is_in(meal_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load meal ingredients: {}", e);
                CoreError::InternalServerError
            })?;
        let mut grouped = group_ingredients(rows);

        Ok(meals
            .into_iter()
            .map(|mut meal| {
                meal.ingredient_ids = grouped.remove(&meal.id).unwrap_or_default();
                meal
            })
            .collect())
    }
}

impl MealRepository for PostgresMealRepository {
    async fn create_meal(&self, meal: MealEvent) -> Result<MealEvent, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to start meal transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let active_model = ActiveModel {
            id: Set(meal.id),
            user_id: Set(meal.user_id),
            eaten_at: Set(meal.timestamp.fixed_offset()),
            had_reaction: Set(meal.had_reaction),
            notes: Set(meal.notes.clone()),
            created_at: Set(meal.created_at.fixed_offset()),
            updated_at: Set(meal.updated_at.fixed_offset()),
            deleted_at: Set(None),
        };

        Entity::insert(active_model)
            .exec_without_returning(&txn)
            .await
            .map_err(|e| {
                error!("Failed to create meal event: {}", e);
                CoreError::InternalServerError
            })?;

        if !meal.ingredient_ids.is_empty() {
            let ingredient_models: Vec<MealIngredientActiveModel> = meal
                .ingredient_ids
                .iter()
                .enumerate()
                .map(|(position, ingredient_id)| MealIngredientActiveModel {
                    meal_event_id: Set(meal.id),
                    ingredient_id: Set(*ingredient_id),
                    position: Set(position as i32),
                })
                .collect();

            MealIngredientEntity::insert_many(ingredient_models)
                .exec_without_returning(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to create meal ingredients: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit meal event: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(meal)
    }

    async fn get_by_id(&self, meal_id: Uuid, user_id: Uuid) -> Result<Option<MealEvent>, CoreError> {
        let meal = Entity::find()
            .filter(Column::Id.eq(meal_id))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get meal event: {}", e);
                CoreError::InternalServerError
            })?;

        match meal {
            Some(model) => Ok(self
                .attach_ingredients(vec![MealEvent::from(model)])
                .await?
                .pop()),
            None => Ok(None),
        }
    }

    async fn list_meals(
        &self,
        user_id: Uuid,
        filter: GetMealFilter,
    ) -> Result<Vec<MealEvent>, CoreError> {
        let mut query = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::DeletedAt.is_null());

        let mut condition = Condition::all();

        if let Some(timestamp_gte) = filter.timestamp_gte {
            condition = condition.add(Column::EatenAt.gte(timestamp_gte.fixed_offset()));
        }

        if let Some(timestamp_lt) = filter.timestamp_lt {
            condition = condition.add(Column::EatenAt.lt(timestamp_lt.fixed_offset()));
        }

        if let Some(ingredient_id) = filter.ingredient_id {
            let meal_ids: Vec<Uuid> = MealIngredientEntity::find()
                .select_only()
                .column(MealIngredientColumn::MealEventId)
                .filter(MealIngredientColumn::IngredientId.eq(ingredient_id))
                .into_tuple()
                .all(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to filter meals by ingredient: {}", e);
                    CoreError::InternalServerError
                })?;
            condition = condition.add(Column::Id.is_in(meal_ids));
        }

        query = query.filter(condition);

        if let Some(ref sort_str) = filter.sort {
            for sort_part in sort_str.split(',') {
                let sort_part = sort_part.trim();
                let (field, order) = match sort_part.strip_prefix('-') {
                    Some(field) => (field, Order::Desc),
                    None => (sort_part, Order::Asc),
                };
                match field {
                    "timestamp" => query = query.order_by(Column::EatenAt, order),
                    "created_at" => query = query.order_by(Column::CreatedAt, order),
                    _ => {}
                }
            }
        } else {
            // Default sort: -timestamp
            query = query.order_by_desc(Column::EatenAt);
        }
        query = query.order_by_asc(Column::Id);

        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }

        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }

        let meals = query.all(&self.db).await.map_err(|e| {
            error!("Failed to list meal events: {}", e);
            CoreError::InternalServerError
        })?;

        self.attach_ingredients(meals.into_iter().map(MealEvent::from).collect())
            .await
    }

    async fn mark_had_reaction(&self, meal_id: Uuid, user_id: Uuid) -> Result<(), CoreError> {
        let (now, _) = generate_timestamp();

        Entity::update_many()
            .col_expr(Column::HadReaction, Expr::value(true))
            .col_expr(Column::UpdatedAt, Expr::value(now.fixed_offset()))
            .filter(Column::Id.eq(meal_id))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to flag meal event: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn clear_had_reaction(&self, meal_id: Uuid, user_id: Uuid) -> Result<(), CoreError> {
        let (now, _) = generate_timestamp();

        Entity::update_many()
            .col_expr(Column::HadReaction, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(now.fixed_offset()))
            .filter(Column::Id.eq(meal_id))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to clear meal event flag: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn soft_delete(&self, meal_id: Uuid, user_id: Uuid) -> Result<bool, CoreError> {
        let (now, _) = generate_timestamp();

        let result = Entity::update_many()
            .col_expr(Column::DeletedAt, Expr::value(now.fixed_offset()))
            .col_expr(Column::UpdatedAt, Expr::value(now.fixed_offset()))
            .filter(Column::Id.eq(meal_id))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete meal event: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected > 0)
    }
}
