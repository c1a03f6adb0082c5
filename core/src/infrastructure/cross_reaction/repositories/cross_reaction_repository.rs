use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    sea_query::{Expr, Func},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        cross_reactivity::{entities::CrossReactionEntry, ports::CrossReactionRepository},
    },
    entity::{
        cross_reaction_entries::{Column, Entity, Model},
        cross_reaction_similarities::{Column as SimilarityColumn, Entity as SimilarityEntity},
    },
    infrastructure::cross_reaction::mappers::map_entry,
};

#[derive(Debug, Clone)]
pub struct PostgresCrossReactionRepository {
    pub db: DatabaseConnection,
}

impl PostgresCrossReactionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn with_similarities(&self, entry: Option<Model>) -> Result<Option<CrossReactionEntry>, CoreError> {
        let Some(entry) = entry else {
            return Ok(None);
        };

        let similarities = SimilarityEntity::find()
            .filter(SimilarityColumn::EntryId.eq(entry.id))
            .order_by_desc(SimilarityColumn::Score)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load cross-reaction similarities: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Some(map_entry(entry, &similarities)))
    }
}

impl CrossReactionRepository for PostgresCrossReactionRepository {
    async fn get_by_ingredient_id(
        &self,
        ingredient_id: Uuid,
    ) -> Result<Option<CrossReactionEntry>, CoreError> {
        let entry = Entity::find()
            .filter(Column::AnchorIngredientId.eq(ingredient_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get cross-reaction entry: {}", e);
                CoreError::InternalServerError
            })?;

        self.with_similarities(entry).await
    }

    async fn get_by_name(&self, name: String) -> Result<Option<CrossReactionEntry>, CoreError> {
        let entry = Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(Column::AnchorName)))
                    .eq(name.trim().to_lowercase()),
            )
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get cross-reaction entry by name: {}", e);
                CoreError::InternalServerError
            })?;

        self.with_similarities(entry).await
    }
}
