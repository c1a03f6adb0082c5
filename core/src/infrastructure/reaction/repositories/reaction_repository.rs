use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait, Order, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_uuid_v7},
        reaction::{
            entities::ReactionEvent, ports::ReactionRepository, value_objects::GetReactionFilter,
        },
    },
    entity::{
        reaction_events::{ActiveModel, Column, Entity},
        reaction_symptoms::{
            ActiveModel as SymptomActiveModel, Column as SymptomColumn, Entity as SymptomEntity,
        },
    },
    infrastructure::reaction::mappers::group_symptoms,
};

#[derive(Debug, Clone)]
pub struct PostgresReactionRepository {
    pub db: DatabaseConnection,
}

impl PostgresReactionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn attach_symptoms(
        &self,
        reactions: Vec<ReactionEvent>,
    ) -> Result<Vec<ReactionEvent>, CoreError> {
        if reactions.is_empty() {
            return Ok(reactions);
        }

        let reaction_ids: Vec<Uuid> = reactions.iter().map(|r| r.id).collect();
        let rows = SymptomEntity::find()
            .filter(SymptomColumn::ReactionEventId.is_in(reaction_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load reaction symptoms: {}", e);
                CoreError::InternalServerError
            })?;
        let mut grouped = group_symptoms(rows);

        Ok(reactions
            .into_iter()
            .map(|mut reaction| {
                reaction.symptoms = grouped.remove(&reaction.id).unwrap_or_default();
                reaction
            })
            .collect())
    }
}

impl ReactionRepository for PostgresReactionRepository {
    async fn create_reaction(&self, reaction: ReactionEvent) -> Result<ReactionEvent, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to start reaction transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let active_model = ActiveModel {
            id: Set(reaction.id),
            user_id: Set(reaction.user_id),
            meal_event_id: Set(reaction.meal_event_id),
            occurred_at: Set(reaction.timestamp.fixed_offset()),
            notes: Set(reaction.notes.clone()),
            created_at: Set(reaction.created_at.fixed_offset()),
            updated_at: Set(reaction.updated_at.fixed_offset()),
        };

        Entity::insert(active_model)
            .exec_without_returning(&txn)
            .await
            .map_err(|e| {
                error!("Failed to create reaction event: {}", e);
                CoreError::InternalServerError
            })?;

        if !reaction.symptoms.is_empty() {
            let symptom_models: Vec<SymptomActiveModel> = reaction
                .symptoms
                .iter()
                .enumerate()
                .map(|(position, symptom)| SymptomActiveModel {
                    id: Set(generate_uuid_v7()),
                    reaction_event_id: Set(reaction.id),
                    symptom_id: Set(symptom.symptom_id),
                    severity: Set(i16::from(symptom.severity.value())),
                    onset_minutes: Set(symptom.onset_minutes.map(|m| m.min(i32::MAX as u32) as i32)),
                    position: Set(position as i32),
                })
                .collect();

            SymptomEntity::insert_many(symptom_models)
                .exec_without_returning(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to create reaction symptoms: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit reaction event: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(reaction)
    }

    async fn get_by_id(
        &self,
        reaction_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ReactionEvent>, CoreError> {
        let reaction = Entity::find()
            .filter(Column::Id.eq(reaction_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get reaction event: {}", e);
                CoreError::InternalServerError
            })?;

        match reaction {
            Some(model) => Ok(self
                .attach_symptoms(vec![ReactionEvent::from(model)])
                .await?
                .pop()),
            None => Ok(None),
        }
    }

    async fn list_reactions(
        &self,
        user_id: Uuid,
        filter: GetReactionFilter,
    ) -> Result<Vec<ReactionEvent>, CoreError> {
        let mut query = Entity::find().filter(Column::UserId.eq(user_id));

        let mut condition = Condition::all();

        if let Some(meal_event_id) = filter.meal_event_id {
            condition = condition.add(Column::MealEventId.eq(meal_event_id));
        }

        if let Some(timestamp_gte) = filter.timestamp_gte {
            condition = condition.add(Column::OccurredAt.gte(timestamp_gte.fixed_offset()));
        }

        if let Some(timestamp_lt) = filter.timestamp_lt {
            condition = condition.add(Column::OccurredAt.lt(timestamp_lt.fixed_offset()));
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
                    "timestamp" => query = query.order_by(Column::OccurredAt, order),
                    "created_at" => query = query.order_by(Column::CreatedAt, order),
                    _ => {}
                }
            }
        } else {
            // Default sort: -timestamp
            query = query.order_by_desc(Column::OccurredAt);
        }
        query = query.order_by_asc(Column::Id);

        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }

        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }

        let reactions = query.all(&self.db).await.map_err(|e| {
            error!("Failed to list reaction events: {}", e);
            CoreError::InternalServerError
        })?;

        self.attach_symptoms(reactions.into_iter().map(ReactionEvent::from).collect())
            .await
    }

    async fn delete_reaction(&self, reaction_id: Uuid, user_id: Uuid) -> Result<bool, CoreError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(reaction_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete reaction event: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected > 0)
    }
}
