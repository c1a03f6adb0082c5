use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    cross_reactivity::ports::CrossReactionRepository,
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    meal::ports::MealRepository,
    reaction::{
        entities::{ReactionEvent, ReactionEventConfig, Severity, SymptomEntry},
        ports::{ReactionRepository, ReactionService},
        value_objects::{CreateReactionInput, GetReactionFilter, SymptomInput},
    },
};

/// Validate raw symptoms before they can reach any aggregation.
pub fn validate_symptoms(symptoms: Vec<SymptomInput>) -> Result<Vec<SymptomEntry>, CoreError> {
    symptoms
        .into_iter()
        .map(|symptom| {
            let severity = Severity::try_from(symptom.severity)?;
            let onset_minutes = match symptom.onset_minutes {
                Some(minutes) if minutes < 0 => {
                    return Err(CoreError::InvalidInput(format!(
                        "onset minutes must not be negative, got {}",
                        minutes
                    )));
                }
                Some(minutes) => Some(minutes as u32),
                None => None,
            };

            Ok(SymptomEntry {
                symptom_id: symptom.symptom_id,
                severity,
                onset_minutes,
            })
        })
        .collect()
}

impl<M, R, I, X, HC> ReactionService for Service<M, R, I, X, HC>
where
    M: MealRepository,
    R: ReactionRepository,
    I: IngredientRepository,
    X: CrossReactionRepository,
    HC: HealthCheckRepository,
{
    async fn create_reaction(&self, input: CreateReactionInput) -> Result<ReactionEvent, CoreError> {
        let symptoms = validate_symptoms(input.symptoms)?;

        if let Some(meal_id) = input.meal_event_id {
            self.meal_repository
                .get_by_id(meal_id, input.user_id)
                .await?
                .ok_or(CoreError::NotFound)?;
        }

        let reaction = ReactionEvent::new(ReactionEventConfig {
            user_id: input.user_id,
            meal_event_id: input.meal_event_id,
            timestamp: input.timestamp,
            symptoms,
            notes: input.notes,
        });

        let created = self.reaction_repository.create_reaction(reaction).await?;

        if let Some(meal_id) = created.meal_event_id {
            self.meal_repository
                .mark_had_reaction(meal_id, created.user_id)
                .await?;
        }

        debug!(reaction_id = %created.id, user_id = %created.user_id, "reaction logged");

        Ok(created)
    }

    async fn list_reactions(
        &self,
        user_id: Uuid,
        filter: GetReactionFilter,
    ) -> Result<Vec<ReactionEvent>, CoreError> {
        self.reaction_repository
            .list_reactions(user_id, filter)
            .await
    }

    async fn delete_reaction(&self, user_id: Uuid, reaction_id: Uuid) -> Result<(), CoreError> {
        let reaction = self
            .reaction_repository
            .get_by_id(reaction_id, user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let deleted = self
            .reaction_repository
            .delete_reaction(reaction_id, user_id)
            .await?;
        if !deleted {
            return Err(CoreError::NotFound);
        }

        // A meal stays flagged only while a reaction still points at it.
        if let Some(meal_id) = reaction.meal_event_id {
            let remaining = self
                .reaction_repository
                .list_reactions(
                    user_id,
                    GetReactionFilter {
                        meal_event_id: Some(meal_id),
                        limit: Some(1),
                        ..Default::default()
                    },
                )
                .await?;

            if remaining.is_empty() {
                self.meal_repository
                    .clear_had_reaction(meal_id, user_id)
                    .await?;
                debug!(meal_id = %meal_id, user_id = %user_id, "meal reaction flag cleared");
            }
        }

        Ok(())
    }
}
