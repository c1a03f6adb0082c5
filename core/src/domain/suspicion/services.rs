use std::collections::HashMap;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    cross_reactivity::ports::CrossReactionRepository,
    health::ports::HealthCheckRepository,
    ingredient::{ports::IngredientRepository, value_objects::SuspectedFoodUpdate},
    meal::{ports::MealRepository, value_objects::GetMealFilter},
    reaction::{ports::ReactionRepository, value_objects::GetReactionFilter},
    suspicion::{
        entities::SuspicionRecord,
        ports::SuspicionService,
        scoring::{build_exposures, score_exposures},
    },
};

impl<M, R, I, X, HC> SuspicionService for Service<M, R, I, X, HC>
where
    M: MealRepository,
    R: ReactionRepository,
    I: IngredientRepository,
    X: CrossReactionRepository,
    HC: HealthCheckRepository,
{
    async fn compute_suspected_foods(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<SuspicionRecord>, CoreError> {
        let (meals, reactions) = futures::try_join!(
            self.meal_repository
                .list_meals(user_id, GetMealFilter::default()),
            self.reaction_repository
                .list_reactions(user_id, GetReactionFilter::default()),
        )?;

        if meals.is_empty() {
            return Ok(Vec::new());
        }

        let snapshot = build_exposures(&meals, &reactions);
        if snapshot.orphaned_reactions > 0 {
            debug!(
                %user_id,
                count = snapshot.orphaned_reactions,
                "ignoring reactions whose meal was deleted"
            );
        }

        let ingredient_ids: Vec<Uuid> = snapshot.exposures.keys().copied().collect();
        let ingredients: HashMap<Uuid, _> = self
            .ingredient_repository
            .get_by_ids(ingredient_ids)
            .await?
            .into_iter()
            .map(|ingredient| (ingredient.id, ingredient))
            .collect();

        let unresolved = snapshot
            .exposures
            .keys()
            .filter(|id| !ingredients.contains_key(id))
            .count();
        if unresolved > 0 {
            warn!(%user_id, unresolved, "skipping ingredients missing from reference data");
        }

        Ok(score_exposures(&snapshot, &ingredients, &self.scoring_policy))
    }

    async fn rescore_user(&self, user_id: Uuid) -> Result<u64, CoreError> {
        let records = self.compute_suspected_foods(user_id).await?;

        let updates: Vec<SuspectedFoodUpdate> = records
            .into_iter()
            .filter(|record| record.confidence >= self.scoring_policy.persist_min_confidence)
            .map(|record| SuspectedFoodUpdate {
                ingredient_id: record.ingredient_id,
                suspicion_score: record.suspicion_score,
                confidence: record.confidence,
                track: record.track,
            })
            .collect();

        self.ingredient_repository
            .sync_suspected_foods(user_id, updates)
            .await
    }
}
