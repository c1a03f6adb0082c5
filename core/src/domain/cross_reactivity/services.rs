use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    cross_reactivity::{
        entities::{CrossReactionEntry, CrossReactivityReport},
        ports::{CrossReactionRepository, CrossReactivityService},
        resolver::{build_report, dedupe_allergens, resolve_entry},
    },
    health::ports::HealthCheckRepository,
    ingredient::{entities::Ingredient, ports::IngredientRepository},
    meal::ports::MealRepository,
    reaction::ports::ReactionRepository,
};

impl<M, R, I, X, HC> Service<M, R, I, X, HC>
where
    M: MealRepository,
    R: ReactionRepository,
    I: IngredientRepository,
    X: CrossReactionRepository,
    HC: HealthCheckRepository,
{
    async fn lookup_cross_reaction_entry(
        &self,
        allergen: &Ingredient,
    ) -> Result<Option<CrossReactionEntry>, CoreError> {
        if let Some(entry) = self
            .cross_reaction_repository
            .get_by_ingredient_id(allergen.id)
            .await?
        {
            return Ok(Some(entry));
        }

        self.cross_reaction_repository
            .get_by_name(allergen.name.clone())
            .await
    }
}

impl<M, R, I, X, HC> CrossReactivityService for Service<M, R, I, X, HC>
where
    M: MealRepository,
    R: ReactionRepository,
    I: IngredientRepository,
    X: CrossReactionRepository,
    HC: HealthCheckRepository,
{
    async fn get_cross_reactions(&self, user_id: Uuid) -> Result<CrossReactivityReport, CoreError> {
        let allergens = dedupe_allergens(
            self.ingredient_repository
                .get_confirmed_allergens(user_id)
                .await?,
        );

        let mut cross_reactivities = Vec::new();
        for allergen in &allergens {
            let entry = match self.lookup_cross_reaction_entry(allergen).await {
                Ok(Some(entry)) => entry,
                Ok(None) => {
                    debug!(allergen = %allergen.name, "no cross-reaction reference data");
                    continue;
                }
                Err(e) => {
                    warn!(allergen = %allergen.name, "cross-reaction lookup failed: {}", e);
                    continue;
                }
            };

            if let Some(resolved) = resolve_entry(allergen, &entry) {
                cross_reactivities.push(resolved);
            }
        }

        Ok(build_report(cross_reactivities))
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{
        common::services::test_support::Mocks,
        cross_reactivity::entities::{RiskLevel, SimilarityScore},
    };

    fn ingredient(name: &str) -> Ingredient {
        Ingredient {
            id: Uuid::new_v4(),
            name: name.to_string(),
            scientific_name: None,
            is_fodmap: false,
        }
    }

    fn entry_for(anchor: &Ingredient, similarities: &[(&str, f64)]) -> CrossReactionEntry {
        CrossReactionEntry {
            id: Uuid::new_v4(),
            anchor_ingredient_id: Some(anchor.id),
            anchor_name: anchor.name.clone(),
            scientific_name: None,
            protein_sequence: None,
            similarities: similarities
                .iter()
                .map(|(name, score)| SimilarityScore {
                    related_ingredient_id: None,
                    name: name.to_string(),
                    score: *score,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn no_confirmed_allergens_returns_empty_report() {
        let mut mocks = Mocks::new();
        mocks
            .ingredients
            .expect_get_confirmed_allergens()
            .returning(|_| Box::pin(async { Ok(vec![]) }));
        let service = mocks.into_service();

        let report = service
            .get_cross_reactions(Uuid::new_v4())
            .await
            .expect("empty list is not an error");

        assert!(report.cross_reactivities.is_empty());
        assert_eq!(report.risk_overview.total(), 0);
    }

    #[tokio::test]
    async fn resolves_shellfish_and_skips_allergen_without_reference_data() {
        let shellfish = ingredient("Shellfish");
        let sesame = ingredient("Sesame");
        let entry = entry_for(
            &shellfish,
            &[("Mollusk", 90.0), ("Fish", 60.0), ("Rice", 20.0)],
        );
        let allergens = vec![shellfish.clone(), sesame.clone(), shellfish.clone()];

        let mut mocks = Mocks::new();
        mocks
            .ingredients
            .expect_get_confirmed_allergens()
            .returning(move |_| {
                let allergens = allergens.clone();
                Box::pin(async move { Ok(allergens) })
            });
        mocks
            .cross_reactions
            .expect_get_by_ingredient_id()
            .with(eq(shellfish.id))
            .times(1)
            .returning(move |_| {
                let entry = entry.clone();
                Box::pin(async move { Ok(Some(entry)) })
            });
        mocks
            .cross_reactions
            .expect_get_by_ingredient_id()
            .with(eq(sesame.id))
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks
            .cross_reactions
            .expect_get_by_name()
            .with(eq("Sesame".to_string()))
            .returning(|_| Box::pin(async { Ok(None) }));
        let service = mocks.into_service();

        let report = service
            .get_cross_reactions(Uuid::new_v4())
            .await
            .expect("resolution should succeed");

        assert_eq!(report.cross_reactivities.len(), 1);
        let shellfish_result = &report.cross_reactivities[0];
        assert_eq!(shellfish_result.allergen_id, shellfish.id);
        assert_eq!(shellfish_result.related_foods.len(), 2);
        assert_eq!(shellfish_result.related_foods[0].risk_level, RiskLevel::High);
        assert_eq!(report.risk_overview.high, 1);
        assert_eq!(report.risk_overview.medium, 1);
        assert_eq!(report.risk_overview.low, 0);
    }

    #[tokio::test]
    async fn falls_back_to_name_lookup() {
        let milk = ingredient("Milk");
        let entry = CrossReactionEntry {
            anchor_ingredient_id: None,
            ..entry_for(&milk, &[("Goat milk", 92.0)])
        };
        let allergens = vec![milk.clone()];

        let mut mocks = Mocks::new();
        mocks
            .ingredients
            .expect_get_confirmed_allergens()
            .returning(move |_| {
                let allergens = allergens.clone();
                Box::pin(async move { Ok(allergens) })
            });
        mocks
            .cross_reactions
            .expect_get_by_ingredient_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks
            .cross_reactions
            .expect_get_by_name()
            .times(1)
            .returning(move |_| {
                let entry = entry.clone();
                Box::pin(async move { Ok(Some(entry)) })
            });
        let service = mocks.into_service();

        let report = service
            .get_cross_reactions(Uuid::new_v4())
            .await
            .expect("resolution should succeed");

        assert_eq!(report.cross_reactivities.len(), 1);
        assert_eq!(report.cross_reactivities[0].related_foods[0].name, "Goat milk");
    }

    #[tokio::test]
    async fn failed_lookup_does_not_fail_the_request() {
        let milk = ingredient("Milk");
        let allergens = vec![milk];

        let mut mocks = Mocks::new();
        mocks
            .ingredients
            .expect_get_confirmed_allergens()
            .returning(move |_| {
                let allergens = allergens.clone();
                Box::pin(async move { Ok(allergens) })
            });
        mocks
            .cross_reactions
            .expect_get_by_ingredient_id()
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));
        let service = mocks.into_service();

        let report = service
            .get_cross_reactions(Uuid::new_v4())
            .await
            .expect("partial results are returned");

        assert!(report.cross_reactivities.is_empty());
    }
}
