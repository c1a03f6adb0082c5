use std::sync::Arc;

use crate::domain::{
    cross_reactivity::ports::CrossReactionRepository, health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository, meal::ports::MealRepository,
    reaction::ports::ReactionRepository, suspicion::policies::ScoringPolicy,
};

/// Application service shared by every domain; each domain implements its
/// service trait on this struct in its own `services.rs`.
pub struct Service<M, R, I, X, HC>
where
    M: MealRepository,
    R: ReactionRepository,
    I: IngredientRepository,
    X: CrossReactionRepository,
    HC: HealthCheckRepository,
{
    pub(crate) meal_repository: Arc<M>,
    pub(crate) reaction_repository: Arc<R>,
    pub(crate) ingredient_repository: Arc<I>,
    pub(crate) cross_reaction_repository: Arc<X>,
    pub(crate) health_check_repository: Arc<HC>,
    pub(crate) scoring_policy: Arc<ScoringPolicy>,
}

impl<M, R, I, X, HC> Service<M, R, I, X, HC>
where
    M: MealRepository,
    R: ReactionRepository,
    I: IngredientRepository,
    X: CrossReactionRepository,
    HC: HealthCheckRepository,
{
    pub fn new(
        meal_repository: M,
        reaction_repository: R,
        ingredient_repository: I,
        cross_reaction_repository: X,
        health_check_repository: HC,
        scoring_policy: ScoringPolicy,
    ) -> Self {
        Self {
            meal_repository: Arc::new(meal_repository),
            reaction_repository: Arc::new(reaction_repository),
            ingredient_repository: Arc::new(ingredient_repository),
            cross_reaction_repository: Arc::new(cross_reaction_repository),
            health_check_repository: Arc::new(health_check_repository),
            scoring_policy: Arc::new(scoring_policy),
        }
    }
}

impl<M, R, I, X, HC> Clone for Service<M, R, I, X, HC>
where
    M: MealRepository,
    R: ReactionRepository,
    I: IngredientRepository,
    X: CrossReactionRepository,
    HC: HealthCheckRepository,
{
    fn clone(&self) -> Self {
        Self {
            meal_repository: Arc::clone(&self.meal_repository),
            reaction_repository: Arc::clone(&self.reaction_repository),
            ingredient_repository: Arc::clone(&self.ingredient_repository),
            cross_reaction_repository: Arc::clone(&self.cross_reaction_repository),
            health_check_repository: Arc::clone(&self.health_check_repository),
            scoring_policy: Arc::clone(&self.scoring_policy),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Service;
    use crate::domain::{
        cross_reactivity::ports::MockCrossReactionRepository,
        health::ports::MockHealthCheckRepository, ingredient::ports::MockIngredientRepository,
        meal::ports::MockMealRepository, reaction::ports::MockReactionRepository,
        suspicion::policies::ScoringPolicy,
    };

    pub type TestService = Service<
        MockMealRepository,
        MockReactionRepository,
        MockIngredientRepository,
        MockCrossReactionRepository,
        MockHealthCheckRepository,
    >;

    /// Mocks with no expectations; any unexpected call panics.
    pub struct Mocks {
        pub meals: MockMealRepository,
        pub reactions: MockReactionRepository,
        pub ingredients: MockIngredientRepository,
        pub cross_reactions: MockCrossReactionRepository,
        pub health: MockHealthCheckRepository,
    }

    impl Mocks {
        pub fn new() -> Self {
            Self {
                meals: MockMealRepository::new(),
                reactions: MockReactionRepository::new(),
                ingredients: MockIngredientRepository::new(),
                cross_reactions: MockCrossReactionRepository::new(),
                health: MockHealthCheckRepository::new(),
            }
        }

        pub fn into_service(self) -> TestService {
            self.into_service_with_policy(ScoringPolicy::default())
        }

        pub fn into_service_with_policy(self, policy: ScoringPolicy) -> TestService {
            Service::new(
                self.meals,
                self.reactions,
                self.ingredients,
                self.cross_reactions,
                self.health,
                policy,
            )
        }
    }
}
