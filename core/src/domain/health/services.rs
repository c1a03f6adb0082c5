use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    cross_reactivity::ports::CrossReactionRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    ingredient::ports::IngredientRepository,
    meal::ports::MealRepository,
    reaction::ports::ReactionRepository,
};

impl<M, R, I, X, HC> HealthCheckService for Service<M, R, I, X, HC>
where
    M: MealRepository,
    R: ReactionRepository,
    I: IngredientRepository,
    X: CrossReactionRepository,
    HC: HealthCheckRepository,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::services::test_support::Mocks;

    #[tokio::test]
    async fn readness_reports_repository_status() {
        let mut mocks = Mocks::new();
        mocks.health.expect_readness().returning(|| {
            Box::pin(async {
                Ok(DatabaseHealthStatus {
                    status: "healthy".to_string(),
                    response_time_ms: 3,
                    error: None,
                })
            })
        });
        let service = mocks.into_service();

        let status = service.readness().await.expect("database reachable");

        assert!(status.is_healthy());
        assert_eq!(status.response_time_ms, 3);
    }
}
