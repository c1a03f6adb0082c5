use tracing::info;

use crate::{
    domain::common::{AllertrackConfig, services::Service},
    infrastructure::{
        cross_reaction::PostgresCrossReactionRepository,
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        ingredient::PostgresIngredientRepository,
        meal::PostgresMealRepository,
        reaction::PostgresReactionRepository,
    },
};

pub mod rescore;

pub type AllertrackService = Service<
    PostgresMealRepository,
    PostgresReactionRepository,
    PostgresIngredientRepository,
    PostgresCrossReactionRepository,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: AllertrackConfig) -> Result<AllertrackService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    sqlx::migrate!("./migrations")
        .run(postgres.get_postgres_connection_pool())
        .await?;
    info!("database migrations applied");

    let meal = PostgresMealRepository::new(postgres.get_db());
    let reaction = PostgresReactionRepository::new(postgres.get_db());
    let ingredient = PostgresIngredientRepository::new(postgres.get_db());
    let cross_reaction = PostgresCrossReactionRepository::new(postgres.get_db());
    let health_check = PostgresHealthCheckRepository::new(postgres.get_db());

    Ok(Service::new(
        meal,
        reaction,
        ingredient,
        cross_reaction,
        health_check,
        config.scoring,
    ))
}
