use std::sync::Arc;

use allertrack_core::application::{AllertrackService, rescore::RescoreQueue};

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: AllertrackService,
    pub rescore_queue: RescoreQueue,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: AllertrackService, rescore_queue: RescoreQueue) -> Self {
        Self {
            args,
            service,
            rescore_queue,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use allertrack_core::{
        application::rescore::RescoreQueue,
        domain::{common::services::Service, suspicion::policies::ScoringPolicy},
        entity::reaction_events,
        infrastructure::{
            cross_reaction::PostgresCrossReactionRepository,
            health::PostgresHealthCheckRepository, ingredient::PostgresIngredientRepository,
            meal::PostgresMealRepository, reaction::PostgresReactionRepository,
        },
    };
    use clap::Parser;
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::AppState;
    use crate::args::Args;

    /// State over a mock database whose queries all return no rows.
    pub fn empty_state() -> AppState {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results((0..8).map(|_| Vec::<reaction_events::Model>::new()))
            .into_connection();

        let service = Service::new(
            PostgresMealRepository::new(db.clone()),
            PostgresReactionRepository::new(db.clone()),
            PostgresIngredientRepository::new(db.clone()),
            PostgresCrossReactionRepository::new(db.clone()),
            PostgresHealthCheckRepository::new(db),
            ScoringPolicy::default(),
        );
        let (rescore_queue, _) = RescoreQueue::new(1);

        AppState::new(Arc::new(Args::parse_from(["allertrack"])), service, rescore_queue)
    }
}
