use std::time::Instant;

use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ping(&self) -> Result<u64, sea_orm::DbErr> {
        let started = Instant::now();
        self.db
            .execute(Statement::from_string(DatabaseBackend::Postgres, "SELECT 1"))
            .await?;
        Ok(started.elapsed().as_millis() as u64)
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        match self.ping().await {
            Ok(response_time_ms) => Ok(DatabaseHealthStatus {
                status: "healthy".to_string(),
                response_time_ms,
                error: None,
            }),
            Err(e) => {
                error!("Database readiness check failed: {}", e);
                Ok(DatabaseHealthStatus {
                    status: "unhealthy".to_string(),
                    response_time_ms: 0,
                    error: Some(e.to_string()),
                })
            }
        }
    }
}
