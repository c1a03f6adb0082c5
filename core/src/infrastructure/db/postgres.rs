use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sqlx::PgPool;
use tracing::info;

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let mut options = ConnectOptions::new(config.database_url);
        options
            .max_connections(20)
            .min_connections(2)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        let db = Database::connect(options).await?;
        info!("connected to postgres");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }

    pub fn get_postgres_connection_pool(&self) -> &PgPool {
        self.db.get_postgres_connection_pool()
    }
}
