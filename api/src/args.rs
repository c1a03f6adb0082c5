use allertrack_core::domain::{
    common::{AllertrackConfig, DatabaseConfig},
    suspicion::{entities::Confidence, policies::ScoringPolicy},
};
use clap::{Args as ClapArgs, Parser};

#[derive(Debug, Clone, Parser)]
#[command(name = "allertrack", version, about = "Food allergy tracking API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,
    #[command(flatten)]
    pub db: DatabaseArgs,
    #[command(flatten)]
    pub log: LogArgs,
    #[command(flatten)]
    pub scoring: ScoringArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,
    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,
    #[arg(long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,
    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,
    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres",
        hide_env_values = true
    )]
    pub password: String,
    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "allertrack")]
    pub name: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// `EnvFilter` directives, e.g. `info,allertrack_core=debug`.
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,
    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ScoringArgs {
    #[arg(long = "scoring-min-occurrences", env = "SCORING_MIN_OCCURRENCES", default_value_t = 2)]
    pub min_occurrences: u32,
    #[arg(
        long = "scoring-evidence-saturation",
        env = "SCORING_EVIDENCE_SATURATION",
        default_value_t = 8.0
    )]
    pub evidence_saturation_meals: f64,
    /// Lowest confidence tier written back to the unsafe-food list.
    #[arg(
        long = "scoring-persist-min-confidence",
        env = "SCORING_PERSIST_MIN_CONFIDENCE",
        default_value = "moderate"
    )]
    pub persist_min_confidence: Confidence,
    #[arg(
        long = "rescore-queue-capacity",
        env = "RESCORE_QUEUE_CAPACITY",
        default_value_t = 256
    )]
    pub rescore_queue_capacity: usize,
}

impl From<Args> for AllertrackConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            scoring: ScoringPolicy {
                min_occurrences: args.scoring.min_occurrences,
                evidence_saturation_meals: args.scoring.evidence_saturation_meals,
                persist_min_confidence: args.scoring.persist_min_confidence,
                ..ScoringPolicy::default()
            },
            rescore_queue_capacity: args.scoring.rescore_queue_capacity,
        }
    }
}
