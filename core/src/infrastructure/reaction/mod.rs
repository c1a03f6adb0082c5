pub mod mappers;
pub mod repositories;

pub use repositories::reaction_repository::PostgresReactionRepository;
