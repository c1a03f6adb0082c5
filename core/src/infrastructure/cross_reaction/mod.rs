pub mod mappers;
pub mod repositories;

pub use repositories::cross_reaction_repository::PostgresCrossReactionRepository;
