pub mod mappers;
pub mod repositories;

pub use repositories::meal_repository::PostgresMealRepository;
