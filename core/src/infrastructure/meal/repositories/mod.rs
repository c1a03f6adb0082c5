pub mod meal_repository;
