pub mod cross_reaction;
pub mod db;
pub mod health;
pub mod ingredient;
pub mod meal;
pub mod reaction;
