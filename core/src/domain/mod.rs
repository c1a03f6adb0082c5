pub mod common;
pub mod cross_reactivity;
pub mod health;
pub mod ingredient;
pub mod meal;
pub mod monthly_analysis;
pub mod reaction;
pub mod suspicion;
