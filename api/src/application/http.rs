pub mod cross_reactivity;
pub mod health;
pub mod meal;
pub mod monthly_analysis;
pub mod query_extractor;
pub mod query_params;
pub mod reaction;
pub mod server;
pub mod suspicion;
pub mod unsafe_food;
