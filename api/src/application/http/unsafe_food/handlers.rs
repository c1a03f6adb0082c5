pub mod add_unsafe_food;
pub mod get_unsafe_foods;
pub mod remove_unsafe_food;
