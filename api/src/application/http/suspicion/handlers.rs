pub mod get_suspected_foods;
