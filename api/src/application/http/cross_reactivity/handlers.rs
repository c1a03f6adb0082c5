pub mod get_cross_reactivity;
