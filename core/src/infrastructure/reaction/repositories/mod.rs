pub mod reaction_repository;
