pub mod cross_reaction_repository;
