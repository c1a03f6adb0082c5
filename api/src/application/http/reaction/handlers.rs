pub mod create_reaction;
pub mod delete_reaction;
pub mod get_reactions;
