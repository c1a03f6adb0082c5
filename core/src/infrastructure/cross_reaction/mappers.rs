use crate::{
    domain::cross_reactivity::entities::{CrossReactionEntry, SimilarityScore},
    entity::{cross_reaction_entries, cross_reaction_similarities},
};

impl From<&cross_reaction_similarities::Model> for SimilarityScore {
    fn from(model: &cross_reaction_similarities::Model) -> Self {
        Self {
            related_ingredient_id: model.related_ingredient_id,
            name: model.name.clone(),
            score: model.score,
        }
    }
}

pub fn map_entry(
    model: cross_reaction_entries::Model,
    similarities: &[cross_reaction_similarities::Model],
) -> CrossReactionEntry {
    CrossReactionEntry {
        id: model.id,
        anchor_ingredient_id: model.anchor_ingredient_id,
        anchor_name: model.anchor_name,
        scientific_name: model.scientific_name,
        protein_sequence: model.protein_sequence,
        similarities: similarities.iter().map(SimilarityScore::from).collect(),
    }
}
