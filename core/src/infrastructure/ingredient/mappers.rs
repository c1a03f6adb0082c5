use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        ingredient::entities::{Ingredient, UnsafeFood},
        suspicion::entities::{Confidence, Track},
    },
    entity::{ingredients, unsafe_foods},
};

impl From<&ingredients::Model> for Ingredient {
    fn from(model: &ingredients::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            scientific_name: model.scientific_name.clone(),
            is_fodmap: model.is_fodmap,
        }
    }
}

impl From<ingredients::Model> for Ingredient {
    fn from(model: ingredients::Model) -> Self {
        Self::from(&model)
    }
}

/// Builds the domain entry; the ingredient name lives on the reference table.
pub fn map_unsafe_food(
    model: &unsafe_foods::Model,
    ingredient_name: String,
) -> Result<UnsafeFood, CoreError> {
    Ok(UnsafeFood {
        id: model.id,
        user_id: model.user_id,
        ingredient_id: model.ingredient_id,
        ingredient_name,
        status: model.status.parse()?,
        pre_existing: model.pre_existing,
        suspicion_score: model.suspicion_score,
        confidence: model.confidence.as_deref().map(str::parse::<Confidence>).transpose()?,
        track: model.track.as_deref().map(str::parse::<Track>).transpose()?,
        created_at: model.created_at.to_utc(),
        updated_at: model.updated_at.to_utc(),
    })
}
