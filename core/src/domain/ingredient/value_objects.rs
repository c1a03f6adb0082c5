use uuid::Uuid;

use crate::domain::{
    ingredient::entities::UnsafeFoodStatus,
    suspicion::entities::{Confidence, Track},
};

#[derive(Debug, Clone)]
pub struct AddUnsafeFoodInput {
    pub user_id: Uuid,
    pub ingredient_id: Uuid,
    pub status: UnsafeFoodStatus,
    pub pre_existing: bool,
}

/// Scorer output written back into the unsafe-food list as a suspected entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SuspectedFoodUpdate {
    pub ingredient_id: Uuid,
    pub suspicion_score: f64,
    pub confidence: Confidence,
    pub track: Track,
}
