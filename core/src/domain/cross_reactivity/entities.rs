use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Protein similarity between an anchor food and a related food, 0..=100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityScore {
    pub related_ingredient_id: Option<Uuid>,
    pub name: String,
    pub score: f64,
}

/// Precomputed cross-reaction reference data for one anchor food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrossReactionEntry {
    pub id: Uuid,
    pub anchor_ingredient_id: Option<Uuid>,
    pub anchor_name: String,
    pub scientific_name: Option<String>,
    pub protein_sequence: Option<String>,
    pub similarities: Vec<SimilarityScore>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelatedFood {
    pub ingredient_id: Option<Uuid>,
    pub name: String,
    pub similarity: f64,
    pub risk_level: RiskLevel,
}

/// Related foods of one confirmed allergen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrossReactivity {
    pub allergen_id: Uuid,
    pub allergen_name: String,
    pub scientific_name: Option<String>,
    pub related_foods: Vec<RelatedFood>,
    pub average_similarity: f64,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RiskOverview {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl RiskOverview {
    pub fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::High => self.high += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::Low => self.low += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.high + self.medium + self.low
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrossReactivityReport {
    pub risk_overview: RiskOverview,
    pub cross_reactivities: Vec<CrossReactivity>,
}
