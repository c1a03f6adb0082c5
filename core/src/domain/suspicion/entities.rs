use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

/// Suspected reaction mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    IgeAllergy,
    Fodmap,
    Intolerance,
}

impl Track {
    pub fn as_str(&self) -> &'static str {
        match self {
            Track::IgeAllergy => "ige_allergy",
            Track::Fodmap => "fodmap",
            Track::Intolerance => "intolerance",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Track {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ige_allergy" => Ok(Track::IgeAllergy),
            "fodmap" => Ok(Track::Fodmap),
            "intolerance" => Ok(Track::Intolerance),
            other => Err(CoreError::InvalidInput(format!("unknown track '{}'", other))),
        }
    }
}

/// Confidence tier, ordered from weakest to strongest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Moderate => "moderate",
            Confidence::High => "high",
            Confidence::VeryHigh => "very_high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Confidence::Low),
            "moderate" => Ok(Confidence::Moderate),
            "high" => Ok(Confidence::High),
            "very_high" => Ok(Confidence::VeryHigh),
            other => Err(CoreError::InvalidInput(format!(
                "unknown confidence '{}'",
                other
            ))),
        }
    }
}

/// Per-ingredient exposure statistics for one user, rebuilt on every scoring run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IngredientExposure {
    pub ingredient_id: Uuid,
    pub total_meals: u32,
    pub reaction_meals: u32,
    pub non_reaction_meals: u32,
    pub severities: Vec<u8>,
    pub hours_to_reaction: Vec<f64>,
}

impl IngredientExposure {
    pub fn new(ingredient_id: Uuid) -> Self {
        Self {
            ingredient_id,
            ..Default::default()
        }
    }

    pub fn reaction_rate(&self) -> f64 {
        if self.total_meals == 0 {
            return 0.0;
        }
        self.reaction_meals as f64 / self.total_meals as f64
    }

    pub fn avg_severity(&self) -> f64 {
        if self.severities.is_empty() {
            return 0.0;
        }
        self.severities.iter().map(|s| *s as f64).sum::<f64>() / self.severities.len() as f64
    }

    pub fn avg_hours_to_reaction(&self) -> Option<f64> {
        if self.hours_to_reaction.is_empty() {
            return None;
        }
        Some(self.hours_to_reaction.iter().sum::<f64>() / self.hours_to_reaction.len() as f64)
    }
}

/// Ranked suspicion for one ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuspicionRecord {
    pub ingredient_id: Uuid,
    pub ingredient_name: String,
    pub track: Track,
    pub confidence: Confidence,
    pub total_meals: u32,
    pub reaction_meals: u32,
    pub reaction_rate: f64,
    pub avg_severity: f64,
    pub suspicion_score: f64,
    pub avg_hours_to_reaction: Option<f64>,
    pub recommendation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_is_ordered_by_strength() {
        assert!(Confidence::Low < Confidence::Moderate);
        assert!(Confidence::Moderate < Confidence::High);
        assert!(Confidence::High < Confidence::VeryHigh);
    }

    #[test]
    fn exposure_without_reactions_has_zero_stats() {
        let exposure = IngredientExposure {
            total_meals: 4,
            non_reaction_meals: 4,
            ..IngredientExposure::new(Uuid::new_v4())
        };

        assert_eq!(exposure.reaction_rate(), 0.0);
        assert_eq!(exposure.avg_severity(), 0.0);
        assert_eq!(exposure.avg_hours_to_reaction(), None);
    }

    #[test]
    fn record_serializes_with_camel_case_fields() {
        let record = SuspicionRecord {
            ingredient_id: Uuid::nil(),
            ingredient_name: "Peanut".to_string(),
            track: Track::IgeAllergy,
            confidence: Confidence::VeryHigh,
            total_meals: 3,
            reaction_meals: 2,
            reaction_rate: 0.667,
            avg_severity: 7.0,
            suspicion_score: 0.416,
            avg_hours_to_reaction: Some(0.5),
            recommendation: String::new(),
        };

        let json = serde_json::to_value(&record).expect("record should serialize");

        assert_eq!(json["track"], "ige_allergy");
        assert_eq!(json["confidence"], "very_high");
        assert_eq!(json["reactionRate"], 0.667);
        assert_eq!(json["avgHoursToReaction"], 0.5);
    }
}
