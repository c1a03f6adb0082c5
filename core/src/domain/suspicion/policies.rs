use crate::domain::suspicion::entities::Confidence;

/// Ingredients present in nearly every meal. They carry no signal and are
/// never reported as suspects.
pub const UBIQUITOUS_INGREDIENTS: &[&str] = &[
    "water",
    "filtered water",
    "ice",
    "salt",
    "sea salt",
    "table salt",
    "iodized salt",
    "sugar",
    "cane sugar",
    "white sugar",
    "brown sugar",
    "flour",
    "all-purpose flour",
    "all purpose flour",
    "enriched flour",
    "white flour",
    "natural flavor",
    "natural flavors",
    "natural flavour",
    "natural flavours",
    "natural flavoring",
    "natural flavouring",
    "spices",
];

/// Tunable scoring constants. None of these boundaries is a hard contract.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringPolicy {
    /// Minimum number of meals containing an ingredient before it is scored.
    pub min_occurrences: u32,
    /// Meal count at which the evidence factor stops dampening the score.
    pub evidence_saturation_meals: f64,
    pub rate_weight: f64,
    pub severity_weight: f64,
    /// Mean onset at or below this many hours counts as acute.
    pub ige_max_onset_hours: f64,
    /// Mean peak severity at or above this counts as systemic.
    pub ige_min_severity: f64,
    pub moderate_threshold: f64,
    pub high_threshold: f64,
    pub very_high_threshold: f64,
    /// Background re-scoring writes suspects at or above this tier.
    pub persist_min_confidence: Confidence,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            min_occurrences: 2,
            evidence_saturation_meals: 8.0,
            rate_weight: 0.6,
            severity_weight: 0.4,
            ige_max_onset_hours: 2.0,
            ige_min_severity: 6.0,
            moderate_threshold: 0.3,
            high_threshold: 0.55,
            very_high_threshold: 0.8,
            persist_min_confidence: Confidence::Moderate,
        }
    }
}

impl ScoringPolicy {
    pub fn confidence_for(&self, score: f64) -> Confidence {
        if score >= self.very_high_threshold {
            Confidence::VeryHigh
        } else if score >= self.high_threshold {
            Confidence::High
        } else if score >= self.moderate_threshold {
            Confidence::Moderate
        } else {
            Confidence::Low
        }
    }

    pub fn is_ubiquitous(&self, ingredient_name: &str) -> bool {
        let normalized = normalize_name(ingredient_name);
        UBIQUITOUS_INGREDIENTS.contains(&normalized.as_str())
    }
}

/// Lowercase and collapse whitespace so "Natural  Flavors " matches.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_tiers_follow_boundaries() {
        let policy = ScoringPolicy::default();

        assert_eq!(policy.confidence_for(0.0), Confidence::Low);
        assert_eq!(policy.confidence_for(0.29), Confidence::Low);
        assert_eq!(policy.confidence_for(0.3), Confidence::Moderate);
        assert_eq!(policy.confidence_for(0.55), Confidence::High);
        assert_eq!(policy.confidence_for(0.79), Confidence::High);
        assert_eq!(policy.confidence_for(0.8), Confidence::VeryHigh);
        assert_eq!(policy.confidence_for(1.0), Confidence::VeryHigh);
    }

    #[test]
    fn ubiquitous_match_ignores_case_and_spacing() {
        let policy = ScoringPolicy::default();

        assert!(policy.is_ubiquitous("Water"));
        assert!(policy.is_ubiquitous("  Natural   Flavors "));
        assert!(policy.is_ubiquitous("SEA SALT"));
        assert!(!policy.is_ubiquitous("Peanut"));
        assert!(!policy.is_ubiquitous("Wheat"));
    }
}
