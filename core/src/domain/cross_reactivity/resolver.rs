//! Expansion of confirmed allergens into biologically related foods.

use std::collections::HashSet;

use uuid::Uuid;

use crate::domain::{
    common::round_to,
    cross_reactivity::entities::{
        CrossReactionEntry, CrossReactivity, CrossReactivityReport, RelatedFood, RiskLevel,
        RiskOverview,
    },
    ingredient::entities::Ingredient,
    suspicion::policies::normalize_name,
};

/// Minimum similarity for a related food to be reported at all.
pub const MIN_SIMILARITY: f64 = 50.0;
/// Similarity at or above which a related food is high risk.
pub const HIGH_RISK_SIMILARITY: f64 = 70.0;
pub const MAX_RELATED_FOODS: usize = 10;

/// The `Low` arm is unreachable while `MIN_SIMILARITY` is 50; it stays so the
/// threshold can be lowered without touching the classification.
pub fn classify_risk(similarity: f64) -> RiskLevel {
    if similarity >= HIGH_RISK_SIMILARITY {
        RiskLevel::High
    } else if similarity >= 50.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Drop repeated allergens, keeping the first occurrence.
pub fn dedupe_allergens(allergens: Vec<Ingredient>) -> Vec<Ingredient> {
    let mut seen: HashSet<Uuid> = HashSet::new();
    allergens
        .into_iter()
        .filter(|allergen| seen.insert(allergen.id))
        .collect()
}

pub fn explanation(allergen_name: &str, related: &[RelatedFood], average: f64) -> String {
    let names: Vec<&str> = related.iter().take(3).map(|r| r.name.as_str()).collect();
    format!(
        "{} proteins share structural similarity with proteins in {} related food(s) such as {}, with an average match of {:.0}%. Proteins from the same family can be recognised by the same antibodies, so these foods may trigger a similar reaction.",
        allergen_name,
        related.len(),
        names.join(", "),
        average
    )
}

/// Related foods of one allergen above the relevance threshold, strongest
/// first. `None` when nothing qualifies. Threshold and risk level apply to
/// the reported (rounded) similarity.
pub fn resolve_entry(allergen: &Ingredient, entry: &CrossReactionEntry) -> Option<CrossReactivity> {
    let allergen_name = normalize_name(&allergen.name);

    let mut related: Vec<RelatedFood> = entry
        .similarities
        .iter()
        .filter(|s| {
            s.related_ingredient_id != Some(allergen.id) && normalize_name(&s.name) != allergen_name
        })
        .map(|s| (s, round_to(s.score, 1)))
        .filter(|(_, similarity)| *similarity >= MIN_SIMILARITY)
        .map(|(s, similarity)| RelatedFood {
            ingredient_id: s.related_ingredient_id,
            name: s.name.clone(),
            similarity,
            risk_level: classify_risk(similarity),
        })
        .collect();

    if related.is_empty() {
        return None;
    }

    related.sort_by(|a, b| {
        b.similarity
            .total_cmp(&a.similarity)
            .then_with(|| a.name.cmp(&b.name))
    });
    related.truncate(MAX_RELATED_FOODS);

    let average = related.iter().map(|r| r.similarity).sum::<f64>() / related.len() as f64;

    Some(CrossReactivity {
        allergen_id: allergen.id,
        allergen_name: allergen.name.clone(),
        scientific_name: entry
            .scientific_name
            .clone()
            .or_else(|| allergen.scientific_name.clone()),
        explanation: explanation(&allergen.name, &related, average),
        average_similarity: round_to(average, 1),
        related_foods: related,
    })
}

pub fn build_report(cross_reactivities: Vec<CrossReactivity>) -> CrossReactivityReport {
    let mut risk_overview = RiskOverview::default();
    for related in cross_reactivities.iter().flat_map(|c| &c.related_foods) {
        risk_overview.record(related.risk_level);
    }

    CrossReactivityReport {
        risk_overview,
        cross_reactivities,
    }
}
