//! Suspicion scoring over a user's meal and reaction history.
//!
//! Pure functions: the service fetches the snapshot, these turn it into
//! ranked [`SuspicionRecord`]s. Identical input always yields identical output.

use std::collections::{BTreeMap, HashMap};

use uuid::Uuid;

use crate::domain::{
    common::round_to,
    ingredient::entities::Ingredient,
    meal::entities::MealEvent,
    reaction::entities::ReactionEvent,
    suspicion::{
        entities::{Confidence, IngredientExposure, SuspicionRecord, Track},
        policies::ScoringPolicy,
    },
};

/// Exposures keyed by ingredient, plus bookkeeping on skipped data.
#[derive(Debug, Default)]
pub struct ExposureSnapshot {
    pub exposures: BTreeMap<Uuid, IngredientExposure>,
    /// Reactions whose meal is no longer in the (non-deleted) history.
    pub orphaned_reactions: usize,
}

/// Join reactions onto meals and aggregate per ingredient.
pub fn build_exposures(meals: &[MealEvent], reactions: &[ReactionEvent]) -> ExposureSnapshot {
    let mut reactions_by_meal: HashMap<Uuid, Vec<&ReactionEvent>> = HashMap::new();
    for reaction in reactions {
        if let Some(meal_id) = reaction.meal_event_id {
            reactions_by_meal.entry(meal_id).or_default().push(reaction);
        }
    }

    let mut snapshot = ExposureSnapshot::default();

    for meal in meals {
        let linked = reactions_by_meal.remove(&meal.id).unwrap_or_default();
        let is_reaction_meal = meal.had_reaction || !linked.is_empty();

        let severities: Vec<u8> = linked.iter().filter_map(|r| r.peak_severity()).collect();
        let onsets: Vec<f64> = linked
            .iter()
            .filter_map(|r| hours_between(meal, r))
            .collect();

        for ingredient_id in &meal.ingredient_ids {
            let exposure = snapshot
                .exposures
                .entry(*ingredient_id)
                .or_insert_with(|| IngredientExposure::new(*ingredient_id));

            exposure.total_meals += 1;
            if is_reaction_meal {
                exposure.reaction_meals += 1;
                exposure.severities.extend_from_slice(&severities);
                exposure.hours_to_reaction.extend_from_slice(&onsets);
            } else {
                exposure.non_reaction_meals += 1;
            }
        }
    }

    snapshot.orphaned_reactions = reactions_by_meal.values().map(Vec::len).sum();
    snapshot
}

/// Onset in hours, from timestamps when they are ordered, otherwise from the
/// earliest reported symptom onset.
fn hours_between(meal: &MealEvent, reaction: &ReactionEvent) -> Option<f64> {
    let minutes = (reaction.timestamp - meal.timestamp).num_minutes();
    if minutes >= 0 {
        return Some(minutes as f64 / 60.0);
    }

    reaction
        .symptoms
        .iter()
        .filter_map(|s| s.onset_minutes)
        .min()
        .map(|m| m as f64 / 60.0)
}

pub fn classify_track(
    exposure: &IngredientExposure,
    is_fodmap: bool,
    policy: &ScoringPolicy,
) -> Track {
    let acute = exposure
        .avg_hours_to_reaction()
        .is_some_and(|hours| hours <= policy.ige_max_onset_hours);

    if acute && exposure.avg_severity() >= policy.ige_min_severity {
        Track::IgeAllergy
    } else if is_fodmap {
        Track::Fodmap
    } else {
        Track::Intolerance
    }
}

/// Weighted rate/severity score, dampened while evidence is thin. Always in [0, 1].
pub fn suspicion_score(exposure: &IngredientExposure, policy: &ScoringPolicy) -> f64 {
    let weight_sum = policy.rate_weight + policy.severity_weight;
    if exposure.total_meals == 0 || weight_sum <= 0.0 {
        return 0.0;
    }

    let severity = exposure.avg_severity() / 10.0;
    let raw = (policy.rate_weight * exposure.reaction_rate() + policy.severity_weight * severity)
        / weight_sum;

    let evidence = (exposure.total_meals as f64 / policy.evidence_saturation_meals)
        .sqrt()
        .min(1.0);

    (raw * evidence).clamp(0.0, 1.0)
}

pub fn recommendation(
    ingredient_name: &str,
    track: Track,
    confidence: Confidence,
    reaction_rate: f64,
) -> String {
    let percent = (reaction_rate * 100.0).round() as u32;
    let strong = confidence >= Confidence::High;

    match (track, strong) {
        (Track::IgeAllergy, true) => format!(
            "{ingredient_name} was followed by a fast reaction after {percent}% of meals. Avoid it and ask an allergist about testing."
        ),
        (Track::IgeAllergy, false) => format!(
            "{ingredient_name} may be linked to quick-onset reactions ({percent}% of meals). Keep logging meals with it and mention it to your doctor."
        ),
        (Track::Fodmap, true) => format!(
            "{ingredient_name} is a high-FODMAP food linked to symptoms after {percent}% of meals. Try removing it for two to six weeks, then reintroduce it gradually."
        ),
        (Track::Fodmap, false) => format!(
            "{ingredient_name} is a FODMAP food that may be causing digestive symptoms ({percent}% of meals). Watch portion sizes and keep tracking."
        ),
        (Track::Intolerance, true) => format!(
            "{ingredient_name} shows a consistent link to symptoms ({percent}% of meals). Consider cutting it out and discussing an intolerance with your doctor."
        ),
        (Track::Intolerance, false) => format!(
            "{ingredient_name} shows a possible link to symptoms ({percent}% of meals). Keep logging to confirm the pattern."
        ),
    }
}

/// Score every eligible exposure and rank the result.
///
/// An exposure is skipped when it has fewer than `min_occurrences` meals, no
/// reaction meal at all, no reference ingredient, or a ubiquitous name.
pub fn score_exposures(
    snapshot: &ExposureSnapshot,
    ingredients: &HashMap<Uuid, Ingredient>,
    policy: &ScoringPolicy,
) -> Vec<SuspicionRecord> {
    let mut records: Vec<SuspicionRecord> = snapshot
        .exposures
        .values()
        .filter(|e| e.total_meals >= policy.min_occurrences && e.reaction_meals > 0)
        .filter_map(|exposure| {
            let ingredient = ingredients.get(&exposure.ingredient_id)?;
            if policy.is_ubiquitous(&ingredient.name) {
                return None;
            }

            let track = classify_track(exposure, ingredient.is_fodmap, policy);
            let score = round_to(suspicion_score(exposure, policy), 3);
            let confidence = policy.confidence_for(score);
            let reaction_rate = exposure.reaction_rate();

            Some(SuspicionRecord {
                ingredient_id: ingredient.id,
                ingredient_name: ingredient.name.clone(),
                track,
                confidence,
                total_meals: exposure.total_meals,
                reaction_meals: exposure.reaction_meals,
                reaction_rate: round_to(reaction_rate, 3),
                avg_severity: round_to(exposure.avg_severity(), 2),
                suspicion_score: score,
                avg_hours_to_reaction: exposure.avg_hours_to_reaction().map(|h| round_to(h, 2)),
                recommendation: recommendation(&ingredient.name, track, confidence, reaction_rate),
            })
        })
        .collect();

    records.sort_by(|a, b| {
        b.suspicion_score
            .total_cmp(&a.suspicion_score)
            .then_with(|| a.ingredient_name.cmp(&b.ingredient_name))
            .then_with(|| a.ingredient_id.cmp(&b.ingredient_id))
    });

    records
}
