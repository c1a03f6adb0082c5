use std::collections::HashMap;

use tracing::warn;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        reaction::entities::{ReactionEvent, Severity, SymptomEntry},
    },
    entity::{reaction_events, reaction_symptoms},
};

impl From<&reaction_events::Model> for ReactionEvent {
    fn from(model: &reaction_events::Model) -> Self {
        // Symptoms are loaded separately
        Self {
            id: model.id,
            user_id: model.user_id,
            meal_event_id: model.meal_event_id,
            timestamp: model.occurred_at.to_utc(),
            symptoms: Vec::new(),
            notes: model.notes.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<reaction_events::Model> for ReactionEvent {
    fn from(model: reaction_events::Model) -> Self {
        Self::from(&model)
    }
}

impl TryFrom<&reaction_symptoms::Model> for SymptomEntry {
    type Error = CoreError;

    fn try_from(model: &reaction_symptoms::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            symptom_id: model.symptom_id,
            severity: Severity::try_from(i32::from(model.severity))?,
            onset_minutes: model.onset_minutes.and_then(|m| u32::try_from(m).ok()),
        })
    }
}

/// Symptoms per reaction, in the order they were logged. Rows that fail
/// validation are dropped.
pub fn group_symptoms(mut rows: Vec<reaction_symptoms::Model>) -> HashMap<Uuid, Vec<SymptomEntry>> {
    rows.sort_by_key(|row| (row.reaction_event_id, row.position));

    let mut grouped: HashMap<Uuid, Vec<SymptomEntry>> = HashMap::new();
    for row in &rows {
        match SymptomEntry::try_from(row) {
            Ok(entry) => grouped.entry(row.reaction_event_id).or_default().push(entry),
            Err(e) => warn!(symptom_row = %row.id, "skipping invalid symptom row: {}", e),
        }
    }
    grouped
}
