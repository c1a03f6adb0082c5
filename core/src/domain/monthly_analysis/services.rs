use chrono::Utc;
use tracing::debug;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    cross_reactivity::ports::CrossReactionRepository,
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    meal::ports::MealRepository,
    monthly_analysis::{
        aggregator::summarize,
        entities::MonthlySummary,
        ports::MonthlyAnalysisService,
        value_objects::{MonthWindow, MonthlyAnalysisInput},
    },
    reaction::{ports::ReactionRepository, value_objects::GetReactionFilter},
};

impl<M, R, I, X, HC> MonthlyAnalysisService for Service<M, R, I, X, HC>
where
    M: MealRepository,
    R: ReactionRepository,
    I: IngredientRepository,
    X: CrossReactionRepository,
    HC: HealthCheckRepository,
{
    async fn get_monthly_analysis(
        &self,
        input: MonthlyAnalysisInput,
    ) -> Result<MonthlySummary, CoreError> {
        let window = MonthWindow::new(input.year, input.month, input.utc_offset_minutes)?;
        let previous_window = window.previous()?;

        let (current, previous) = futures::try_join!(
            self.reaction_repository.list_reactions(
                input.user_id,
                GetReactionFilter::window(window.start, window.end)
            ),
            self.reaction_repository.list_reactions(
                input.user_id,
                GetReactionFilter::window(previous_window.start, previous_window.end)
            ),
        )?;

        debug!(
            user_id = %input.user_id,
            year = input.year,
            month = input.month,
            current = current.len(),
            previous = previous.len(),
            "aggregating monthly reactions"
        );

        Ok(summarize(
            &window,
            &previous_window,
            &current,
            &previous,
            Utc::now(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        common::services::test_support::Mocks,
        reaction::entities::{ReactionEvent, Severity, SymptomEntry},
    };

    fn reaction(day: u32, month: u32, symptoms: usize) -> ReactionEvent {
        let timestamp = Utc.with_ymd_and_hms(2024, month, day, 13, 0, 0).unwrap();
        ReactionEvent {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            meal_event_id: None,
            timestamp,
            symptoms: (0..symptoms)
                .map(|_| SymptomEntry {
                    symptom_id: Uuid::new_v4(),
                    severity: Severity::try_from(5).unwrap(),
                    onset_minutes: None,
                })
                .collect(),
            notes: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    #[tokio::test]
    async fn queries_current_and_previous_month() {
        let february_start = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let january_start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        let mut mocks = Mocks::new();
        mocks
            .reactions
            .expect_list_reactions()
            .withf(move |_, filter| filter.timestamp_gte == Some(february_start))
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(vec![reaction(3, 2, 2), reaction(20, 2, 1)]) }));
        mocks
            .reactions
            .expect_list_reactions()
            .withf(move |_, filter| {
                filter.timestamp_gte == Some(january_start)
                    && filter.timestamp_lt == Some(february_start)
            })
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(vec![reaction(9, 1, 6)]) }));
        let service = mocks.into_service();

        let summary = service
            .get_monthly_analysis(MonthlyAnalysisInput {
                user_id: Uuid::new_v4(),
                year: 2024,
                month: 2,
                utc_offset_minutes: 0,
            })
            .await
            .expect("aggregation should succeed");

        assert_eq!(summary.total_symptoms, 3);
        assert_eq!(summary.prev_month_symptoms, 6);
        assert_eq!(summary.monthly_improvement_pct, 50);
        assert_eq!(summary.days_elapsed, 29);
        assert_eq!(summary.symptom_free_days, 27);
        assert_eq!(summary.time_of_day_distribution.lunch, 100);
    }

    #[tokio::test]
    async fn invalid_month_is_rejected_before_querying() {
        let service = Mocks::new().into_service();

        let result = service
            .get_monthly_analysis(MonthlyAnalysisInput {
                user_id: Uuid::new_v4(),
                year: 2024,
                month: 13,
                utc_offset_minutes: 0,
            })
            .await;

        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }
}
