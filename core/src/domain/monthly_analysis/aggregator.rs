//! Month-over-month reaction statistics.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::domain::{
    common::round_to,
    monthly_analysis::{
        entities::{MonthlySummary, TimeOfDayDistribution, WeeklyTrend},
        value_objects::MonthWindow,
    },
    reaction::entities::ReactionEvent,
};

pub const WEEKS_PER_MONTH: u32 = 4;
pub const DAYS_PER_WEEK: u32 = 7;

/// Local hour ranges `[from, to)` of the three meal windows.
pub const BREAKFAST_HOURS: (u32, u32) = (5, 11);
pub const LUNCH_HOURS: (u32, u32) = (11, 16);
pub const DINNER_HOURS: (u32, u32) = (16, 22);

pub fn count_symptoms(reactions: &[&ReactionEvent]) -> u32 {
    reactions.iter().map(|r| r.symptoms.len() as u32).sum()
}

/// Relative reduction in percent; zero when there is no previous baseline.
pub fn improvement_pct(previous: u32, current: u32) -> i64 {
    if previous == 0 {
        return 0;
    }
    let previous = f64::from(previous);
    ((previous - f64::from(current)) / previous * 100.0).round() as i64
}

pub fn symptom_free_days(window: &MonthWindow, reactions: &[&ReactionEvent], days_elapsed: u32) -> u32 {
    let reaction_days: BTreeSet<u32> = reactions
        .iter()
        .map(|r| window.local_day(r.timestamp))
        .filter(|day| *day <= days_elapsed)
        .collect();

    days_elapsed.saturating_sub(reaction_days.len() as u32)
}

/// Four fixed buckets of seven days from day 1. Days past day 28 fall in no
/// bucket.
pub fn weekly_trend(window: &MonthWindow, reactions: &[&ReactionEvent]) -> Vec<WeeklyTrend> {
    let mut trend = Vec::with_capacity(WEEKS_PER_MONTH as usize);

    for week in 0..WEEKS_PER_MONTH {
        let start_day = 1 + week * DAYS_PER_WEEK;
        if start_day > window.days_in_month {
            break;
        }
        let end_day = (start_day + DAYS_PER_WEEK - 1).min(window.days_in_month);

        let in_bucket: Vec<&&ReactionEvent> = reactions
            .iter()
            .filter(|r| (start_day..=end_day).contains(&window.local_day(r.timestamp)))
            .collect();

        let severities: Vec<f64> = in_bucket
            .iter()
            .flat_map(|r| r.symptoms.iter())
            .map(|s| f64::from(s.severity.value()))
            .collect();
        let avg_severity = if severities.is_empty() {
            0.0
        } else {
            round_to(severities.iter().sum::<f64>() / severities.len() as f64, 1)
        };

        trend.push(WeeklyTrend {
            week: (week + 1) as u8,
            start_date: window.day(start_day),
            end_date: window.day(end_day),
            reaction_count: in_bucket.len() as u32,
            avg_severity,
        });
    }

    trend
}

pub fn time_of_day_distribution(
    window: &MonthWindow,
    reactions: &[&ReactionEvent],
) -> TimeOfDayDistribution {
    let in_range = |hour: u32, (from, to): (u32, u32)| hour >= from && hour < to;

    let (mut breakfast, mut lunch, mut dinner) = (0u32, 0u32, 0u32);
    for reaction in reactions {
        let hour = window.local_hour(reaction.timestamp);
        if in_range(hour, BREAKFAST_HOURS) {
            breakfast += 1;
        } else if in_range(hour, LUNCH_HOURS) {
            lunch += 1;
        } else if in_range(hour, DINNER_HOURS) {
            dinner += 1;
        }
    }

    let total = breakfast + lunch + dinner;
    if total == 0 {
        return TimeOfDayDistribution::default();
    }
    let pct = |count: u32| (f64::from(count) / f64::from(total) * 100.0).round() as u32;

    TimeOfDayDistribution {
        breakfast: pct(breakfast),
        lunch: pct(lunch),
        dinner: pct(dinner),
    }
}

/// Summary of `window` against the month before it. Reactions outside their
/// window are ignored.
pub fn summarize(
    window: &MonthWindow,
    previous_window: &MonthWindow,
    current: &[ReactionEvent],
    previous: &[ReactionEvent],
    now: DateTime<Utc>,
) -> MonthlySummary {
    let current: Vec<&ReactionEvent> = current
        .iter()
        .filter(|r| window.contains(r.timestamp))
        .collect();
    let previous: Vec<&ReactionEvent> = previous
        .iter()
        .filter(|r| previous_window.contains(r.timestamp))
        .collect();

    let total_symptoms = count_symptoms(&current);
    let prev_month_symptoms = count_symptoms(&previous);
    let days_elapsed = window.days_elapsed(now);

    MonthlySummary {
        year: window.year,
        month: window.month,
        monthly_improvement_pct: improvement_pct(prev_month_symptoms, total_symptoms),
        total_symptoms,
        prev_month_symptoms,
        total_reactions: current.len() as u32,
        symptom_free_days: symptom_free_days(window, &current, days_elapsed),
        days_elapsed,
        weekly_trend: weekly_trend(window, &current),
        time_of_day_distribution: time_of_day_distribution(window, &current),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};
    use uuid::Uuid;

    use super::*;
    use crate::domain::reaction::entities::{Severity, SymptomEntry};

    fn reaction(timestamp: DateTime<Utc>, severities: &[i32]) -> ReactionEvent {
        ReactionEvent {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            meal_event_id: None,
            timestamp,
            symptoms: severities
                .iter()
                .map(|s| SymptomEntry {
                    symptom_id: Uuid::new_v4(),
                    severity: Severity::try_from(*s).unwrap(),
                    onset_minutes: None,
                })
                .collect(),
            notes: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
    }

    fn windows(year: i32, month: u32) -> (MonthWindow, MonthWindow) {
        let window = MonthWindow::new(year, month, 0).unwrap();
        let previous = window.previous().unwrap();
        (window, previous)
    }

    #[test]
    fn empty_months_yield_zeroed_stats() {
        let (window, previous) = windows(2025, 4);
        let now = at(2025, 6, 1, 0);

        let summary = summarize(&window, &previous, &[], &[], now);

        assert_eq!(summary.total_symptoms, 0);
        assert_eq!(summary.monthly_improvement_pct, 0);
        assert_eq!(summary.symptom_free_days, summary.days_elapsed);
        assert_eq!(summary.days_elapsed, 30);
        assert_eq!(summary.time_of_day_distribution, TimeOfDayDistribution::default());
        assert_eq!(summary.weekly_trend.len(), 4);
        assert!(summary.weekly_trend.iter().all(|w| w.reaction_count == 0));
    }

    #[test]
    fn improvement_is_zero_without_previous_symptoms() {
        assert_eq!(improvement_pct(0, 0), 0);
        assert_eq!(improvement_pct(0, 12), 0);
    }

    #[test]
    fn improvement_is_relative_reduction() {
        assert_eq!(improvement_pct(10, 5), 50);
        assert_eq!(improvement_pct(3, 2), 33);
        assert_eq!(improvement_pct(4, 6), -50);
    }

    #[test]
    fn symptom_counts_and_free_days() {
        let (window, previous) = windows(2025, 4);
        let current = vec![
            reaction(at(2025, 4, 2, 8), &[4, 6]),
            reaction(at(2025, 4, 2, 19), &[3]),
            reaction(at(2025, 4, 10, 12), &[7]),
        ];
        let last_month = vec![reaction(at(2025, 3, 15, 12), &[5, 5, 5, 5, 5, 5, 5, 5])];

        let summary = summarize(&window, &previous, &current, &last_month, at(2025, 5, 3, 0));

        assert_eq!(summary.total_symptoms, 4);
        assert_eq!(summary.prev_month_symptoms, 8);
        assert_eq!(summary.monthly_improvement_pct, 50);
        assert_eq!(summary.total_reactions, 3);
        assert_eq!(summary.symptom_free_days, 28);
    }

    #[test]
    fn current_month_caps_days_at_today() {
        let (window, previous) = windows(2025, 4);
        let current = vec![reaction(at(2025, 4, 3, 9), &[2])];

        let summary = summarize(&window, &previous, &current, &[], at(2025, 4, 10, 15));

        assert_eq!(summary.days_elapsed, 10);
        assert_eq!(summary.symptom_free_days, 9);
    }

    #[test]
    fn weekly_trend_uses_fixed_seven_day_buckets() {
        let (window, _) = windows(2025, 1);
        let current = vec![
            reaction(at(2025, 1, 1, 9), &[2, 4]),
            reaction(at(2025, 1, 7, 9), &[6]),
            reaction(at(2025, 1, 8, 9), &[8]),
            reaction(at(2025, 1, 30, 9), &[9]),
        ];
        let refs: Vec<&ReactionEvent> = current.iter().collect();

        let trend = weekly_trend(&window, &refs);

        assert_eq!(trend.len(), 4);
        assert_eq!(trend[0].start_date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(trend[0].end_date, NaiveDate::from_ymd_opt(2025, 1, 7).unwrap());
        assert_eq!(trend[0].reaction_count, 2);
        assert_eq!(trend[0].avg_severity, 4.0);
        assert_eq!(trend[1].reaction_count, 1);
        assert_eq!(trend[1].avg_severity, 8.0);
        assert_eq!(trend[3].end_date, NaiveDate::from_ymd_opt(2025, 1, 28).unwrap());
        assert_eq!(trend.iter().map(|w| w.reaction_count).sum::<u32>(), 3);
    }

    #[test]
    fn time_of_day_excludes_reactions_outside_meal_windows() {
        let (window, _) = windows(2025, 4);
        let current = vec![
            reaction(at(2025, 4, 1, 5), &[1]),
            reaction(at(2025, 4, 2, 10), &[1]),
            reaction(at(2025, 4, 3, 11), &[1]),
            reaction(at(2025, 4, 4, 21), &[1]),
            reaction(at(2025, 4, 5, 23), &[1]),
            reaction(at(2025, 4, 6, 3), &[1]),
        ];
        let refs: Vec<&ReactionEvent> = current.iter().collect();

        let distribution = time_of_day_distribution(&window, &refs);

        assert_eq!(distribution.breakfast, 50);
        assert_eq!(distribution.lunch, 25);
        assert_eq!(distribution.dinner, 25);
    }

    #[test]
    fn local_offset_shifts_day_and_hour() {
        let window = MonthWindow::new(2025, 4, -300).unwrap();
        let previous = window.previous().unwrap();
        // 02:00 UTC on the 1st of May is 21:00 on the 30th of April at UTC-5.
        let current = vec![reaction(at(2025, 5, 1, 2), &[5])];

        let summary = summarize(&window, &previous, &current, &[], at(2025, 6, 1, 0));

        assert_eq!(summary.total_reactions, 1);
        assert_eq!(summary.time_of_day_distribution.dinner, 100);
        assert_eq!(summary.symptom_free_days, 29);
    }
}
