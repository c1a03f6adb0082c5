use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One of the four fixed 7-day buckets of a month, starting on day 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTrend {
    pub week: u8,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reaction_count: u32,
    /// Mean over every symptom of the bucket's reactions, one decimal.
    pub avg_severity: f64,
}

/// Integer percentages of the reactions falling in a meal window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimeOfDayDistribution {
    pub breakfast: u32,
    pub lunch: u32,
    pub dinner: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    /// Relative reduction of symptoms against the previous month. Positive
    /// means fewer symptoms.
    pub monthly_improvement_pct: i64,
    pub total_symptoms: u32,
    pub prev_month_symptoms: u32,
    pub total_reactions: u32,
    pub symptom_free_days: u32,
    pub days_elapsed: u32,
    pub weekly_trend: Vec<WeeklyTrend>,
    pub time_of_day_distribution: TimeOfDayDistribution,
}
