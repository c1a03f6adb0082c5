use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct MonthlyAnalysisParams {
    #[param(example = 2025)]
    #[validate(range(min = 1970, max = 9999, message = "year must be between 1970 and 9999"))]
    pub year: i32,
    #[param(example = 4)]
    #[validate(range(min = 1, max = 12, message = "month must be between 1 and 12"))]
    pub month: u32,
    /// Offset of the user's clock from UTC, in minutes. Defaults to 0.
    #[param(example = 120)]
    #[validate(range(
        min = -840,
        max = 840,
        message = "utc_offset_minutes must be between -840 and 840"
    ))]
    pub utc_offset_minutes: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(year: i32, month: u32, offset: Option<i32>) -> MonthlyAnalysisParams {
        MonthlyAnalysisParams {
            year,
            month,
            utc_offset_minutes: offset,
        }
    }

    #[test]
    fn accepts_calendar_month_and_offset() {
        assert!(params(2025, 4, None).validate().is_ok());
        assert!(params(2025, 12, Some(-840)).validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(params(2025, 13, None).validate().is_err());
        assert!(params(2025, 0, None).validate().is_err());
        assert!(params(2025, 4, Some(900)).validate().is_err());
    }
}
