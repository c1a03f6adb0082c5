use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    monthly_analysis::{entities::MonthlySummary, value_objects::MonthlyAnalysisInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait MonthlyAnalysisService: Send + Sync {
    fn get_monthly_analysis(
        &self,
        input: MonthlyAnalysisInput,
    ) -> impl Future<Output = Result<MonthlySummary, CoreError>> + Send;
}
