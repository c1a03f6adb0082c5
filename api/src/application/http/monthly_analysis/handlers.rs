pub mod get_monthly_analysis;
