//! Compound-growth capacity projection.
//!
//! Months are a flat 30 days and years 365 days; this is an approximation,
//! not calendar arithmetic.

use crate::domain::model::{ProjectionDetail, ProjectionInput, ProjectionResult};

pub const DAYS_PER_MONTH: f64 = 30.0;
pub const DAYS_PER_YEAR: f64 = 365.0;
pub const KB_PER_GB: f64 = 1024.0 * 1024.0;

pub fn kb_to_gb(kb: f64) -> f64 {
    kb / KB_PER_GB
}

/// `(1 + rate_pct / 100) ^ months`. Rates at or below -100% are not guarded.
pub fn growth_factor(rate_pct: f64, months: u32) -> f64 {
    (1.0 + rate_pct / 100.0).powf(f64::from(months))
}

pub fn project_detail(input: &ProjectionInput) -> ProjectionDetail {
    let current_daily_transactions = input.current_users * input.daily_transactions_per_user;
    let current_daily_data_kb = current_daily_transactions * input.average_transaction_size_kb;

    let months = input.retention_period_months;
    let projected_users = input.current_users * growth_factor(input.users_growth_rate_pct, months);
    let projected_daily_transactions = input.daily_transactions_per_user
        * growth_factor(input.transactions_growth_rate_pct, months);
    let projected_daily_data_kb =
        projected_users * projected_daily_transactions * input.average_transaction_size_kb;

    ProjectionDetail {
        current_daily_transactions,
        current_daily_data_kb,
        current_monthly_data_kb: current_daily_data_kb * DAYS_PER_MONTH,
        current_yearly_data_kb: current_daily_data_kb * DAYS_PER_YEAR,
        projected_users,
        projected_daily_transactions,
        projected_daily_data_kb,
        projected_monthly_data_kb: projected_daily_data_kb * DAYS_PER_MONTH,
        projected_yearly_data_kb: projected_daily_data_kb * DAYS_PER_YEAR,
    }
}

pub fn project(input: &ProjectionInput) -> ProjectionResult {
    project_detail(input).to_gb()
}

impl ProjectionDetail {
    pub fn to_gb(&self) -> ProjectionResult {
        ProjectionResult {
            current_daily_gb: kb_to_gb(self.current_daily_data_kb),
            current_monthly_gb: kb_to_gb(self.current_monthly_data_kb),
            current_yearly_gb: kb_to_gb(self.current_yearly_data_kb),
            projected_daily_gb: kb_to_gb(self.projected_daily_data_kb),
            projected_monthly_gb: kb_to_gb(self.projected_monthly_data_kb),
            projected_yearly_gb: kb_to_gb(self.projected_yearly_data_kb),
        }
    }
}
