use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six scalars a projection is computed from.
///
/// Nothing here is range-checked: negative or zero values are accepted and
/// flow through the arithmetic as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub current_users: f64,
    pub daily_transactions_per_user: f64,
    pub average_transaction_size_kb: f64,
    /// Monthly percentage, may be negative.
    pub users_growth_rate_pct: f64,
    /// Monthly percentage, may be negative.
    pub transactions_growth_rate_pct: f64,
    pub retention_period_months: u32,
}

impl ProjectionInput {
    /// Values the form is pre-populated with, and what a reset restores.
    pub const DEFAULT: Self = Self {
        current_users: 100_000.0,
        daily_transactions_per_user: 5.0,
        average_transaction_size_kb: 0.5,
        users_growth_rate_pct: 5.0,
        transactions_growth_rate_pct: 3.0,
        retention_period_months: 12,
    };

    pub const ZERO: Self = Self {
        current_users: 0.0,
        daily_transactions_per_user: 0.0,
        average_transaction_size_kb: 0.0,
        users_growth_rate_pct: 0.0,
        transactions_growth_rate_pct: 0.0,
        retention_period_months: 0,
    };
}

impl Default for ProjectionInput {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Intermediate values of a projection, all data volumes in KB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionDetail {
    pub current_daily_transactions: f64,
    pub current_daily_data_kb: f64,
    pub current_monthly_data_kb: f64,
    pub current_yearly_data_kb: f64,
    pub projected_users: f64,
    pub projected_daily_transactions: f64,
    pub projected_daily_data_kb: f64,
    pub projected_monthly_data_kb: f64,
    pub projected_yearly_data_kb: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub current_daily_gb: f64,
    pub current_monthly_gb: f64,
    pub current_yearly_gb: f64,
    pub projected_daily_gb: f64,
    pub projected_monthly_gb: f64,
    pub projected_yearly_gb: f64,
}

impl ProjectionResult {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::CurrentDaily => self.current_daily_gb,
            Metric::CurrentMonthly => self.current_monthly_gb,
            Metric::CurrentYearly => self.current_yearly_gb,
            Metric::ProjectedDaily => self.projected_daily_gb,
            Metric::ProjectedMonthly => self.projected_monthly_gb,
            Metric::ProjectedYearly => self.projected_yearly_gb,
        }
    }

    /// Metric/value pairs in display order.
    pub fn metrics(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL.iter().map(move |&metric| (metric, self.get(metric)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    CurrentDaily,
    CurrentMonthly,
    CurrentYearly,
    ProjectedDaily,
    ProjectedMonthly,
    ProjectedYearly,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::CurrentDaily,
        Metric::CurrentMonthly,
        Metric::CurrentYearly,
        Metric::ProjectedDaily,
        Metric::ProjectedMonthly,
        Metric::ProjectedYearly,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::CurrentDaily => "Current Daily Data (GB)",
            Metric::CurrentMonthly => "Current Monthly Data (GB)",
            Metric::CurrentYearly => "Current Yearly Data (GB)",
            Metric::ProjectedDaily => "Projected Daily Data After Retention Period (GB)",
            Metric::ProjectedMonthly => "Projected Monthly Data After Retention Period (GB)",
            Metric::ProjectedYearly => "Projected Yearly Data After Retention Period (GB)",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the exporters receive: the inputs, the six figures, and when they
/// were produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityReport {
    pub generated_at: DateTime<Utc>,
    pub input: ProjectionInput,
    pub result: ProjectionResult,
}

impl CapacityReport {
    pub fn new(input: ProjectionInput, result: ProjectionResult) -> Self {
        Self::at(input, result, Utc::now())
    }

    pub fn at(input: ProjectionInput, result: ProjectionResult, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            input,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_follow_display_order() {
        let result = ProjectionResult {
            current_daily_gb: 1.0,
            current_monthly_gb: 2.0,
            current_yearly_gb: 3.0,
            projected_daily_gb: 4.0,
            projected_monthly_gb: 5.0,
            projected_yearly_gb: 6.0,
        };

        let values: Vec<f64> = result.metrics().map(|(_, v)| v).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        let first = result.metrics().next().unwrap().0;
        assert_eq!(first.to_string(), "Current Daily Data (GB)");
    }

    #[test]
    fn test_default_input_matches_constant() {
        assert_eq!(ProjectionInput::default(), ProjectionInput::DEFAULT);
        assert_eq!(ProjectionInput::DEFAULT.retention_period_months, 12);
    }
}
