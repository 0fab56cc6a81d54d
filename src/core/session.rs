use crate::core::projector;
use crate::domain::model::{ProjectionInput, ProjectionResult};
use crate::utils::error::{EstimatorError, Result};
use std::fmt;
use std::str::FromStr;

/// One editable field of [`ProjectionInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    CurrentUsers,
    DailyTransactionsPerUser,
    AverageTransactionSizeKb,
    UsersGrowthRate,
    TransactionsGrowthRate,
    RetentionPeriodMonths,
}

impl InputField {
    pub const ALL: [InputField; 6] = [
        InputField::CurrentUsers,
        InputField::DailyTransactionsPerUser,
        InputField::AverageTransactionSizeKb,
        InputField::UsersGrowthRate,
        InputField::TransactionsGrowthRate,
        InputField::RetentionPeriodMonths,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InputField::CurrentUsers => "current_users",
            InputField::DailyTransactionsPerUser => "daily_transactions_per_user",
            InputField::AverageTransactionSizeKb => "average_transaction_size_kb",
            InputField::UsersGrowthRate => "users_growth_rate_pct",
            InputField::TransactionsGrowthRate => "transactions_growth_rate_pct",
            InputField::RetentionPeriodMonths => "retention_period_months",
        }
    }

    pub fn alias(self) -> &'static str {
        match self {
            InputField::CurrentUsers => "users",
            InputField::DailyTransactionsPerUser => "transactions",
            InputField::AverageTransactionSizeKb => "size",
            InputField::UsersGrowthRate => "users-growth",
            InputField::TransactionsGrowthRate => "transactions-growth",
            InputField::RetentionPeriodMonths => "retention",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InputField::CurrentUsers => "Current Number of Users",
            InputField::DailyTransactionsPerUser => "Daily Transactions per User",
            InputField::AverageTransactionSizeKb => "Average Transaction Size (KB)",
            InputField::UsersGrowthRate => "User Growth Rate (monthly, %)",
            InputField::TransactionsGrowthRate => "Transaction Growth Rate (monthly, %)",
            InputField::RetentionPeriodMonths => "Retention Period (months)",
        }
    }

    /// Current value of this field, formatted for display.
    pub fn value_of(self, input: &ProjectionInput) -> String {
        match self {
            InputField::CurrentUsers => input.current_users.to_string(),
            InputField::DailyTransactionsPerUser => input.daily_transactions_per_user.to_string(),
            InputField::AverageTransactionSizeKb => input.average_transaction_size_kb.to_string(),
            InputField::UsersGrowthRate => input.users_growth_rate_pct.to_string(),
            InputField::TransactionsGrowthRate => input.transactions_growth_rate_pct.to_string(),
            InputField::RetentionPeriodMonths => input.retention_period_months.to_string(),
        }
    }

    /// Parses `raw` and stores it in `input`. Only the type is checked.
    pub fn apply(self, input: &mut ProjectionInput, raw: &str) -> Result<()> {
        let raw = raw.trim();
        match self {
            InputField::CurrentUsers => input.current_users = self.parse_number(raw)?,
            InputField::DailyTransactionsPerUser => {
                input.daily_transactions_per_user = self.parse_number(raw)?
            }
            InputField::AverageTransactionSizeKb => {
                input.average_transaction_size_kb = self.parse_number(raw)?
            }
            InputField::UsersGrowthRate => input.users_growth_rate_pct = self.parse_number(raw)?,
            InputField::TransactionsGrowthRate => {
                input.transactions_growth_rate_pct = self.parse_number(raw)?
            }
            InputField::RetentionPeriodMonths => {
                input.retention_period_months = self.parse_months(raw)?
            }
        }
        Ok(())
    }

    fn parse_number(self, raw: &str) -> Result<f64> {
        raw.parse().map_err(|e: std::num::ParseFloatError| EstimatorError::InvalidInputError {
            field: self.name().to_string(),
            value: raw.to_string(),
            reason: format!("expected a number ({})", e),
        })
    }

    fn parse_months(self, raw: &str) -> Result<u32> {
        raw.parse().map_err(|e: std::num::ParseIntError| EstimatorError::InvalidInputError {
            field: self.name().to_string(),
            value: raw.to_string(),
            reason: format!("expected a whole number of months ({})", e),
        })
    }
}

impl FromStr for InputField {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        InputField::ALL
            .into_iter()
            .find(|field| field.alias() == wanted || field.name().replace('_', "-") == wanted)
            .ok_or_else(|| EstimatorError::UnknownFieldError {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// State of one what-if session: the defaults it was opened with, the inputs
/// currently being edited, and the last computed result.
#[derive(Debug, Clone)]
pub struct Session {
    defaults: ProjectionInput,
    inputs: ProjectionInput,
    last_result: Option<ProjectionResult>,
}

impl Session {
    pub fn new(defaults: ProjectionInput) -> Self {
        Self {
            defaults,
            inputs: defaults,
            last_result: None,
        }
    }

    pub fn defaults(&self) -> &ProjectionInput {
        &self.defaults
    }

    pub fn inputs(&self) -> &ProjectionInput {
        &self.inputs
    }

    pub fn last_result(&self) -> Option<&ProjectionResult> {
        self.last_result.as_ref()
    }

    /// Edits one field. A previous result no longer matches the inputs and
    /// is dropped.
    pub fn set(&mut self, field: InputField, raw: &str) -> Result<()> {
        field.apply(&mut self.inputs, raw)?;
        self.last_result = None;
        Ok(())
    }

    /// Restores the defaults the session was opened with.
    pub fn reset(&mut self) {
        self.inputs = self.defaults;
        self.last_result = None;
    }

    pub fn calculate(&mut self) -> ProjectionResult {
        let result = projector::project(&self.inputs);
        self.last_result = Some(result);
        result
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ProjectionInput::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parsing_accepts_names_and_aliases() {
        assert_eq!("users".parse::<InputField>().unwrap(), InputField::CurrentUsers);
        assert_eq!(
            "retention_period_months".parse::<InputField>().unwrap(),
            InputField::RetentionPeriodMonths
        );
        assert_eq!(
            "Transactions-Growth".parse::<InputField>().unwrap(),
            InputField::TransactionsGrowthRate
        );
        assert!(matches!(
            "colour".parse::<InputField>(),
            Err(EstimatorError::UnknownFieldError { .. })
        ));
    }

    #[test]
    fn test_set_accepts_negative_values() {
        let mut session = Session::default();
        session.set(InputField::UsersGrowthRate, "-12.5").unwrap();
        session.set(InputField::CurrentUsers, "-3").unwrap();
        assert_eq!(session.inputs().users_growth_rate_pct, -12.5);
        assert_eq!(session.inputs().current_users, -3.0);
    }

    #[test]
    fn test_retention_requires_whole_months() {
        let mut session = Session::default();
        assert!(session.set(InputField::RetentionPeriodMonths, "1.5").is_err());
        assert!(session.set(InputField::RetentionPeriodMonths, "-1").is_err());
        assert!(session.set(InputField::CurrentUsers, "many").is_err());
        assert_eq!(session.inputs(), &ProjectionInput::DEFAULT);

        session.set(InputField::RetentionPeriodMonths, " 24 ").unwrap();
        assert_eq!(session.inputs().retention_period_months, 24);
    }

    #[test]
    fn test_reset_restores_defaults_not_zero() {
        let defaults = ProjectionInput {
            current_users: 42.0,
            ..ProjectionInput::DEFAULT
        };
        let mut session = Session::new(defaults);
        session.set(InputField::CurrentUsers, "7").unwrap();
        session.calculate();
        assert!(session.last_result().is_some());

        session.reset();
        assert_eq!(session.inputs(), &defaults);
        assert_ne!(session.inputs(), &ProjectionInput::ZERO);
        assert!(session.last_result().is_none());
    }

    #[test]
    fn test_set_invalidates_last_result() {
        let mut session = Session::default();
        let before = session.calculate();
        session.set(InputField::AverageTransactionSizeKb, "1.0").unwrap();
        assert!(session.last_result().is_none());

        let after = session.calculate();
        assert_eq!(after.current_daily_gb, before.current_daily_gb * 2.0);
    }
}
