pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::ProjectionInput;
use crate::export::ExportFormat;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use toml_config::ScenarioConfig;

pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_FILE_STEM: &str = "capacity_report";

/// Per-field replacements for [`ProjectionInput`]. Shared by the `[inputs]`
/// table of a scenario file and the command line flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
pub struct InputOverrides {
    #[cfg_attr(feature = "cli", arg(long, allow_negative_numbers = true))]
    pub current_users: Option<f64>,

    #[cfg_attr(feature = "cli", arg(long, allow_negative_numbers = true))]
    pub daily_transactions_per_user: Option<f64>,

    #[cfg_attr(feature = "cli", arg(long, allow_negative_numbers = true))]
    pub average_transaction_size_kb: Option<f64>,

    #[cfg_attr(
        feature = "cli",
        arg(long = "users-growth-rate", allow_negative_numbers = true)
    )]
    pub users_growth_rate_pct: Option<f64>,

    #[cfg_attr(
        feature = "cli",
        arg(long = "transactions-growth-rate", allow_negative_numbers = true)
    )]
    pub transactions_growth_rate_pct: Option<f64>,

    #[cfg_attr(feature = "cli", arg(long))]
    pub retention_period_months: Option<u32>,
}

impl InputOverrides {
    pub fn apply_to(&self, mut input: ProjectionInput) -> ProjectionInput {
        if let Some(v) = self.current_users {
            input.current_users = v;
        }
        if let Some(v) = self.daily_transactions_per_user {
            input.daily_transactions_per_user = v;
        }
        if let Some(v) = self.average_transaction_size_kb {
            input.average_transaction_size_kb = v;
        }
        if let Some(v) = self.users_growth_rate_pct {
            input.users_growth_rate_pct = v;
        }
        if let Some(v) = self.transactions_growth_rate_pct {
            input.transactions_growth_rate_pct = v;
        }
        if let Some(v) = self.retention_period_months {
            input.retention_period_months = v;
        }
        input
    }
}

/// Everything one run needs, after flags, scenario file and defaults have
/// been merged. Flags win over the file, the file wins over defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub scenario_name: Option<String>,
    pub inputs: ProjectionInput,
    pub output_path: String,
    pub export_formats: Vec<String>,
    pub file_stem: String,
}

impl RunConfig {
    pub fn resolve(
        scenario: Option<&ScenarioConfig>,
        overrides: &InputOverrides,
        output_path: Option<&str>,
        export_formats: &[String],
        file_stem: Option<&str>,
    ) -> Self {
        let mut inputs = ProjectionInput::DEFAULT;
        if let Some(scenario) = scenario {
            inputs = scenario.inputs.apply_to(inputs);
        }
        inputs = overrides.apply_to(inputs);

        let export_formats = if export_formats.is_empty() {
            scenario.map(|s| s.formats().to_vec()).unwrap_or_default()
        } else {
            export_formats.to_vec()
        };

        Self {
            scenario_name: scenario.and_then(|s| s.name()).map(str::to_string),
            inputs,
            output_path: output_path
                .or_else(|| scenario.and_then(|s| s.output_path()))
                .unwrap_or(DEFAULT_OUTPUT_PATH)
                .to_string(),
            export_formats,
            file_stem: file_stem
                .or_else(|| scenario.and_then(|s| s.file_stem()))
                .unwrap_or(DEFAULT_FILE_STEM)
                .to_string(),
        }
    }
}

impl ConfigProvider for RunConfig {
    fn inputs(&self) -> ProjectionInput {
        self.inputs
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn export_formats(&self) -> Result<Vec<ExportFormat>> {
        validation::parse_export_formats("export", &self.export_formats)
    }

    fn file_stem(&self) -> &str {
        &self.file_stem
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_file_stem("file_stem", &self.file_stem)?;
        self.export_formats()?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "capacity-estimator")]
#[command(about = "Projects storage capacity needs for a payment service")]
pub struct CliConfig {
    /// TOML scenario file with inputs and export settings
    #[arg(short, long)]
    pub config: Option<String>,

    #[command(flatten)]
    pub inputs: InputOverrides,

    /// Export formats (csv, pdf, json, bundle)
    #[arg(long, value_delimiter = ',')]
    pub export: Vec<String>,

    /// Directory export files are written to [default: ./output]
    #[arg(long)]
    pub output_path: Option<String>,

    /// File name used for exports, without extension [default: capacity_report]
    #[arg(long)]
    pub file_stem: Option<String>,

    /// Start an interactive session instead of a single calculation
    #[arg(short, long)]
    pub interactive: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_scenario(&self) -> Result<Option<ScenarioConfig>> {
        match &self.config {
            Some(path) => {
                let scenario = ScenarioConfig::from_file(path)?;
                scenario.validate()?;
                Ok(Some(scenario))
            }
            None => Ok(None),
        }
    }

    pub fn resolve(&self, scenario: Option<&ScenarioConfig>) -> RunConfig {
        RunConfig::resolve(
            scenario,
            &self.inputs,
            self.output_path.as_deref(),
            &self.export,
            self.file_stem.as_deref(),
        )
    }
}
