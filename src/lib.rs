pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod export;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::ScenarioConfig, RunConfig};
pub use crate::core::{estimator::CapacityEstimator, projector::project, session::Session};
pub use crate::domain::model::{CapacityReport, Metric, ProjectionInput, ProjectionResult};
pub use crate::export::ExportFormat;
pub use crate::utils::error::{EstimatorError, Result};
