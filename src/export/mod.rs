pub mod bundle;
pub mod csv_export;
pub mod pdf;
pub mod table;

use crate::domain::model::CapacityReport;
use crate::utils::error::{EstimatorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Pdf,
    Json,
    /// ZIP archive holding the CSV, PDF and JSON renderings.
    Bundle,
}

impl ExportFormat {
    pub const NAMES: [&'static str; 4] = ["csv", "pdf", "json", "bundle"];

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Json => "json",
            ExportFormat::Bundle => "zip",
        }
    }

    pub fn file_name(self, stem: &str) -> String {
        format!("{}.{}", stem, self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "pdf" => Ok(ExportFormat::Pdf),
            "json" => Ok(ExportFormat::Json),
            "bundle" | "zip" => Ok(ExportFormat::Bundle),
            _ => Err(EstimatorError::UnsupportedFormatError {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Json => "json",
            ExportFormat::Bundle => "bundle",
        };
        f.write_str(name)
    }
}

/// Serializes `report` into the bytes of a file in `format`.
pub fn render(report: &CapacityReport, format: ExportFormat) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Csv => csv_export::to_csv(report),
        ExportFormat::Pdf => Ok(pdf::to_pdf(report)),
        ExportFormat::Json => to_json(report),
        ExportFormat::Bundle => bundle::to_zip(report),
    }
}

pub fn to_json(report: &CapacityReport) -> Result<Vec<u8>> {
    let json = serde_json::to_vec_pretty(report)?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::projector;
    use crate::domain::model::ProjectionInput;

    #[test]
    fn test_format_parsing() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("zip".parse::<ExportFormat>().unwrap(), ExportFormat::Bundle);
        assert!("xlsx".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::Bundle.file_name("report"), "report.zip");
    }

    #[test]
    fn test_json_carries_input_and_result() {
        let input = ProjectionInput::DEFAULT;
        let report = CapacityReport::new(input, projector::project(&input));

        let bytes = render(&report, ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["input"]["current_users"], 100000.0);
        assert_eq!(value["input"]["retention_period_months"], 12);
        assert!(value["result"]["projected_yearly_gb"].as_f64().unwrap() > 0.0);
        assert!(value["generated_at"].is_string());

        let parsed: CapacityReport = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed.input, report.input);
        assert_eq!(parsed.generated_at, report.generated_at);
    }
}
