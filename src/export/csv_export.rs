use crate::domain::model::CapacityReport;
use crate::utils::error::{EstimatorError, Result};

pub const HEADER: [&str; 2] = ["Metric", "Value (GB)"];

/// One row per metric. Values keep full precision; rounding is left to
/// whoever opens the file.
pub fn to_csv(report: &CapacityReport) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;

    for (metric, value) in report.result.metrics() {
        writer.write_record([metric.label(), value.to_string().as_str()])?;
    }

    writer
        .into_inner()
        .map_err(|e| EstimatorError::IoError(e.into_error()))
}
