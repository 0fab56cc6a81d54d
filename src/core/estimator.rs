use crate::core::projector;
use crate::core::Storage;
use crate::domain::model::{CapacityReport, ProjectionInput};
use crate::export::{self, ExportFormat};
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct EstimateOutcome {
    pub report: CapacityReport,
    /// Paths of the written export files, in the order they were requested.
    pub written: Vec<String>,
}

pub struct CapacityEstimator<S: Storage> {
    storage: S,
    file_stem: String,
}

impl<S: Storage> CapacityEstimator<S> {
    pub fn new(storage: S, file_stem: impl Into<String>) -> Self {
        Self {
            storage,
            file_stem: file_stem.into(),
        }
    }

    pub fn estimate(&self, input: &ProjectionInput) -> CapacityReport {
        tracing::debug!("Projecting capacity for {:?}", input);

        let result = projector::project(input);
        for (metric, value) in result.metrics() {
            tracing::info!("{}: {:.2} GB", metric, value);
        }

        CapacityReport::new(*input, result)
    }

    pub fn export(&self, report: &CapacityReport, format: ExportFormat) -> Result<String> {
        let data = export::render(report, format)?;
        let path = self
            .storage
            .write_file(&format.file_name(&self.file_stem), &data)?;
        tracing::info!("Exported {} ({} bytes) to {}", format, data.len(), path);
        Ok(path)
    }

    pub fn run(&self, input: &ProjectionInput, formats: &[ExportFormat]) -> Result<EstimateOutcome> {
        let report = self.estimate(input);

        let mut written = Vec::with_capacity(formats.len());
        for &format in formats {
            written.push(self.export(&report, format)?);
        }

        Ok(EstimateOutcome { report, written })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::EstimatorError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.borrow().get(path).cloned().ok_or_else(|| {
                EstimatorError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
            self.files.borrow_mut().insert(path.to_string(), data.to_vec());
            Ok(format!("mem://{}", path))
        }
    }

    #[test]
    fn test_run_without_exports_writes_nothing() {
        let estimator = CapacityEstimator::new(MockStorage::default(), "capacity_report");
        let outcome = estimator.run(&ProjectionInput::DEFAULT, &[]).unwrap();

        assert!(outcome.written.is_empty());
        assert_eq!(outcome.report.input, ProjectionInput::DEFAULT);
        assert!(estimator.storage.files.borrow().is_empty());
    }

    #[test]
    fn test_run_writes_each_requested_format() {
        let estimator = CapacityEstimator::new(MockStorage::default(), "q3");
        let outcome = estimator
            .run(&ProjectionInput::DEFAULT, &[ExportFormat::Csv, ExportFormat::Pdf])
            .unwrap();

        assert_eq!(outcome.written, vec!["mem://q3.csv", "mem://q3.pdf"]);

        let csv = estimator.storage.read_file("q3.csv").unwrap();
        assert!(csv.starts_with(b"Metric,Value (GB)"));
        let pdf = estimator.storage.read_file("q3.pdf").unwrap();
        assert!(pdf.starts_with(b"%PDF-1.4"));
    }
}
