use crate::domain::model::CapacityReport;
use crate::export::{csv_export, pdf, to_json};
use crate::utils::error::Result;
use std::io::Write;
use zip::write::{SimpleFileOptions, ZipWriter};

pub const ENTRY_STEM: &str = "capacity_report";

/// ZIP archive with the CSV, PDF and JSON renderings of `report`.
pub fn to_zip(report: &CapacityReport) -> Result<Vec<u8>> {
    let entries = [
        ("csv", csv_export::to_csv(report)?),
        ("pdf", pdf::to_pdf(report)),
        ("json", to_json(report)?),
    ];

    tracing::debug!("Creating ZIP bundle with {} files", entries.len());

    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for (extension, data) in &entries {
        zip.start_file(format!("{}.{}", ENTRY_STEM, extension), SimpleFileOptions::default())?;
        zip.write_all(data)?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}
