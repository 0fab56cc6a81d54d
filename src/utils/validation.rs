use crate::export::ExportFormat;
use crate::utils::error::{EstimatorError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EstimatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EstimatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A file stem is joined onto the output directory, so it must not carry
/// its own directory components.
pub fn validate_file_stem(field_name: &str, stem: &str) -> Result<()> {
    validate_non_empty_string(field_name, stem)?;

    if stem.contains(['/', '\\', '\0']) || stem == "." || stem == ".." {
        return Err(EstimatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: stem.to_string(),
            reason: "File stem must be a plain file name".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EstimatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn parse_export_formats(field_name: &str, names: &[String]) -> Result<Vec<ExportFormat>> {
    let mut formats = Vec::with_capacity(names.len());
    for name in names {
        let format = name.parse::<ExportFormat>().map_err(|_| EstimatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.clone(),
            reason: format!(
                "Unsupported format. Valid formats: {}",
                ExportFormat::NAMES.join(", ")
            ),
        })?;
        if !formats.contains(&format) {
            formats.push(format);
        }
    }
    Ok(formats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./output").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "out\0put").is_err());
    }

    #[test]
    fn test_validate_file_stem() {
        assert!(validate_file_stem("file_stem", "capacity_report").is_ok());
        assert!(validate_file_stem("file_stem", "  ").is_err());
        assert!(validate_file_stem("file_stem", "../report").is_err());
        assert!(validate_file_stem("file_stem", "..").is_err());
    }

    #[test]
    fn test_parse_export_formats_dedups() {
        let names = vec!["csv".to_string(), "PDF".to_string(), "csv".to_string()];
        let formats = parse_export_formats("export", &names).unwrap();
        assert_eq!(formats, vec![ExportFormat::Csv, ExportFormat::Pdf]);

        let invalid = vec!["xlsx".to_string()];
        assert!(parse_export_formats("export", &invalid).is_err());
    }
}
