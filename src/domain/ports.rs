use crate::domain::model::ProjectionInput;
use crate::export::ExportFormat;
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    /// Writes `data` under `path` and returns where it landed.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}

pub trait ConfigProvider {
    fn inputs(&self) -> ProjectionInput;
    fn output_path(&self) -> &str;
    fn export_formats(&self) -> Result<Vec<ExportFormat>>;
    fn file_stem(&self) -> &str;
}
