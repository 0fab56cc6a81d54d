use crate::config::InputOverrides;
use crate::utils::error::{EstimatorError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A what-if scenario stored as TOML. Every section is optional; anything
/// left out falls back to the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub scenario: Option<ScenarioMeta>,
    #[serde(default)]
    pub inputs: InputOverrides,
    pub export: Option<ExportConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioMeta {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_path: Option<String>,
    pub formats: Option<Vec<String>>,
    pub file_stem: Option<String>,
}

impl ScenarioConfig {
    /// 從 TOML 檔案載入場景
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EstimatorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析場景
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EstimatorError::TomlParseError {
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${RETENTION_MONTHS})，未定義的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn name(&self) -> Option<&str> {
        self.scenario.as_ref().map(|s| s.name.as_str())
    }

    pub fn output_path(&self) -> Option<&str> {
        self.export.as_ref().and_then(|e| e.output_path.as_deref())
    }

    pub fn formats(&self) -> &[String] {
        self.export
            .as_ref()
            .and_then(|e| e.formats.as_deref())
            .unwrap_or(&[])
    }

    pub fn file_stem(&self) -> Option<&str> {
        self.export.as_ref().and_then(|e| e.file_stem.as_deref())
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.output_path() {
            validation::validate_path("export.output_path", path)?;
        }
        if let Some(stem) = self.file_stem() {
            validation::validate_file_stem("export.file_stem", stem)?;
        }
        validation::parse_export_formats("export.formats", self.formats())?;
        if let Some(meta) = &self.scenario {
            validation::validate_non_empty_string("scenario.name", &meta.name)?;
        }
        Ok(())
    }
}
