//! Generator configuration.
//!
//! Read from `browsercase.yaml` in the working directory (or an explicit
//! `--config` path). Every key is optional. Relative paths inside the file
//! are resolved against the directory that contains it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CodegenError, Result};

pub const CONFIG_FILE_NAME: &str = "browsercase.yaml";
pub const DEFAULT_NAMESPACE: &str = "Generated.Features";
pub const DEFAULT_FILE_SUFFIX: &str = ".feature.cs";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Namespace of every generated class.
    pub namespace: String,
    /// Where generated files go; next to each model file when unset.
    pub output_dir: Option<PathBuf>,
    /// Appended to the model file stem to name the generated file.
    pub file_suffix: String,
    /// Extensions picked up when a directory is given.
    pub model_extensions: Vec<String>,
    /// Supported browser listing used by `verify`.
    pub supported_browsers: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            namespace: DEFAULT_NAMESPACE.to_string(),
            output_dir: None,
            file_suffix: DEFAULT_FILE_SUFFIX.to_string(),
            model_extensions: vec!["yaml".into(), "yml".into(), "json".into()],
            supported_browsers: None,
        }
    }
}

impl GeneratorConfig {
    pub fn from_yaml_str(source: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty document means "all defaults".
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(source)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source =
            fs::read_to_string(path).map_err(|e| CodegenError::io("read", path, e))?;
        let config = Self::from_yaml_str(&source).map_err(|e| CodegenError::ConfigDecode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), "loaded configuration");

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.resolve_relative_to(base))
    }

    /// Loads `browsercase.yaml` from `dir` if present, otherwise the defaults.
    pub fn discover(dir: &Path) -> Result<Self> {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            debug!(dir = %dir.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    fn resolve_relative_to(mut self, base: &Path) -> Self {
        let resolve = |path: PathBuf| {
            if path.is_relative() {
                base.join(path)
            } else {
                path
            }
        };
        self.output_dir = self.output_dir.map(resolve);
        self.supported_browsers = self.supported_browsers.map(resolve);
        self
    }

    pub fn accepts_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.model_extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }
}
