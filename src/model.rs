//! Scenario input model.
//!
//! These types are the boundary with whatever parses feature files. They are
//! immutable inputs to generation and are loaded from YAML or JSON documents.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CodegenError, Result};

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// A feature: one generated test class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureModel {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Feature-level tags, emitted as class categories.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub scenarios: Vec<ScenarioModel>,
}

/// One behavior scenario: one generated test method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioModel {
    pub title: String,
    /// Raw category strings, including any `browser:` tags.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub examples: Option<ExampleTable>,
}

/// Example data for a scenario outline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleTable {
    /// Column names; when empty, parameters are named positionally.
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<ExampleRow>,
}

/// A single example row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ExampleRowInput")]
pub struct ExampleRow {
    pub cells: Vec<String>,
    pub tags: Vec<String>,
    pub ignored: bool,
}

/// Rows may be written as a bare list of cells or as a mapping.
#[derive(Deserialize)]
#[serde(untagged)]
enum ExampleRowInput {
    Cells(Vec<String>),
    Detailed {
        cells: Vec<String>,
        #[serde(default)]
        tags: Option<Vec<String>>,
        #[serde(default)]
        ignored: bool,
    },
}

impl From<ExampleRowInput> for ExampleRow {
    fn from(input: ExampleRowInput) -> Self {
        match input {
            ExampleRowInput::Cells(cells) => ExampleRow {
                cells,
                ..ExampleRow::default()
            },
            ExampleRowInput::Detailed {
                cells,
                tags,
                ignored,
            } => ExampleRow {
                cells,
                // A missing tag list is the same as an empty one.
                tags: tags.unwrap_or_default(),
                ignored,
            },
        }
    }
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

impl ScenarioModel {
    pub fn new(title: impl Into<String>) -> Self {
        ScenarioModel {
            title: title.into(),
            tags: Vec::new(),
            examples: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_examples(mut self, examples: ExampleTable) -> Self {
        self.examples = Some(examples);
        self
    }

    pub fn rows(&self) -> &[ExampleRow] {
        self.examples.as_ref().map_or(&[], |table| table.rows.as_slice())
    }
}

impl ExampleRow {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ExampleRow {
            cells: cells.into_iter().map(Into::into).collect(),
            ..ExampleRow::default()
        }
    }

    pub fn tagged<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }
}

// ============================================================================
// LOADING AND VALIDATION
// ============================================================================

/// Serialization format of a model document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Yaml,
    Json,
}

impl ModelFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Some(ModelFormat::Yaml),
            "json" => Some(ModelFormat::Json),
            _ => None,
        }
    }
}

impl FeatureModel {
    pub fn parse(source: &str, format: ModelFormat) -> std::result::Result<Self, String> {
        match format {
            ModelFormat::Yaml => serde_yaml::from_str(source).map_err(|e| e.to_string()),
            ModelFormat::Json => serde_json::from_str(source).map_err(|e| e.to_string()),
        }
    }

    /// Decodes a model document, using the file extension to choose the format.
    pub fn from_source(path: &Path, source: &str) -> Result<Self> {
        let format = ModelFormat::from_path(path).ok_or_else(|| CodegenError::ModelExtension {
            path: path.to_path_buf(),
        })?;
        let feature = Self::parse(source, format).map_err(|message| CodegenError::ModelDecode {
            path: path.to_path_buf(),
            message,
        })?;
        feature.validate()?;
        debug!(
            path = %path.display(),
            scenarios = feature.scenarios.len(),
            "decoded feature model"
        );
        Ok(feature)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source =
            fs::read_to_string(path).map_err(|e| CodegenError::io("read", path, e))?;
        Self::from_source(path, &source)
    }

    /// Structural checks that do not depend on naming.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CodegenError::invalid_model("feature title is empty"));
        }
        for scenario in &self.scenarios {
            if scenario.title.trim().is_empty() {
                return Err(CodegenError::invalid_model_with_help(
                    format!("a scenario in feature '{}' has an empty title", self.title),
                    "Every scenario needs a title; it becomes the test description.",
                ));
            }
            let Some(table) = &scenario.examples else {
                continue;
            };
            if table.columns.is_empty() {
                // Without column names the first row fixes the width.
                let Some(width) = table.rows.first().map(|row| row.cells.len()) else {
                    continue;
                };
                for (index, row) in table.rows.iter().enumerate() {
                    if row.cells.len() != width {
                        return Err(CodegenError::invalid_model_with_help(
                            format!(
                                "example row {} of scenario '{}' has {} cell(s) but the first row has {}",
                                index + 1,
                                scenario.title,
                                row.cells.len(),
                                width
                            ),
                            "Every example row must supply the same number of values.",
                        ));
                    }
                }
                continue;
            }
            for (index, row) in table.rows.iter().enumerate() {
                if row.cells.len() != table.columns.len() {
                    return Err(CodegenError::invalid_model_with_help(
                        format!(
                            "example row {} of scenario '{}' has {} cell(s) but {} column(s) are declared",
                            index + 1,
                            scenario.title,
                            row.cells.len(),
                            table.columns.len()
                        ),
                        "Every example row must supply one value per column.",
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_accept_bare_lists_and_mappings() {
        let yaml = r#"
title: Journeys
scenarios:
  - title: Plan
    examples:
      columns: [from, to]
      rows:
        - [London, Bath]
        - cells: [Leeds, York]
          tags: [slow]
          ignored: true
        - cells: [Hull, Ely]
"#;
        let feature = FeatureModel::parse(yaml, ModelFormat::Yaml).unwrap();
        let rows = feature.scenarios[0].rows();
        assert_eq!(rows[0], ExampleRow::new(["London", "Bath"]));
        assert_eq!(rows[1], ExampleRow::new(["Leeds", "York"]).tagged(["slow"]).ignored());
        assert!(rows[2].tags.is_empty());
        assert!(!rows[2].ignored);
    }

    #[test]
    fn validation_rejects_ragged_rows() {
        let feature = FeatureModel {
            title: "Journeys".into(),
            description: None,
            tags: vec![],
            scenarios: vec![ScenarioModel::new("Plan").with_examples(ExampleTable {
                columns: vec!["from".into(), "to".into()],
                rows: vec![ExampleRow::new(["London"])],
            })],
        };
        let err = feature.validate().unwrap_err();
        assert!(err.to_string().contains("1 cell(s) but 2 column(s)"));
    }

    #[test]
    fn validation_rejects_ragged_rows_without_columns() {
        let feature = FeatureModel {
            title: "Journeys".into(),
            description: None,
            tags: vec![],
            scenarios: vec![ScenarioModel::new("Plan").with_examples(ExampleTable {
                columns: vec![],
                rows: vec![ExampleRow::new(["a"]), ExampleRow::new(["a", "b", "c"])],
            })],
        };
        let err = feature.validate().unwrap_err();
        assert!(matches!(err, CodegenError::InvalidModel { .. }));
        assert!(err.to_string().contains("example row 2"));
    }

    #[test]
    fn unknown_extension_is_reported() {
        let err = FeatureModel::from_source(Path::new("journeys.feature"), "").unwrap_err();
        assert!(matches!(err, CodegenError::ModelExtension { .. }));
    }
}
