//! Unified error handling for browsercase.
//!
//! Generation itself never fails once a model has been loaded and validated;
//! every variant here describes a user-facing failure at the edges of the
//! pipeline (reading files, decoding models or config, stale outputs, and
//! unsupported browsers). All variants carry a stable `miette` diagnostic code
//! of the form `browsercase::<area>::<kind>` plus a help message.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CodegenError>;

// ============================================================================
// ERROR TYPE
// ============================================================================

#[derive(Error, Diagnostic, Debug)]
pub enum CodegenError {
    #[error("failed to {operation} '{}'", .path.display())]
    #[diagnostic(
        code(browsercase::io::failed),
        help("Check that the path exists and is readable/writable.")
    )]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk directory '{}'", .root.display())]
    #[diagnostic(code(browsercase::io::walk))]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("could not decode scenario model '{}': {message}", .path.display())]
    #[diagnostic(
        code(browsercase::model::decode),
        help("Scenario models are YAML (.yaml/.yml) or JSON (.json) documents with a `title` and a `scenarios` list.")
    )]
    ModelDecode { path: PathBuf, message: String },

    #[error("unsupported model file extension for '{}'", .path.display())]
    #[diagnostic(
        code(browsercase::model::extension),
        help("Use one of the configured model extensions (default: yaml, yml, json).")
    )]
    ModelExtension { path: PathBuf },

    #[error("invalid scenario model: {message}")]
    #[diagnostic(code(browsercase::model::invalid))]
    InvalidModel {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("could not decode configuration '{}': {message}", .path.display())]
    #[diagnostic(
        code(browsercase::config::decode),
        help("Recognized keys: namespace, output_dir, file_suffix, model_extensions, supported_browsers.")
    )]
    ConfigDecode { path: PathBuf, message: String },

    #[error("could not decode supported browser list '{}': {message}", .path.display())]
    #[diagnostic(
        code(browsercase::browsers::decode),
        help("Expected a JSON array of objects with `browser`, `browser_version`, `os`, `os_version` and `device` fields.")
    )]
    SupportMatrixDecode { path: PathBuf, message: String },

    #[error("{count} generated file(s) are out of date")]
    #[diagnostic(
        code(browsercase::check::stale),
        help("Run `browsercase generate` to refresh the generated tests.")
    )]
    StaleOutput { count: usize },

    #[error("{count} browser configuration(s) are not supported")]
    #[diagnostic(
        code(browsercase::browsers::unsupported),
        help("Fix the `browser:` tags or refresh the supported browser list.")
    )]
    UnsupportedBrowsers { count: usize },
}

// ============================================================================
// CONSTRUCTION HELPERS
// ============================================================================

impl CodegenError {
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CodegenError::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    pub fn invalid_model(message: impl Into<String>) -> Self {
        CodegenError::InvalidModel {
            message: message.into(),
            help: None,
        }
    }

    pub fn invalid_model_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        CodegenError::InvalidModel {
            message: message.into(),
            help: Some(help.into()),
        }
    }
}
