//! File-level pipeline: discover models, generate, write, and check for staleness.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::GeneratorConfig;
use crate::errors::{CodegenError, Result};
use crate::generator::FeatureGenerator;
use crate::ir::TestClass;
use crate::model::FeatureModel;
use crate::render::{CSharpRenderer, CodeRenderer, FileHeader};

/// One generated output file, held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub source: PathBuf,
    pub output: PathBuf,
    pub contents: String,
    pub fingerprint: String,
    pub class_name: String,
    pub test_cases: usize,
}

/// Outcome of comparing a generated file with what is on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    UpToDate,
    Stale { existing: String },
    Missing,
}

/// Hex-encoded SHA-256 of `bytes`.
pub fn fingerprint(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// Model files under `root`, sorted. A file path is returned as-is.
pub fn discover_model_files(root: &Path, config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|source| CodegenError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !config.accepts_extension(path) {
            continue;
        }
        // Neither our configuration file nor the browser listing is a model.
        if path.file_name().is_some_and(|name| name == crate::config::CONFIG_FILE_NAME) {
            continue;
        }
        if config
            .supported_browsers
            .as_deref()
            .is_some_and(|listing| same_file(listing, path))
        {
            continue;
        }
        files.push(path.to_path_buf());
    }
    files.sort();
    debug!(root = %root.display(), count = files.len(), "discovered model files");
    Ok(files)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Where the generated file for `source` is written.
///
/// With an output directory, the path of `source` relative to `root` is kept
/// so that models with the same name in different folders do not collide.
pub fn output_path(source: &Path, root: &Path, config: &GeneratorConfig) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!("{stem}{}", config.file_suffix);

    match &config.output_dir {
        None => source.with_file_name(file_name),
        Some(dir) => {
            let relative_parent = source
                .parent()
                .and_then(|parent| parent.strip_prefix(root).ok())
                .unwrap_or_else(|| Path::new(""));
            dir.join(relative_parent).join(file_name)
        }
    }
}

/// Generates and renders one feature.
pub fn render_feature(
    feature: &FeatureModel,
    config: &GeneratorConfig,
    header: &FileHeader,
) -> Result<(TestClass, String)> {
    let class = FeatureGenerator::new(config.namespace.as_str()).generate(feature)?;
    let contents = CSharpRenderer.render(&class, header);
    Ok((class, contents))
}

/// Loads, generates and renders the model at `source`.
pub fn generate_file(source: &Path, root: &Path, config: &GeneratorConfig) -> Result<GeneratedFile> {
    let bytes = fs::read(source).map_err(|e| CodegenError::io("read", source, e))?;
    let text = std::str::from_utf8(&bytes).map_err(|e| CodegenError::ModelDecode {
        path: source.to_path_buf(),
        message: format!("not valid UTF-8: {e}"),
    })?;
    let feature = FeatureModel::from_source(source, text)?;

    let fingerprint = fingerprint(&bytes);
    let header = FileHeader {
        source: source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned()),
        fingerprint: Some(fingerprint.clone()),
    };
    let (class, contents) = render_feature(&feature, config, &header)?;

    Ok(GeneratedFile {
        source: source.to_path_buf(),
        output: output_path(source, root, config),
        contents,
        fingerprint,
        class_name: class.name.clone(),
        test_cases: class.total_test_cases(),
    })
}

/// Generates every model found under `root`.
pub fn generate_all(root: &Path, config: &GeneratorConfig) -> Result<Vec<GeneratedFile>> {
    let root_dir = if root.is_file() {
        root.parent().unwrap_or_else(|| Path::new(""))
    } else {
        root
    };
    discover_model_files(root, config)?
        .iter()
        .map(|source| generate_file(source, root_dir, config))
        .collect()
}

pub fn write_generated(file: &GeneratedFile) -> Result<()> {
    if let Some(parent) = file.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| CodegenError::io("create directory", parent, e))?;
        }
    }
    fs::write(&file.output, &file.contents)
        .map_err(|e| CodegenError::io("write", &file.output, e))?;
    info!(
        source = %file.source.display(),
        output = %file.output.display(),
        test_cases = file.test_cases,
        "wrote generated tests"
    );
    Ok(())
}

pub fn check_generated(file: &GeneratedFile) -> Result<FileStatus> {
    if !file.output.exists() {
        return Ok(FileStatus::Missing);
    }
    let existing = fs::read_to_string(&file.output)
        .map_err(|e| CodegenError::io("read", &file.output, e))?;
    if existing == file.contents {
        Ok(FileStatus::UpToDate)
    } else {
        Ok(FileStatus::Stale { existing })
    }
}
