//! The browsercase Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::path::{Path, PathBuf};

use clap::Parser;
use miette::IntoDiagnostic;
use serde::Serialize;
use termcolor::Color;
use tracing::warn;

use crate::browser::{classify, display_label, SupportMatrix};
use crate::cli::args::{BrowsercaseArgs, Command, OutputOptions};
use crate::config::GeneratorConfig;
use crate::errors::CodegenError;
use crate::generator::FeatureGenerator;
use crate::logging::init_tracing;
use crate::model::FeatureModel;
use crate::pipeline::{self, FileStatus};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() -> miette::Result<()> {
    let args = BrowsercaseArgs::parse();
    init_tracing(args.verbose, args.quiet);

    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Generate { path, options } => handle_generate(&path, apply(config, &options)),
        Command::Check { path, options } => handle_check(&path, apply(config, &options)),
        Command::Print { file, namespace } => {
            let mut config = config;
            if let Some(namespace) = namespace {
                config.namespace = namespace;
            }
            handle_print(&file, &config)
        }
        Command::Classify { categories, json } => handle_classify(&categories, json),
        Command::Plan { file, json } => handle_plan(&file, &config, json, args.verbose > 0),
        Command::Verify { path, supported } => handle_verify(&path, config, supported),
    }
}

fn load_config(explicit: Option<&Path>) -> miette::Result<GeneratorConfig> {
    let config = match explicit {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::discover(Path::new("."))?,
    };
    Ok(config)
}

fn apply(mut config: GeneratorConfig, options: &OutputOptions) -> GeneratorConfig {
    if let Some(output) = &options.output {
        config.output_dir = Some(output.clone());
    }
    if let Some(namespace) = &options.namespace {
        config.namespace = namespace.clone();
    }
    config
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn handle_generate(path: &Path, config: GeneratorConfig) -> miette::Result<()> {
    let files = pipeline::generate_all(path, &config)?;
    if files.is_empty() {
        warn!(path = %path.display(), "no model files found");
    }
    for file in &files {
        pipeline::write_generated(file)?;
        output::print_status(
            "generated",
            Color::Green,
            &format!(
                "{} ({}, {} test case(s))",
                file.output.display(),
                file.class_name,
                file.test_cases
            ),
        );
    }
    Ok(())
}

fn handle_check(path: &Path, config: GeneratorConfig) -> miette::Result<()> {
    let files = pipeline::generate_all(path, &config)?;
    let mut stale = 0;
    for file in &files {
        match pipeline::check_generated(file)? {
            FileStatus::UpToDate => {
                output::print_status("fresh", Color::Green, &file.output.display().to_string());
            }
            FileStatus::Missing => {
                stale += 1;
                output::print_status("missing", Color::Red, &file.output.display().to_string());
            }
            FileStatus::Stale { existing } => {
                stale += 1;
                output::print_status("stale", Color::Yellow, &file.output.display().to_string());
                output::print_diff(&existing, &file.contents);
            }
        }
    }
    if stale > 0 {
        return Err(CodegenError::StaleOutput { count: stale }.into());
    }
    Ok(())
}

fn handle_print(file: &Path, config: &GeneratorConfig) -> miette::Result<()> {
    let root = file.parent().unwrap_or_else(|| Path::new(""));
    let generated = pipeline::generate_file(file, root, config)?;
    print!("{}", generated.contents);
    Ok(())
}

#[derive(Serialize)]
struct BrowserTarget<'a> {
    id: &'a str,
    label: String,
}

#[derive(Serialize)]
struct ClassificationReport<'a> {
    plain: &'a [String],
    browsers: Vec<BrowserTarget<'a>>,
}

fn handle_classify(categories: &[String], json: bool) -> miette::Result<()> {
    let classified = classify(categories);
    if !json {
        output::print_classification(&classified);
        return Ok(());
    }
    let report = ClassificationReport {
        plain: &classified.plain,
        browsers: classified
            .browser_ids
            .iter()
            .map(|id| BrowserTarget {
                id,
                label: display_label(id),
            })
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
    Ok(())
}

fn handle_plan(file: &Path, config: &GeneratorConfig, json: bool, verbose: bool) -> miette::Result<()> {
    let feature = FeatureModel::load(file)?;
    let class = FeatureGenerator::new(config.namespace.as_str()).generate(&feature)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&class.test_methods).into_diagnostic()?
        );
        return Ok(());
    }
    output::print_plan(&class);
    if verbose {
        output::print_attributes(&class);
    }
    Ok(())
}

fn handle_verify(
    path: &Path,
    mut config: GeneratorConfig,
    supported: Option<PathBuf>,
) -> miette::Result<()> {
    let listing = supported
        .or_else(|| config.supported_browsers.take())
        .ok_or_else(|| {
            miette::miette!(
                code = "browsercase::browsers::listing",
                help = "Pass --supported <browsers.json> or set `supported_browsers` in browsercase.yaml.",
                "no supported browser listing configured"
            )
        })?;
    let matrix = SupportMatrix::load(&listing)?;
    config.supported_browsers = Some(listing);

    let mut unsupported = 0;
    for source in pipeline::discover_model_files(path, &config)? {
        let feature = FeatureModel::load(&source)?;
        for scenario in &feature.scenarios {
            for id in classify(&scenario.tags).browser_ids {
                if matrix.supports_id(&id) {
                    continue;
                }
                unsupported += 1;
                output::print_status(
                    "unsupported",
                    Color::Red,
                    &format!("{} :: {} :: {id}", source.display(), scenario.title),
                );
            }
        }
    }

    if unsupported > 0 {
        return Err(CodegenError::UnsupportedBrowsers { count: unsupported }.into());
    }
    output::print_status("ok", Color::Green, "all browser targets are supported");
    Ok(())
}
