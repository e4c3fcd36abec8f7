//! Defines the command-line arguments and subcommands for the browsercase CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "browsercase",
    version,
    about = "Generates cross-browser NUnit test declarations from behavior scenarios."
)]
pub struct BrowsercaseArgs {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file (defaults to ./browsercase.yaml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by the commands that produce files.
#[derive(Debug, Clone, clap::Args)]
pub struct OutputOptions {
    /// Directory for generated files (overrides `output_dir`).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Namespace for generated classes (overrides `namespace`).
    #[arg(long)]
    pub namespace: Option<String>,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate test classes for a model file or every model in a directory.
    Generate {
        #[arg(required = true)]
        path: PathBuf,
        #[command(flatten)]
        options: OutputOptions,
    },
    /// Fail when generated files are missing or out of date, showing diffs.
    Check {
        #[arg(required = true)]
        path: PathBuf,
        #[command(flatten)]
        options: OutputOptions,
    },
    /// Print the generated C# for one model file.
    Print {
        #[arg(required = true)]
        file: PathBuf,
        /// Namespace for the generated class.
        #[arg(long)]
        namespace: Option<String>,
    },
    /// Split categories into plain tags and browser targets.
    Classify {
        #[arg(required = true)]
        categories: Vec<String>,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List every test case a model file expands to.
    Plan {
        #[arg(required = true)]
        file: PathBuf,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Check browser tags against a supported browser listing.
    Verify {
        #[arg(required = true)]
        path: PathBuf,
        /// JSON listing of supported browsers (overrides `supported_browsers`).
        #[arg(long)]
        supported: Option<PathBuf>,
    },
}
