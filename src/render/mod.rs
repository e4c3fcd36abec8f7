//! Rendering of the generated test class into source text.

pub mod csharp;
pub mod writer;

pub use csharp::{csharp_string, CSharpRenderer};
pub use writer::CodeWriter;

use crate::ir::TestClass;

pub const GENERATOR_NAME: &str = env!("CARGO_PKG_NAME");
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Provenance written at the top of every generated file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileHeader {
    /// Display name of the model file the class was generated from.
    pub source: Option<String>,
    /// Fingerprint of the model file contents.
    pub fingerprint: Option<String>,
}

/// Turns a [`TestClass`] into source code for one target framework.
pub trait CodeRenderer {
    fn render(&self, class: &TestClass, header: &FileHeader) -> String;
}
