//! browsercase: cross-browser test-declaration generation.
//!
//! A feature model (scenarios with categories and example rows) is turned
//! into an NUnit test class. Categories of the form `browser:<id>` fan every
//! scenario, and every example row, out into one test case per browser.
//!
//! ```rust
//! use browsercase::generator::FeatureGenerator;
//! use browsercase::model::{ExampleRow, ExampleTable, FeatureModel, ScenarioModel};
//!
//! let feature = FeatureModel {
//!     title: "Journey planner".into(),
//!     description: None,
//!     tags: vec![],
//!     scenarios: vec![ScenarioModel::new("Plan a journey")
//!         .with_tags(["smoke", "browser:chrome", "browser:firefox"])
//!         .with_examples(ExampleTable {
//!             columns: vec!["from".into(), "to".into()],
//!             rows: vec![ExampleRow::new(["London", "Bath"])],
//!         })],
//! };
//! let class = FeatureGenerator::new("Acme.Specs").generate(&feature).unwrap();
//! assert_eq!(class.test_methods[0].test_cases.len(), 2);
//! ```

pub use crate::errors::{CodegenError, Result};

pub mod browser;
pub mod cli;
pub mod config;
pub mod errors;
pub mod generator;
pub mod ir;
pub mod logging;
pub mod model;
pub mod naming;
pub mod pipeline;
pub mod render;
