//! Shared builders and fixtures for the integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use browsercase::generator::{ClassGenerationContext, NUnitBrowserProvider, TestGeneratorProvider};
use browsercase::ir::TestMethod;
use browsercase::model::{ExampleRow, ExampleTable, FeatureModel, ScenarioModel};

pub const JOURNEYS_FIXTURE: &str = "journeys.yaml";
pub const BROWSERS_FIXTURE: &str = "browsers.json";

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn read_fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).expect("fixture should be readable")
}

/// Copies a fixture into `dir` and returns the new path.
pub fn copy_fixture(name: &str, dir: &Path) -> PathBuf {
    let target = dir.join(name);
    fs::copy(fixture_path(name), &target).expect("fixture should copy");
    target
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn context() -> ClassGenerationContext {
    ClassGenerationContext::new("Acme.Specs", "JourneyPlannerFeature")
}

/// A method that went through `set_test_method` and `set_test_method_categories`.
pub fn prepared_method(
    ctx: &mut ClassGenerationContext,
    identifier: &str,
    description: &str,
    categories: &[&str],
) -> TestMethod {
    let provider = NUnitBrowserProvider::new();
    let mut method = TestMethod::new(identifier);
    provider.set_test_method(ctx, &mut method, description);
    provider.set_test_method_categories(ctx, &mut method, &strings(categories));
    method
}

/// The feature described by `tests/fixtures/journeys.yaml`, built in code.
pub fn journey_feature() -> FeatureModel {
    FeatureModel {
        title: "Journey planner".into(),
        description: Some("Plans rail journeys across the network.".into()),
        tags: vec!["web".into()],
        scenarios: vec![
            ScenarioModel::new("Search the timetable").with_tags(["smoke"]),
            ScenarioModel::new("Open the home page").with_tags([
                "smoke",
                "browser:chrome,48.0,Windows,10",
                "browser:iPhone,iPhone 6S Plus",
            ]),
            ScenarioModel::new("Plan a journey")
                .with_tags(["browser:chrome", "browser:firefox"])
                .with_examples(ExampleTable {
                    columns: strings(&["from", "via", "to"]),
                    rows: vec![
                        ExampleRow::new(["London", "Bath", "Hereford"]),
                        ExampleRow::new(["Leeds", "York", "Hull"])
                            .tagged(["slow"])
                            .ignored(),
                    ],
                }),
        ],
    }
}
