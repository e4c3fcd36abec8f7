//! Feature-level driver.
//!
//! Walks a [`FeatureModel`] and calls the provider hooks in the same order a
//! unit-test generator host does: class, class categories, class initialize,
//! then per scenario the method, its categories and its example rows, and
//! finally the class finalization.

use tracing::{info, warn};

use crate::browser::classify;
use crate::errors::{CodegenError, Result};
use crate::generator::assembler::{NUnitBrowserProvider, BROWSER_PARAMETER};
use crate::generator::context::ClassGenerationContext;
use crate::generator::TestGeneratorProvider;
use crate::ir::{Parameter, Statement, TestClass, TestMethod};
use crate::model::{FeatureModel, ScenarioModel};
use crate::naming;

pub const EXAMPLE_TAGS_PARAMETER: &str = "exampleTags";

/// Generates one test class per feature.
#[derive(Debug, Clone)]
pub struct FeatureGenerator<P = NUnitBrowserProvider> {
    provider: P,
    namespace: String,
}

impl FeatureGenerator<NUnitBrowserProvider> {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self::with_provider(NUnitBrowserProvider::new(), namespace)
    }
}

impl<P: TestGeneratorProvider> FeatureGenerator<P> {
    pub fn with_provider(provider: P, namespace: impl Into<String>) -> Self {
        FeatureGenerator {
            provider,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn generate(&self, feature: &FeatureModel) -> Result<TestClass> {
        feature.validate()?;
        let class_name = naming::class_identifier(&feature.title);
        let mut ctx = ClassGenerationContext::new(self.namespace.as_str(), class_name);

        self.provider
            .set_test_class(&mut ctx, &feature.title, feature.description.as_deref());
        if !feature.tags.is_empty() {
            self.provider.set_test_class_categories(&mut ctx, &feature.tags);
        }
        self.provider.set_test_class_initialize_method(&mut ctx);

        for scenario in &feature.scenarios {
            let method = self.generate_method(&mut ctx, scenario)?;
            ctx.class.test_methods.push(method);
        }

        self.provider.finalize_test_class(&mut ctx);

        let class = ctx.into_class();
        info!(
            class = %class.name,
            methods = class.test_methods.len(),
            test_cases = class.total_test_cases(),
            "generated test class"
        );
        Ok(class)
    }

    fn generate_method(
        &self,
        ctx: &mut ClassGenerationContext,
        scenario: &ScenarioModel,
    ) -> Result<TestMethod> {
        let identifier = naming::method_identifier(&scenario.title);
        if ctx.class.test_method(&identifier).is_some() {
            return Err(CodegenError::invalid_model_with_help(
                format!(
                    "scenario '{}' produces the method name '{identifier}', which is already taken",
                    scenario.title
                ),
                "Rename one of the scenarios so their titles differ in letters or digits.",
            ));
        }

        let mut method = TestMethod::new(identifier);
        self.provider.set_test_method(ctx, &mut method, &scenario.title);

        if let Some(table) = &scenario.examples {
            let columns: Vec<String> = if table.columns.is_empty() {
                let width = table.rows.first().map_or(0, |row| row.cells.len());
                (0..width).map(|index| format!("arg{index}")).collect()
            } else {
                table.columns.clone()
            };
            // Row parameters must not shadow the browser or tags parameters.
            let names = naming::parameter_identifiers(
                &columns,
                &[BROWSER_PARAMETER, EXAMPLE_TAGS_PARAMETER],
            );
            method
                .parameters
                .extend(names.into_iter().map(|name| Parameter::new("string", name)));
            method
                .parameters
                .push(Parameter::new("string[]", EXAMPLE_TAGS_PARAMETER));

            if table.rows.is_empty() {
                warn!(scenario = %scenario.title, "example table has no rows");
            }
        }

        method.statements.push(Statement::CreateScenarioInfo {
            title: scenario.title.clone(),
            tags: classify(&scenario.tags).plain,
        });
        method.statements.push(Statement::InitializeScenario);

        self.provider
            .set_test_method_categories(ctx, &mut method, &scenario.tags);

        for row in scenario.rows() {
            self.provider
                .set_row(ctx, &mut method, &row.cells, &row.tags, row.ignored);
        }

        Ok(method)
    }
}
