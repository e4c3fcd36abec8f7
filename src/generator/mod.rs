//! Test-declaration generation.
//!
//! [`TestGeneratorProvider`] is the seam between the feature walker and the
//! framework-specific behavior. [`NUnitBrowserProvider`] is the provider that
//! adds remote-browser fan-out; [`FeatureGenerator`] drives any provider over
//! a feature model.

pub mod assembler;
pub mod context;
pub mod driver;
pub mod fanout;
pub mod rows;

pub use assembler::NUnitBrowserProvider;
pub use context::ClassGenerationContext;
pub use driver::FeatureGenerator;
pub use fanout::{expand_row_across_browsers, fan_out_row, for_each_browser, row_test_name, NameFormatter};
pub use rows::{build_row_attributes, set_row, RowAttributes, IGNORED_SCENARIO_REASON, IGNORE_ARGUMENT};

use crate::ir::TestMethod;

/// Hooks called while generating one test class.
///
/// Implementations keep no state of their own. Anything that must persist
/// across hook calls belongs on the [`ClassGenerationContext`].
pub trait TestGeneratorProvider {
    fn set_test_class(
        &self,
        ctx: &mut ClassGenerationContext,
        feature_title: &str,
        feature_description: Option<&str>,
    );

    fn set_test_class_categories(&self, ctx: &mut ClassGenerationContext, categories: &[String]);

    fn set_test_class_initialize_method(&self, ctx: &mut ClassGenerationContext);

    fn set_test_method(
        &self,
        ctx: &mut ClassGenerationContext,
        method: &mut TestMethod,
        friendly_test_name: &str,
    );

    fn set_test_method_categories(
        &self,
        ctx: &mut ClassGenerationContext,
        method: &mut TestMethod,
        categories: &[String],
    );

    fn set_row(
        &self,
        ctx: &mut ClassGenerationContext,
        method: &mut TestMethod,
        arguments: &[String],
        tags: &[String],
        is_ignored: bool,
    );

    fn finalize_test_class(&self, ctx: &mut ClassGenerationContext);
}
