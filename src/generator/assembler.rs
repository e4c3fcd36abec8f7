//! NUnit provider with remote-browser support.
//!
//! On top of the plain NUnit markers this provider adds:
//!
//! - the namespaces the browser session types live in,
//! - three private fields (`_host`, `_currentBrowserConfiguration`, `_remoteBrowserConfigurator`),
//! - an `InitialiseAndRegisterBrowserHost` helper and a one-time call to it
//!   from the scenario-initialize hook,
//! - a fixture setup that builds the remote browser configurator,
//! - a teardown that disposes the session.
//!
//! Methods that target browsers gain a leading `browserConfiguration`
//! parameter which is copied into `_currentBrowserConfiguration` before the
//! scenario initializes.

use tracing::debug;

use crate::browser::classify;
use crate::generator::context::ClassGenerationContext;
use crate::generator::fanout::for_each_browser;
use crate::generator::rows;
use crate::generator::TestGeneratorProvider;
use crate::ir::{Field, Literal, Marker, MemberMethod, Parameter, Statement, TestMethod};

/// Namespaces required by the generated browser plumbing.
pub const REQUIRED_IMPORTS: [&str; 4] = [
    "TestStack.Seleno.BrowserStack.Core.Configuration",
    "TestStack.Seleno.BrowserStack.Core.Services.TestSession",
    "TestStack.Seleno.BrowserStack.Core.Capabilities",
    "TestStack.Seleno.BrowserStack.Core.Services.Client",
];

pub const HOST_FIELD: &str = "_host";
pub const CURRENT_BROWSER_FIELD: &str = "_currentBrowserConfiguration";
pub const CONFIGURATOR_FIELD: &str = "_remoteBrowserConfigurator";

/// `(type, name)` of every private field the provider adds.
pub const PRIVATE_FIELDS: [(&str, &str); 3] = [
    ("IBrowserHost", HOST_FIELD),
    ("System.String", CURRENT_BROWSER_FIELD),
    ("RemoteBrowserConfigurator", CONFIGURATOR_FIELD),
];

pub const REGISTER_HOST_METHOD: &str = "InitialiseAndRegisterBrowserHost";
pub const BROWSER_PARAMETER: &str = "browserConfiguration";

/// Stateless provider; all per-class state lives in [`ClassGenerationContext`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NUnitBrowserProvider;

impl NUnitBrowserProvider {
    pub fn new() -> Self {
        NUnitBrowserProvider
    }

    fn add_imports(ctx: &mut ClassGenerationContext) {
        for import in REQUIRED_IMPORTS {
            if !ctx.class.imports.iter().any(|existing| existing == import) {
                ctx.class.imports.push(import.to_string());
            }
        }
    }

    fn add_private_fields(ctx: &mut ClassGenerationContext) {
        for (ty, name) in PRIVATE_FIELDS {
            if !ctx.class.fields.iter().any(|field| field.name == name) {
                ctx.class.fields.push(Field::new(ty, name));
            }
        }
    }

    fn add_register_host_method(ctx: &mut ClassGenerationContext) {
        if ctx.class.helper(REGISTER_HOST_METHOD).is_some() {
            return;
        }
        let mut helper = MemberMethod::new(REGISTER_HOST_METHOD).with_parameter(
            Parameter::new("System.String", BROWSER_PARAMETER).with_default(Literal::Null),
        );
        helper.statements.push(Statement::CreateBrowserHost);
        ctx.class.helpers.push(helper);
    }
}

fn push_once(statements: &mut Vec<Statement>, statement: Statement) {
    if !statements.contains(&statement) {
        statements.push(statement);
    }
}

impl TestGeneratorProvider for NUnitBrowserProvider {
    fn set_test_class(
        &self,
        ctx: &mut ClassGenerationContext,
        feature_title: &str,
        _feature_description: Option<&str>,
    ) {
        if !ctx.class.markers.contains(&Marker::TestFixture) {
            ctx.class.markers.push(Marker::TestFixture);
        }
        ctx.class.description = Some(feature_title.to_string());

        Self::add_imports(ctx);
        Self::add_private_fields(ctx);
        Self::add_register_host_method(ctx);
    }

    fn set_test_class_categories(&self, ctx: &mut ClassGenerationContext, categories: &[String]) {
        ctx.class.categories.extend(categories.iter().cloned());
    }

    fn set_test_class_initialize_method(&self, ctx: &mut ClassGenerationContext) {
        let initialize = &mut ctx.class.class_initialize;
        if !initialize.markers.contains(&Marker::TestFixtureSetUp) {
            initialize.markers.push(Marker::TestFixtureSetUp);
        }
        push_once(&mut initialize.statements, Statement::ConfigureRemoteBrowser);
    }

    fn set_test_method(
        &self,
        ctx: &mut ClassGenerationContext,
        method: &mut TestMethod,
        friendly_test_name: &str,
    ) {
        method.add_marker(Marker::Test);
        method.description = Some(friendly_test_name.to_string());

        if ctx.claim_scenario_setup() {
            debug!(class = %ctx.class.name, "registering browser host in scenario initialize");
            ctx.class
                .scenario_initialize
                .statements
                .push(Statement::RegisterBrowserHost);
        }

        if !method.statements.contains(&Statement::ResetBrowserConfiguration) {
            method.statements.insert(0, Statement::ResetBrowserConfiguration);
        }
    }

    fn set_test_method_categories(
        &self,
        _ctx: &mut ClassGenerationContext,
        method: &mut TestMethod,
        categories: &[String],
    ) {
        let classified = classify(categories);
        method.categories.extend(classified.plain.iter().cloned());

        for browser in &classified.browser_ids {
            for_each_browser(method, browser, None, None);
        }

        if !classified.has_browsers() {
            return;
        }

        debug!(
            method = %method.identifier,
            browsers = classified.browser_ids.len(),
            "method targets browsers"
        );

        if !method.parameters.iter().any(|p| p.name == BROWSER_PARAMETER) {
            method
                .parameters
                .insert(0, Parameter::new("string", BROWSER_PARAMETER));
        }

        method.statements.retain(|statement| {
            !matches!(
                statement,
                Statement::ResetBrowserConfiguration | Statement::AssignBrowserConfiguration { .. }
            )
        });
        method.statements.insert(
            0,
            Statement::AssignBrowserConfiguration {
                parameter: BROWSER_PARAMETER.to_string(),
            },
        );
    }

    fn set_row(
        &self,
        _ctx: &mut ClassGenerationContext,
        method: &mut TestMethod,
        arguments: &[String],
        tags: &[String],
        is_ignored: bool,
    ) {
        rows::set_row(method, arguments, tags, is_ignored);
    }

    fn finalize_test_class(&self, ctx: &mut ClassGenerationContext) {
        push_once(
            &mut ctx.class.test_cleanup.statements,
            Statement::DisposeBrowserHost,
        );
    }
}
