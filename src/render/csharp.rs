//! NUnit / C# renderer.
//!
//! Output is deterministic for a given class and header: no timestamps and no
//! map iteration, so regenerated files can be compared byte for byte.

use crate::generator::IGNORE_ARGUMENT;
use crate::ir::{
    Literal, Marker, MemberMethod, Parameter, Statement, TestCaseDeclaration, TestClass,
    TestMethod,
};
use crate::render::{CodeRenderer, CodeWriter, FileHeader, GENERATOR_NAME, GENERATOR_VERSION};

const NUNIT: &str = "NUnit.Framework";

const CONFIGURE_REMOTE_BROWSER: &str = r#"var configurationProvider = new ConfigurationProvider();
_remoteBrowserConfigurator = new RemoteBrowserConfigurator(new BrowserHostFactory(configurationProvider),
    new BrowserConfigurationParser(new BrowserStackService(configurationProvider,
        new HttpClientFactory(configurationProvider))),
    new CapabilitiesBuilder(configurationProvider));"#;

const CREATE_BROWSER_HOST: &str = r#"ScenarioContext.Current.ScenarioContainer.RegisterTypeAs<ConfigurationProvider, IConfigurationProvider>();
ScenarioContext.Current.ScenarioContainer.RegisterTypeAs<BrowserStackService, IBrowserStackService>();
ScenarioContext.Current.ScenarioContainer.RegisterTypeAs<HttpClientFactory, IHttpClientFactory>();

var scenarioTitle = ScenarioContext.Current.ScenarioInfo.Title;
var featureTitle = FeatureContext.Current.FeatureInfo.Title;

var testSpecification = new TestSpecification(scenarioTitle, featureTitle);
_host = _remoteBrowserConfigurator.CreateAndConfigure(testSpecification, browserConfiguration);

ScenarioContext.Current.ScenarioContainer.RegisterInstanceAs(_host);"#;

const DISPOSE_BROWSER_HOST: &str = r#"if (_host != null)
{
    _host.Dispose();
    _host = null;
}"#;

/// Escapes `value` as a C# regular string literal, including the quotes.
///
/// ```rust
/// use browsercase::render::csharp_string;
/// assert_eq!(csharp_string(r#"say "hi"\now"#), r#""say \"hi\"\\now""#);
/// ```
pub fn csharp_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn string_array(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|v| csharp_string(v)).collect();
    format!("new string[] {{{}}}", items.join(", "))
}

fn literal(value: &Literal) -> String {
    match value {
        Literal::Null => "null".to_string(),
        Literal::Str(value) => csharp_string(value),
        Literal::StrArray(values) => string_array(values),
    }
}

fn marker_attribute(marker: Marker) -> String {
    let name = match marker {
        Marker::TestFixture => "TestFixtureAttribute",
        Marker::TestFixtureSetUp => "TestFixtureSetUpAttribute",
        Marker::Test => "TestAttribute",
        Marker::TearDown => "TearDownAttribute",
    };
    format!("[{NUNIT}.{name}()]")
}

fn valued_attribute(name: &str, value: &str) -> String {
    format!("[{NUNIT}.{name}({})]", csharp_string(value))
}

fn parameter(parameter: &Parameter) -> String {
    match &parameter.default {
        Some(default) => format!("{} {} = {}", parameter.ty, parameter.name, literal(default)),
        None => format!("{} {}", parameter.ty, parameter.name),
    }
}

fn parameter_list(parameters: &[Parameter]) -> String {
    parameters.iter().map(parameter).collect::<Vec<_>>().join(", ")
}

/// Renders one `TestCaseAttribute` line.
pub fn test_case_attribute(declaration: &TestCaseDeclaration) -> String {
    let mut arguments: Vec<String> = declaration.arguments.iter().map(literal).collect();
    if let Some(reason) = &declaration.ignore_reason {
        arguments.push(format!("{IGNORE_ARGUMENT}={}", csharp_string(reason)));
    }
    if let Some(category) = &declaration.category {
        arguments.push(format!("Category={}", csharp_string(category)));
    }
    if let Some(name) = &declaration.name {
        arguments.push(format!("TestName={}", csharp_string(name)));
    }
    format!("[{NUNIT}.TestCaseAttribute({})]", arguments.join(", "))
}

fn statement(writer: &mut CodeWriter, statement: &Statement) {
    match statement {
        Statement::ResetBrowserConfiguration => writer.line("_currentBrowserConfiguration = null;"),
        Statement::AssignBrowserConfiguration { parameter } => {
            writer.line(format!("_currentBrowserConfiguration = {parameter};"))
        }
        Statement::RegisterBrowserHost => {
            writer.line("InitialiseAndRegisterBrowserHost(_currentBrowserConfiguration);")
        }
        Statement::ConfigureRemoteBrowser => writer.lines(CONFIGURE_REMOTE_BROWSER),
        Statement::CreateBrowserHost => writer.lines(CREATE_BROWSER_HOST),
        Statement::DisposeBrowserHost => writer.lines(DISPOSE_BROWSER_HOST),
        Statement::CreateScenarioInfo { title, tags } => {
            let tags = if tags.is_empty() {
                "((string[])(null))".to_string()
            } else {
                string_array(tags)
            };
            writer.line(format!(
                "TechTalk.SpecFlow.ScenarioInfo scenarioInfo = new TechTalk.SpecFlow.ScenarioInfo({}, {tags});",
                csharp_string(title)
            ));
        }
        Statement::InitializeScenario => writer.line("this.ScenarioInitialize(scenarioInfo);"),
    }
}

/// Renders test classes as NUnit C# source.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpRenderer;

impl CSharpRenderer {
    fn header(writer: &mut CodeWriter, header: &FileHeader) {
        writer.line("// ------------------------------------------------------------------------------");
        writer.line("//  <auto-generated>");
        writer.line(format!(
            "//      This code was generated by {GENERATOR_NAME} {GENERATOR_VERSION}."
        ));
        if let Some(source) = &header.source {
            writer.line(format!("//      Source: {source}"));
        }
        if let Some(fingerprint) = &header.fingerprint {
            writer.line(format!("//      Fingerprint: {fingerprint}"));
        }
        writer.line("//");
        writer.line("//      Changes to this file may cause incorrect behavior and will be lost if");
        writer.line("//      the code is regenerated.");
        writer.line("//  </auto-generated>");
        writer.line("// ------------------------------------------------------------------------------");
    }

    fn member_method(writer: &mut CodeWriter, method: &MemberMethod) {
        for marker in &method.markers {
            writer.line(marker_attribute(*marker));
        }
        writer.line(format!(
            "public virtual void {}({})",
            method.name,
            parameter_list(&method.parameters)
        ));
        writer.open();
        for s in &method.statements {
            statement(writer, s);
        }
        writer.close();
    }

    fn test_method(writer: &mut CodeWriter, method: &TestMethod) {
        for marker in &method.markers {
            writer.line(marker_attribute(*marker));
        }
        if let Some(description) = &method.description {
            writer.line(valued_attribute("DescriptionAttribute", description));
        }
        for category in &method.categories {
            writer.line(valued_attribute("CategoryAttribute", category));
        }
        for declaration in &method.test_cases {
            writer.line(test_case_attribute(declaration));
        }
        writer.line(format!(
            "public virtual void {}({})",
            method.identifier,
            parameter_list(&method.parameters)
        ));
        writer.open();
        for s in &method.statements {
            statement(writer, s);
        }
        writer.close();
    }
}

impl CodeRenderer for CSharpRenderer {
    fn render(&self, class: &TestClass, header: &FileHeader) -> String {
        let mut writer = CodeWriter::new();
        Self::header(&mut writer, header);
        writer.line("#region Designer generated code");
        writer.line("#pragma warning disable");
        writer.line(format!("namespace {}", class.namespace));
        writer.open();
        writer.line("using TechTalk.SpecFlow;");
        for import in &class.imports {
            writer.line(format!("using {import};"));
        }
        writer.blank();

        for marker in &class.markers {
            writer.line(marker_attribute(*marker));
        }
        if let Some(description) = &class.description {
            writer.line(valued_attribute("DescriptionAttribute", description));
        }
        for category in &class.categories {
            writer.line(valued_attribute("CategoryAttribute", category));
        }
        writer.line(format!("public partial class {}", class.name));
        writer.open();

        for field in &class.fields {
            writer.line(format!("private {} {};", field.ty, field.name));
        }

        let lifecycle = [
            &class.class_initialize,
            &class.scenario_initialize,
            &class.test_cleanup,
        ];
        for method in lifecycle.into_iter().chain(class.helpers.iter()) {
            writer.blank();
            Self::member_method(&mut writer, method);
        }
        for method in &class.test_methods {
            writer.blank();
            Self::test_method(&mut writer, method);
        }

        writer.close();
        writer.close();
        writer.line("#pragma warning restore");
        writer.line("#endregion");
        writer.finish()
    }
}
