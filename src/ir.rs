//! Intermediate representation of a generated test class.
//!
//! The generator never manipulates source text. It builds these value types
//! and the renderer turns them into framework syntax as the final step.

use serde::Serialize;

use crate::browser::tags::is_browser_key;

// ============================================================================
// LITERALS AND DECLARATIONS
// ============================================================================

/// A literal expression that can appear as a test-case argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    /// The null marker. Used for an empty tag list.
    Null,
    Str(String),
    StrArray(Vec<String>),
}

impl Literal {
    pub fn str(value: impl Into<String>) -> Self {
        Literal::Str(value.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::Str(value) => Some(value),
            _ => None,
        }
    }
}

/// Which generator path produced a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationOrigin {
    /// A plain example row with no browser.
    Row,
    /// One browser from the scenario categories, without row data.
    Browser,
    /// One browser combined with one example row.
    BrowserRow,
}

/// One parameterized invocation of a test method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCaseDeclaration {
    pub arguments: Vec<Literal>,
    pub ignore_reason: Option<String>,
    pub category: Option<String>,
    pub name: Option<String>,
    pub origin: DeclarationOrigin,
}

impl TestCaseDeclaration {
    pub fn is_ignored(&self) -> bool {
        self.ignore_reason.is_some()
    }
}

// ============================================================================
// METHOD MEMBERS
// ============================================================================

/// Attribute markers without arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Marker {
    TestFixture,
    TestFixtureSetUp,
    Test,
    TearDown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub ty: String,
    pub name: String,
    pub default: Option<Literal>,
}

impl Parameter {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Parameter {
            ty: ty.into(),
            name: name.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: Literal) -> Self {
        self.default = Some(default);
        self
    }
}

/// Statements the generator knows how to emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    /// Clears the current browser configuration field.
    ResetBrowserConfiguration,
    /// Copies a method parameter into the current browser configuration field.
    AssignBrowserConfiguration { parameter: String },
    /// Calls the helper that creates and registers the browser session.
    RegisterBrowserHost,
    /// Builds the remote browser configurator from the configuration provider.
    ConfigureRemoteBrowser,
    /// Body of the session helper: registers services and creates the session.
    CreateBrowserHost,
    /// Disposes the session handle, guarded by a null check.
    DisposeBrowserHost,
    /// Declares the scenario info for the running scenario.
    CreateScenarioInfo { title: String, tags: Vec<String> },
    /// Calls the scenario-initialize hook with the scenario info.
    InitializeScenario,
}

/// Insertion-ordered per-method metadata. The first value stored under a key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MethodMetadata {
    entries: Vec<(String, String)>,
}

impl MethodMetadata {
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Stores `value` unless `key` is already present. Returns whether it was stored.
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.contains_key(&key) {
            return false;
        }
        self.entries.push((key, value.into()));
        true
    }

    /// Browser identifiers recorded under browser keys, in registration order.
    pub fn browsers(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(k, _)| is_browser_key(k))
            .map(|(_, v)| v.clone())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// METHODS AND CLASSES
// ============================================================================

/// A generated test method and every test case declared on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestMethod {
    pub identifier: String,
    pub description: Option<String>,
    pub markers: Vec<Marker>,
    pub categories: Vec<String>,
    pub parameters: Vec<Parameter>,
    pub statements: Vec<Statement>,
    pub test_cases: Vec<TestCaseDeclaration>,
    #[serde(skip)]
    pub metadata: MethodMetadata,
}

impl TestMethod {
    pub fn new(identifier: impl Into<String>) -> Self {
        TestMethod {
            identifier: identifier.into(),
            description: None,
            markers: Vec::new(),
            categories: Vec::new(),
            parameters: Vec::new(),
            statements: Vec::new(),
            test_cases: Vec::new(),
            metadata: MethodMetadata::default(),
        }
    }

    /// The description if one was set, otherwise the identifier.
    pub fn description_or_identifier(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.identifier)
    }

    /// Appends a declaration.
    ///
    /// Plain example rows are always appended. A browser declaration with the
    /// same positional arguments as an existing browser declaration replaces
    /// it in place.
    pub fn push_test_case(&mut self, declaration: TestCaseDeclaration) {
        if declaration.origin == DeclarationOrigin::Row {
            self.test_cases.push(declaration);
            return;
        }
        match self.test_cases.iter_mut().find(|existing| {
            existing.origin != DeclarationOrigin::Row && existing.arguments == declaration.arguments
        }) {
            Some(existing) => *existing = declaration,
            None => self.test_cases.push(declaration),
        }
    }

    /// Removes every declaration of the given origin and returns how many were removed.
    pub fn remove_test_cases(&mut self, origin: DeclarationOrigin) -> usize {
        let before = self.test_cases.len();
        self.test_cases.retain(|declaration| declaration.origin != origin);
        before - self.test_cases.len()
    }

    pub fn has_marker(&self, marker: Marker) -> bool {
        self.markers.contains(&marker)
    }

    pub fn add_marker(&mut self, marker: Marker) {
        if !self.has_marker(marker) {
            self.markers.push(marker);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub ty: String,
    pub name: String,
}

impl Field {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Field {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

/// A non-test method on the class: lifecycle hooks and helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberMethod {
    pub name: String,
    pub markers: Vec<Marker>,
    pub parameters: Vec<Parameter>,
    pub statements: Vec<Statement>,
}

impl MemberMethod {
    pub fn new(name: impl Into<String>) -> Self {
        MemberMethod {
            name: name.into(),
            markers: Vec::new(),
            parameters: Vec::new(),
            statements: Vec::new(),
        }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn count(&self, statement: &Statement) -> usize {
        self.statements.iter().filter(|s| *s == statement).count()
    }
}

/// The generated test class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestClass {
    pub namespace: String,
    pub name: String,
    pub imports: Vec<String>,
    pub markers: Vec<Marker>,
    pub description: Option<String>,
    pub categories: Vec<String>,
    pub fields: Vec<Field>,
    pub helpers: Vec<MemberMethod>,
    pub class_initialize: MemberMethod,
    pub scenario_initialize: MemberMethod,
    pub test_cleanup: MemberMethod,
    pub test_methods: Vec<TestMethod>,
}

pub const CLASS_INITIALIZE_METHOD: &str = "FeatureSetup";
pub const SCENARIO_INITIALIZE_METHOD: &str = "ScenarioInitialize";
pub const TEST_CLEANUP_METHOD: &str = "ScenarioTearDown";

impl TestClass {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        TestClass {
            namespace: namespace.into(),
            name: name.into(),
            imports: Vec::new(),
            markers: Vec::new(),
            description: None,
            categories: Vec::new(),
            fields: Vec::new(),
            helpers: Vec::new(),
            class_initialize: MemberMethod::new(CLASS_INITIALIZE_METHOD),
            scenario_initialize: MemberMethod::new(SCENARIO_INITIALIZE_METHOD).with_parameter(
                Parameter::new("TechTalk.SpecFlow.ScenarioInfo", "scenarioInfo"),
            ),
            test_cleanup: MemberMethod::new(TEST_CLEANUP_METHOD).with_marker(Marker::TearDown),
            test_methods: Vec::new(),
        }
    }

    pub fn test_method(&self, identifier: &str) -> Option<&TestMethod> {
        self.test_methods
            .iter()
            .find(|method| method.identifier == identifier)
    }

    pub fn helper(&self, name: &str) -> Option<&MemberMethod> {
        self.helpers.iter().find(|helper| helper.name == name)
    }

    pub fn total_test_cases(&self) -> usize {
        self.test_methods
            .iter()
            .map(|method| method.test_cases.len().max(1))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declaration(args: &[&str], name: &str, origin: DeclarationOrigin) -> TestCaseDeclaration {
        TestCaseDeclaration {
            arguments: args.iter().map(|a| Literal::str(*a)).collect(),
            ignore_reason: None,
            category: None,
            name: Some(name.to_string()),
            origin,
        }
    }

    #[test]
    fn identical_arguments_replace_in_place() {
        let mut method = TestMethod::new("Plan");
        let browser_row = DeclarationOrigin::BrowserRow;
        method.push_test_case(declaration(&["chrome", "a"], "first", browser_row));
        method.push_test_case(declaration(&["chrome", "b"], "second", browser_row));
        method.push_test_case(declaration(&["chrome", "a"], "again", browser_row));

        assert_eq!(method.test_cases.len(), 2);
        assert_eq!(method.test_cases[0].name.as_deref(), Some("again"));
        assert_eq!(method.test_cases[1].name.as_deref(), Some("second"));
    }

    #[test]
    fn plain_rows_are_always_appended() {
        let mut method = TestMethod::new("Plan");
        method.push_test_case(declaration(&["a"], "first", DeclarationOrigin::Row));
        method.push_test_case(declaration(&["a"], "second", DeclarationOrigin::Row));
        // A browser declaration never replaces a plain row.
        method.push_test_case(declaration(&["a"], "browser", DeclarationOrigin::Browser));

        let names: Vec<_> = method.test_cases.iter().filter_map(|d| d.name.as_deref()).collect();
        assert_eq!(names, vec!["first", "second", "browser"]);
    }

    #[test]
    fn metadata_keeps_first_value() {
        let mut metadata = MethodMetadata::default();
        assert!(metadata.insert_if_absent("browser:chrome", "chromium"));
        assert!(!metadata.insert_if_absent("browser:chrome", "chrome"));
        assert!(metadata.insert_if_absent("owner", "qa"));

        assert_eq!(metadata.get("browser:chrome"), Some("chromium"));
        assert_eq!(metadata.browsers(), vec!["chromium"]);
        assert_eq!(metadata.len(), 2);
    }
}
