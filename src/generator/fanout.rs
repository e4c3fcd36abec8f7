//! Browser fan-out.
//!
//! Every browser a method targets becomes its own test case. The browser id is
//! the leading argument, the display label is the category, and the test name
//! says which browser (and which example row) the case runs.
//!
//! Re-requesting a browser is idempotent: the metadata keeps the first value
//! stored under `browser:<id>`, and a declaration with the same positional
//! arguments as an existing one replaces it rather than duplicating it.

use tracing::{debug, trace};

use crate::browser::{browser_key, display_label};
use crate::generator::rows::{build_row_attributes, RowAttributes};
use crate::ir::{DeclarationOrigin, Literal, TestCaseDeclaration, TestMethod};

/// Supplies a test name instead of the synthesized `"<description> on <label>"`.
pub type NameFormatter<'a> = &'a dyn Fn() -> String;

/// Adds one test case for `browser_id` to `method`.
///
/// `extra` carries row arguments (and an optional ignore reason) that follow
/// the browser id.
pub fn for_each_browser(
    method: &mut TestMethod,
    browser_id: &str,
    name_formatter: Option<NameFormatter<'_>>,
    extra: Option<&RowAttributes>,
) {
    let key = browser_key(browser_id);
    if !method.metadata.insert_if_absent(key.as_str(), browser_id) {
        trace!(method = %method.identifier, %key, "browser already registered");
    }

    let label = display_label(browser_id);
    let name = match name_formatter {
        Some(format_name) => format_name(),
        None => format!("{} on {}", method.description_or_identifier(), label),
    };

    method.push_test_case(browser_declaration(browser_id, label, name, extra));
}

fn browser_declaration(
    browser_id: &str,
    label: String,
    name: String,
    extra: Option<&RowAttributes>,
) -> TestCaseDeclaration {
    let mut arguments = vec![Literal::str(browser_id)];
    let mut ignore_reason = None;
    let mut origin = DeclarationOrigin::Browser;

    if let Some(extra) = extra {
        arguments.extend(extra.arguments.iter().cloned());
        ignore_reason = extra.ignore_reason.clone();
        origin = DeclarationOrigin::BrowserRow;
    }

    TestCaseDeclaration {
        arguments,
        ignore_reason,
        category: Some(label),
        name: Some(name),
        origin,
    }
}

/// Name of a browser/row test case.
///
/// Each cell is quoted and the cells are joined with `" ,"`, matching the
/// names produced by earlier generator versions.
///
/// ```rust
/// use browsercase::generator::row_test_name;
/// let cells = vec!["London".to_string(), "Bath".to_string()];
/// assert_eq!(
///     row_test_name("Plan a journey", "chrome", &cells),
///     r#"Plan a journey on chrome with: "London" ,"Bath""#
/// );
/// ```
pub fn row_test_name(description: &str, label: &str, cells: &[String]) -> String {
    let joined: String = cells.iter().map(|cell| format!("\"{cell}\" ,")).collect();
    let joined = joined.trim_end_matches([' ', ',']);
    format!("{description} on {label} with: {joined}")
        .trim_end()
        .to_string()
}

/// Expands one row across `browsers` without touching any method.
///
/// Returns one declaration per distinct browser, in first-seen order. With no
/// browsers the row comes back as a single plain declaration.
pub fn expand_row_across_browsers<S: AsRef<str>>(
    description: &str,
    arguments: &[S],
    browsers: &[S],
    tags: &[S],
    ignored: bool,
) -> Vec<TestCaseDeclaration> {
    let attributes = build_row_attributes(arguments, tags, ignored);
    if browsers.is_empty() {
        return vec![attributes.into_declaration()];
    }

    let mut seen: Vec<&str> = Vec::new();
    let mut declarations = Vec::new();

    for browser in browsers {
        let browser: &str = browser.as_ref();
        if seen.contains(&browser) {
            continue;
        }
        seen.push(browser);
        let label = display_label(browser);
        let name = row_test_name(description, &label, &attributes.cells);
        declarations.push(browser_declaration(browser, label, name, Some(&attributes)));
    }
    declarations
}

/// Fans one row out across every browser recorded on `method`.
///
/// The browser-only declarations added from the scenario categories are
/// removed first. They are superseded by the per-row declarations.
pub fn fan_out_row(method: &mut TestMethod, attributes: &RowAttributes) {
    let browsers = method.metadata.browsers();
    let removed = method.remove_test_cases(DeclarationOrigin::Browser);
    let description = method.description_or_identifier().to_string();

    debug!(
        method = %method.identifier,
        browsers = browsers.len(),
        removed,
        "fanning example row across browsers"
    );

    for browser in &browsers {
        let name = row_test_name(&description, &display_label(browser), &attributes.cells);
        let format_name = || name.clone();
        for_each_browser(
            method,
            browser,
            Some(&format_name as NameFormatter<'_>),
            Some(attributes),
        );
    }
}
