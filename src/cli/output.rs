//! Handles all user-facing output for the CLI.
//!
//! This module is responsible for colorizing status lines, printing
//! generation plans and classification results, and rendering diffs for
//! stale files. Color is only used when stdout is a terminal.

use std::io::{IsTerminal, Write};

use difference::{Changeset, Difference};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::browser::{display_label, ClassifiedCategories};
use crate::ir::{Literal, TestClass};
use crate::render::csharp::test_case_attribute;

// ============================================================================
// STREAM SETUP
// ============================================================================

fn stdout() -> StandardStream {
    let choice = if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

fn colored(stream: &mut StandardStream, color: Color, bold: bool, text: &str) {
    let _ = stream.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold));
    let _ = write!(stream, "{text}");
    let _ = stream.reset();
}

// ============================================================================
// CORE OUTPUT FUNCTIONS
// ============================================================================

/// Prints `<status> <message>` with a colored status word.
pub fn print_status(status: &str, color: Color, message: &str) {
    let mut out = stdout();
    colored(&mut out, color, true, &format!("{status:>10}"));
    let _ = writeln!(out, " {message}");
}

/// Prints a line diff between the file on disk and the regenerated contents.
pub fn print_diff(existing: &str, regenerated: &str) {
    let mut out = stdout();
    let changeset = Changeset::new(existing, regenerated, "\n");
    for diff in &changeset.diffs {
        match diff {
            Difference::Same(text) => {
                for line in text.lines() {
                    let _ = writeln!(out, " {line}");
                }
            }
            Difference::Add(text) => {
                for line in text.lines() {
                    colored(&mut out, Color::Green, false, &format!("+{line}"));
                    let _ = writeln!(out);
                }
            }
            Difference::Rem(text) => {
                for line in text.lines() {
                    colored(&mut out, Color::Red, false, &format!("-{line}"));
                    let _ = writeln!(out);
                }
            }
        }
    }
}

pub fn print_classification(classified: &ClassifiedCategories) {
    let mut out = stdout();
    colored(&mut out, Color::Cyan, true, "plain:");
    let _ = writeln!(out);
    for category in &classified.plain {
        let _ = writeln!(out, "  {category}");
    }
    colored(&mut out, Color::Cyan, true, "browsers:");
    let _ = writeln!(out);
    for id in &classified.browser_ids {
        let _ = writeln!(out, "  {id} => {}", display_label(id));
    }
}

fn argument_summary(value: &Literal) -> String {
    match value {
        Literal::Null => "null".to_string(),
        Literal::Str(value) => value.clone(),
        Literal::StrArray(values) => format!("[{}]", values.join(", ")),
    }
}

/// Prints every test case per method; methods without cases run once as plain tests.
pub fn print_plan(class: &TestClass) {
    let mut out = stdout();
    colored(&mut out, Color::Yellow, true, &class.name);
    let _ = writeln!(out, " ({} test case(s))", class.total_test_cases());

    for method in &class.test_methods {
        let _ = writeln!(out, "  {}", method.identifier);
        if method.test_cases.is_empty() {
            let _ = writeln!(out, "    - {}", method.description_or_identifier());
            continue;
        }
        for declaration in &method.test_cases {
            let name = declaration
                .name
                .clone()
                .unwrap_or_else(|| method.description_or_identifier().to_string());
            let arguments: Vec<String> =
                declaration.arguments.iter().map(argument_summary).collect();
            let _ = write!(out, "    - {name} [{}]", arguments.join(", "));
            if declaration.is_ignored() {
                colored(&mut out, Color::Magenta, false, " (ignored)");
            }
            let _ = writeln!(out);
        }
    }
}

/// Prints the rendered attribute for each declaration; used by `plan -v`.
pub fn print_attributes(class: &TestClass) {
    let mut out = stdout();
    for declaration in class.test_methods.iter().flat_map(|m| m.test_cases.iter()) {
        let _ = writeln!(out, "{}", test_case_attribute(declaration));
    }
}
