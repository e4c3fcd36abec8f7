//! Example-row expansion.
//!
//! A row becomes one positional literal per cell, then a trailing tags
//! argument, then an optional ignore reason. An empty tag list is emitted as
//! the null marker: an empty array in that position is read by NUnit as "no
//! arguments supplied" and the case comes out inconclusive instead of running
//! with zero tags.

use tracing::debug;

use crate::generator::fanout::fan_out_row;
use crate::ir::{DeclarationOrigin, Literal, TestCaseDeclaration, TestMethod};

/// Named argument that carries the ignore reason on a test case.
pub const IGNORE_ARGUMENT: &str = "Ignore";
/// Reason attached to every ignored example row.
pub const IGNORED_SCENARIO_REASON: &str = "Ignored scenario";

/// The attribute set built for one example row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAttributes {
    /// The raw cell values, used when synthesizing test names.
    pub cells: Vec<String>,
    /// Positional arguments: one literal per cell followed by the tags argument.
    pub arguments: Vec<Literal>,
    pub ignore_reason: Option<String>,
}

impl RowAttributes {
    /// The trailing tags argument. `None` only for attributes built by hand without one.
    pub fn tags_argument(&self) -> Option<&Literal> {
        self.arguments.last()
    }

    pub fn into_declaration(self) -> TestCaseDeclaration {
        TestCaseDeclaration {
            arguments: self.arguments,
            ignore_reason: self.ignore_reason,
            category: None,
            name: None,
            origin: DeclarationOrigin::Row,
        }
    }
}

/// Builds the attributes for one example row.
///
/// ```rust
/// use browsercase::generator::build_row_attributes;
/// use browsercase::ir::Literal;
///
/// let attributes = build_row_attributes(&["London", "Bath", "Hereford"], &[], false);
/// assert_eq!(attributes.arguments.len(), 4);
/// assert_eq!(attributes.arguments[3], Literal::Null);
/// ```
pub fn build_row_attributes<S: AsRef<str>>(arguments: &[S], tags: &[S], ignored: bool) -> RowAttributes {
    let cells: Vec<String> = arguments.iter().map(|a| a.as_ref().to_string()).collect();

    let mut literals: Vec<Literal> = cells.iter().cloned().map(Literal::Str).collect();
    literals.push(tags_literal(tags));

    RowAttributes {
        cells,
        arguments: literals,
        ignore_reason: ignored.then(|| IGNORED_SCENARIO_REASON.to_string()),
    }
}

fn tags_literal<S: AsRef<str>>(tags: &[S]) -> Literal {
    if tags.is_empty() {
        Literal::Null
    } else {
        Literal::StrArray(tags.iter().map(|t| t.as_ref().to_string()).collect())
    }
}

/// Adds one example row to `method`.
///
/// When the method already targets browsers, the row is fanned out across
/// them. Otherwise exactly one row declaration is added.
pub fn set_row<S: AsRef<str>>(method: &mut TestMethod, arguments: &[S], tags: &[S], ignored: bool) {
    let attributes = build_row_attributes(arguments, tags, ignored);

    if method.metadata.browsers().is_empty() {
        debug!(method = %method.identifier, cells = attributes.cells.len(), "adding example row");
        method.push_test_case(attributes.into_declaration());
    } else {
        fan_out_row(method, &attributes);
    }
}
