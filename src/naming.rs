//! Identifier synthesis for generated classes, methods and parameters.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("word pattern is valid"));

const FEATURE_SUFFIX: &str = "Feature";

/// Reserved C# keywords. Contextual keywords are valid identifiers and are not listed.
const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn guard_leading_digit(identifier: String) -> String {
    match identifier.chars().next() {
        None => "_".to_string(),
        Some(first) if first.is_numeric() => format!("_{identifier}"),
        Some(_) => identifier,
    }
}

/// Title-cases every word of `text` and drops everything else.
///
/// ```rust
/// use browsercase::naming::pascal_identifier;
/// assert_eq!(pascal_identifier("plan a journey (by rail)"), "PlanAJourneyByRail");
/// assert_eq!(pascal_identifier("3 stops"), "_3Stops");
/// ```
pub fn pascal_identifier(text: &str) -> String {
    let joined: String = WORD.find_iter(text).map(|m| capitalize(m.as_str())).collect();
    guard_leading_digit(joined)
}

pub fn method_identifier(scenario_title: &str) -> String {
    pascal_identifier(scenario_title)
}

pub fn class_identifier(feature_title: &str) -> String {
    let base = pascal_identifier(feature_title);
    format!("{base}{FEATURE_SUFFIX}")
}

/// camelCase identifier for a method parameter.
pub fn parameter_identifier(column: &str) -> String {
    let pascal: String = WORD.find_iter(column).map(|m| capitalize(m.as_str())).collect();
    let mut chars = pascal.chars();
    let camel = match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    };
    guard_leading_digit(camel)
}

/// Prefixes a reserved C# keyword with `@` so it can be used as an identifier.
pub fn escape_keyword(identifier: String) -> String {
    if CSHARP_KEYWORDS.contains(&identifier.as_str()) {
        format!("@{identifier}")
    } else {
        identifier
    }
}

/// Parameter identifiers for a list of columns.
///
/// Names never repeat and never equal one of `reserved`; a clash gets a
/// numeric suffix. Keywords are escaped.
///
/// ```rust
/// use browsercase::naming::parameter_identifiers;
/// let names = parameter_identifiers(&["From", "from", "class"], &["exampleTags"]);
/// assert_eq!(names, vec!["from", "from1", "@class"]);
/// ```
pub fn parameter_identifiers<S: AsRef<str>>(columns: &[S], reserved: &[&str]) -> Vec<String> {
    let mut taken: Vec<String> = reserved.iter().map(|name| name.to_string()).collect();
    let mut identifiers = Vec::with_capacity(columns.len());
    for column in columns {
        let base = parameter_identifier(column.as_ref());
        let mut candidate = base.clone();
        let mut suffix = 1;
        while taken.contains(&candidate) {
            candidate = format!("{base}{suffix}");
            suffix += 1;
        }
        taken.push(candidate.clone());
        identifiers.push(escape_keyword(candidate));
    }
    identifiers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names_carry_the_feature_suffix() {
        assert_eq!(class_identifier("Journey planner"), "JourneyPlannerFeature");
    }

    #[test]
    fn parameters_are_camel_cased() {
        assert_eq!(parameter_identifier("from station"), "fromStation");
        assert_eq!(parameter_identifier("Via"), "via");
        assert_eq!(parameter_identifier("2nd leg"), "_2ndLeg");
        assert_eq!(parameter_identifier("--"), "_");
    }

    #[test]
    fn reserved_names_are_avoided() {
        let names = parameter_identifiers(
            &["browser configuration", "example tags", "browserConfiguration"],
            &["browserConfiguration", "exampleTags"],
        );
        assert_eq!(
            names,
            vec!["browserConfiguration1", "exampleTags1", "browserConfiguration2"]
        );
    }

    #[test]
    fn only_reserved_keywords_are_escaped() {
        assert_eq!(escape_keyword("string".into()), "@string");
        assert_eq!(escape_keyword("from".into()), "from");
        assert_eq!(escape_keyword("var".into()), "var");
    }

    #[test]
    fn unicode_letters_survive() {
        assert_eq!(pascal_identifier("café au lait"), "CaféAuLait");
    }
}
