//! Common utilities shared by both renderers.
//!
//! Key quoting, literal formatting, indentation and the ordering rules that
//! keep generated output stable.

use std::cmp::Ordering;

use typegen_ir::{Expression, Identifier, LiteralValue, Property};

/// Check if a key needs quoting to be used as an object key.
///
/// Returns true if the name:
/// - Is empty
/// - Doesn't start with a letter, underscore, or dollar sign
/// - Contains characters other than alphanumeric, underscore, or dollar sign
pub fn needs_quoting(name: &str) -> bool {
    name.is_empty()
        || !name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Encode a string as a double-quoted JSON string literal.
pub fn json_string(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

/// Quote a key if it is not a valid bare identifier.
pub fn quote_if_needed(name: &str) -> String {
    if needs_quoting(name) {
        json_string(name)
    } else {
        name.to_string()
    }
}

/// Render a literal the way `JSON.stringify` would.
pub fn render_literal(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Bool(b) => b.to_string(),
        LiteralValue::Int(i) => i.to_string(),
        LiteralValue::Float(f) => render_float(*f),
        LiteralValue::String(s) => json_string(s),
    }
}

/// Whole numbers drop the fraction (`1`, not `1.0`); `-0` prints as `0`.
fn render_float(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 {
        return format!("{f:.0}");
    }
    serde_json::Value::from(f).to_string()
}

/// Two spaces per nesting level
pub fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

/// `/** text */` with any `*/` in the text defused.
pub fn doc_comment(text: &str) -> String {
    format!("/** {} */", text.replace("*/", "*\\/"))
}

/// Properties ordered by key, ordinal comparison, stable for equal keys.
pub fn sorted_properties(properties: &[Property]) -> Vec<&Property> {
    let mut sorted: Vec<&Property> = properties.iter().collect();
    sorted.sort_by(|a, b| a.key.cmp(&b.key));
    sorted
}

fn union_rank(id: &Identifier) -> u8 {
    if id.is_undefined() {
        2
    } else if id.is_null() {
        1
    } else {
        0
    }
}

fn compare_union_identifiers(a: &Identifier, b: &Identifier) -> Ordering {
    union_rank(a)
        .cmp(&union_rank(b))
        .then_with(|| a.name.cmp(&b.name))
}

/// Canonical presentation order of union variants.
///
/// Identifier variants are sorted ascending with `null` after every other
/// name and `undefined` last. They are written back into the positions that
/// held identifiers, so any other variant keeps its exact place.
pub fn canonical_union_order(variants: &[Expression]) -> Vec<&Expression> {
    let mut identifiers: Vec<(&Identifier, &Expression)> = variants
        .iter()
        .filter_map(|variant| variant.as_identifier().map(|id| (id, variant)))
        .collect();
    identifiers.sort_by(|(a, _), (b, _)| compare_union_identifiers(a, b));

    let mut sorted = identifiers.into_iter().map(|(_, variant)| variant);
    variants
        .iter()
        .map(|variant| match variant {
            Expression::Identifier(_) => sorted.next().unwrap_or(variant),
            _ => variant,
        })
        .collect()
}

/// Join rendered statements: a blank line between statements, a single
/// newline between consecutive imports, one trailing newline.
pub fn join_statements(parts: impl IntoIterator<Item = (bool, String)>) -> String {
    let mut output = String::new();
    let mut previous_is_import: Option<bool> = None;

    for (is_import, text) in parts {
        if let Some(previous) = previous_is_import {
            output.push('\n');
            if !(previous && is_import) {
                output.push('\n');
            }
        }
        output.push_str(&text);
        previous_is_import = Some(is_import);
    }

    output.push('\n');
    output
}

/// Capitalize the first letter of a string.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a table or schema name to a PascalCase type name.
/// - Splits on anything that is not alphanumeric
/// - Capitalizes each part, keeping the rest of the part as is
/// - Prepends `_` if the result starts with a digit
pub fn to_pascal_case(name: &str) -> String {
    let mut result: String = name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(capitalize_first)
        .collect();

    if result.is_empty() {
        return "_".to_string();
    }

    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }

    result
}
