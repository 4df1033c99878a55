//! Helpers for reading JavaScript syntax nodes.
//!
//! The detector reasons about member chains (`window.QUnit.config.autostart`)
//! and literal values rather than raw node kinds. These helpers flatten the
//! grammar's nested `member_expression` / `subscript_expression` shapes into
//! plain name lists and convert node positions into
//! [`starterlint_core::Span`]s.

use starterlint_core::Span;

use crate::position::{point_to_line_col, saturating_u32};

/// Returns the source text covered by `node`.
#[must_use]
pub fn node_text<'a>(node: tree_sitter::Node<'_>, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or_default()
}

/// Converts the location of `node` into a [`Span`].
#[must_use]
pub fn span_of(node: tree_sitter::Node<'_>) -> Span {
    let range = node.byte_range();
    Span::new(
        saturating_u32(range.start),
        saturating_u32(range.end),
        point_to_line_col(node.start_position()),
        point_to_line_col(node.end_position()),
    )
}

/// Strips any number of enclosing parentheses from an expression.
#[must_use]
pub fn unwrap_parentheses(node: tree_sitter::Node<'_>) -> tree_sitter::Node<'_> {
    let mut current = node;
    while current.kind() == "parenthesized_expression" {
        match current.named_child(0) {
            Some(inner) => current = inner,
            None => break,
        }
    }
    current
}

/// Returns the value of a plain string literal (`'x'` or `"x"`).
///
/// Template strings and literals with escape sequences are not resolved and
/// yield `None`.
#[must_use]
pub fn string_literal_value<'a>(node: tree_sitter::Node<'_>, source: &'a str) -> Option<&'a str> {
    if node.kind() != "string" {
        return None;
    }
    let text = node_text(node, source);
    let inner = text
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .or_else(|| {
            text.strip_prefix('\'')
                .and_then(|rest| rest.strip_suffix('\''))
        })?;
    if inner.contains('\\') {
        return None;
    }
    Some(inner)
}

/// Flattens a static member chain into its component names.
///
/// `QUnit.config.autostart`, `QUnit["config"].autostart`, and
/// `(QUnit).config.autostart` all yield `["QUnit", "config", "autostart"]`.
/// Chains containing computed keys, calls, or any other non-static part
/// return `None`.
#[must_use]
pub fn member_path<'a>(node: tree_sitter::Node<'_>, source: &'a str) -> Option<Vec<&'a str>> {
    let mut path = Vec::new();
    push_member_path(unwrap_parentheses(node), source, &mut path)?;
    Some(path)
}

fn push_member_path<'a>(
    node: tree_sitter::Node<'_>,
    source: &'a str,
    path: &mut Vec<&'a str>,
) -> Option<()> {
    match node.kind() {
        "identifier" | "this" => {
            path.push(node_text(node, source));
            Some(())
        }
        "member_expression" => {
            let object = node.child_by_field_name("object")?;
            let property = node.child_by_field_name("property")?;
            if property.kind() != "property_identifier" {
                return None;
            }
            push_member_path(unwrap_parentheses(object), source, path)?;
            path.push(node_text(property, source));
            Some(())
        }
        "subscript_expression" => {
            let object = node.child_by_field_name("object")?;
            let index = node.child_by_field_name("index")?;
            let key = string_literal_value(unwrap_parentheses(index), source)?;
            push_member_path(unwrap_parentheses(object), source, path)?;
            path.push(key);
            Some(())
        }
        _ => None,
    }
}
