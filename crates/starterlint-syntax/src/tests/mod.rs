//! Unit tests for the node helpers.

use rstest::rstest;

use crate::{
    ParseResult, Parser, SupportedLanguage, member_path, node_text, span_of, string_literal_value,
    unwrap_parentheses,
};

fn parse(source: &str) -> ParseResult {
    let mut parser = Parser::new(SupportedLanguage::JavaScript).expect("parser init");
    let result = parser.parse(source).expect("parse");
    assert!(!result.has_errors(), "fixture source must parse: {source}");
    result
}

/// Returns the first node of `kind` in pre-order.
fn first_of_kind<'t>(node: tree_sitter::Node<'t>, kind: &str) -> Option<tree_sitter::Node<'t>> {
    if node.kind() == kind {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.named_children(&mut cursor).collect();
    children
        .into_iter()
        .find_map(|child| first_of_kind(child, kind))
}

/// Returns the left-hand side of the first assignment in `source`'s tree.
fn assignment_target(result: &ParseResult) -> tree_sitter::Node<'_> {
    first_of_kind(result.root_node(), "assignment_expression")
        .and_then(|assignment| assignment.child_by_field_name("left"))
        .expect("assignment target")
}

// =============================================================================
// Member Paths
// =============================================================================

#[rstest]
#[case("QUnit.config.autostart = false;", &["QUnit", "config", "autostart"])]
#[case("QUnit['config'].autostart = false;", &["QUnit", "config", "autostart"])]
#[case("QUnit.config[\"autostart\"] = false;", &["QUnit", "config", "autostart"])]
#[case("(QUnit).config.autostart = false;", &["QUnit", "config", "autostart"])]
#[case("window.QUnit.config.autostart = false;", &["window", "QUnit", "config", "autostart"])]
#[case("flag = false;", &["flag"])]
fn member_path_flattens_static_chains(#[case] source: &str, #[case] expected: &[&str]) {
    let result = parse(source);
    let target = assignment_target(&result);

    let path = member_path(target, result.source()).expect("static path");
    assert_eq!(path, expected);
}

#[rstest]
#[case("QUnit[key].autostart = false;")]
#[case("getRunner().config.autostart = false;")]
#[case("QUnit.config[`autostart`] = false;")]
fn member_path_rejects_dynamic_chains(#[case] source: &str) {
    let result = parse(source);
    let target = assignment_target(&result);

    assert_eq!(member_path(target, result.source()), None);
}

// =============================================================================
// Literals and Text
// =============================================================================

#[rstest]
#[case("x = 'config';", Some("config"))]
#[case("x = \"autostart\";", Some("autostart"))]
#[case("x = '';", Some(""))]
#[case("x = 'a\\'b';", None)]
fn string_literal_value_strips_quotes(#[case] source: &str, #[case] expected: Option<&str>) {
    let result = parse(source);
    let literal = first_of_kind(result.root_node(), "string").expect("string literal");

    assert_eq!(string_literal_value(literal, result.source()), expected);
}

#[test]
fn string_literal_value_ignores_other_nodes() {
    let result = parse("x = 1;");
    let number = first_of_kind(result.root_node(), "number").expect("number");

    assert_eq!(string_literal_value(number, result.source()), None);
}

#[test]
fn unwrap_parentheses_reaches_inner_expression() {
    let result = parse("x = ((false));");
    let right = first_of_kind(result.root_node(), "assignment_expression")
        .and_then(|assignment| assignment.child_by_field_name("right"))
        .expect("right-hand side");

    assert_eq!(right.kind(), "parenthesized_expression");
    let inner = unwrap_parentheses(right);
    assert_eq!(inner.kind(), "false");
    assert_eq!(node_text(inner, result.source()), "false");
}

// =============================================================================
// Spans
// =============================================================================

#[test]
fn span_of_reports_bytes_and_positions() {
    let result = parse("// bootstrap\n\tQUnit.start();\n");
    let call = first_of_kind(result.root_node(), "call_expression").expect("call");

    let span = span_of(call);
    assert_eq!(span.start_byte(), 14);
    assert_eq!(span.end_byte(), 27);
    assert_eq!(span.start().one_based(), (2, 2));
    assert_eq!(span.end().one_based(), (2, 15));
    assert_eq!(node_text(call, result.source()), "QUnit.start()");
}
