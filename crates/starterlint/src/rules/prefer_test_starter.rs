//! The `prefer-test-starter` rule.
//!
//! Flags the legacy bootstrap in which a test file switches off the runner's
//! automatic start and later restarts it from a dependency-load callback:
//!
//! ```js
//! QUnit.config.autostart = false;
//! sap.ui.require(["app/test/unit/AllTests"], function() {
//!     QUnit.start();
//! });
//! ```
//!
//! Both halves must be present. A file that only disables autostart, or only
//! calls `start()`, may be doing so deliberately and is left alone.

use starterlint_core::{Diagnostic, DetectorConfig, RelatedSpan, RuleId};
use starterlint_syntax::{member_path, span_of, unwrap_parentheses};
use tracing::debug;
use tree_sitter::Node;

const RULE_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::rules::prefer_test_starter");

/// Node kinds that introduce a callback when passed as an argument.
const CALLBACK_KINDS: [&str; 3] = ["function_expression", "arrow_function", "generator_function"];

/// Evaluates the rule on an error-free tree.
pub(crate) fn check(root: Node<'_>, source: &str, config: &DetectorConfig) -> Option<Diagnostic> {
    let matcher = GlobalMatcher { config, source };

    let Some(disable) = find_map_preorder(root, |node| {
        matcher.is_autostart_disable(node).then_some(node)
    }) else {
        debug!(target: RULE_TARGET, "no autostart disable statement");
        return None;
    };

    let Some(start) = find_map_preorder(root, |node| matcher.deferred_start(node)) else {
        debug!(
            target: RULE_TARGET,
            line = disable.start_position().row + 1,
            "autostart disabled without a deferred start; not flagged"
        );
        return None;
    };

    Some(build_diagnostic(config.test_global(), disable, start))
}

fn build_diagnostic(global: &str, disable: Node<'_>, start: Node<'_>) -> Diagnostic {
    Diagnostic::warning(
        RuleId::PreferTestStarter,
        format!(
            "Use the Test Starter instead of disabling `{global}.config.autostart` \
             and calling `{global}.start()` from a dependency callback"
        ),
        span_of(disable),
    )
    .with_related(RelatedSpan::new(
        span_of(start),
        format!("deferred `{global}.start()` call"),
    ))
    .with_note(format!(
        "the Test Starter loads the test modules and starts {global} itself; \
         remove the autostart assignment and the manual start call"
    ))
    .with_note(
        "declare the test modules in a test suite configuration and open them \
         through the Test Starter entry page",
    )
}

/// Recognises member chains rooted at the configured test global.
struct GlobalMatcher<'a> {
    config: &'a DetectorConfig,
    source: &'a str,
}

impl GlobalMatcher<'_> {
    /// `<G>.config.autostart = false;` as a statement of its own.
    fn is_autostart_disable(&self, node: Node<'_>) -> bool {
        if node.kind() != "expression_statement" {
            return false;
        }
        let Some(assignment) = node.named_child(0).map(unwrap_parentheses) else {
            return false;
        };
        if assignment.kind() != "assignment_expression" {
            return false;
        }
        let (Some(left), Some(right)) = (
            assignment.child_by_field_name("left"),
            assignment.child_by_field_name("right"),
        ) else {
            return false;
        };

        unwrap_parentheses(right).kind() == "false"
            && self.is_global_member(left, &["config", "autostart"])
    }

    /// Returns the first `<G>.start()` call inside a callback argument of
    /// `node`, when `node` is a call expression.
    fn deferred_start<'t>(&self, node: Node<'t>) -> Option<Node<'t>> {
        if node.kind() != "call_expression" {
            return None;
        }
        let arguments = node.child_by_field_name("arguments")?;
        let mut cursor = arguments.walk();
        let callbacks: Vec<_> = arguments
            .named_children(&mut cursor)
            .map(unwrap_parentheses)
            .filter(|argument| CALLBACK_KINDS.contains(&argument.kind()))
            .collect();

        callbacks.into_iter().find_map(|callback| {
            let body = callback.child_by_field_name("body")?;
            find_map_preorder(body, |inner| self.is_start_call(inner).then_some(inner))
        })
    }

    fn is_start_call(&self, node: Node<'_>) -> bool {
        node.kind() == "call_expression"
            && node
                .child_by_field_name("function")
                .is_some_and(|callee| self.is_global_member(callee, &["start"]))
    }

    /// Returns `true` when `node` is `<G>.<members...>`, optionally
    /// qualified by a global receiver such as `window`.
    fn is_global_member(&self, node: Node<'_>, members: &[&str]) -> bool {
        let Some(path) = member_path(node, self.source) else {
            return false;
        };
        let unqualified = match path.split_first() {
            Some((receiver, rest))
                if rest.len() == members.len() + 1 && self.config.is_global_receiver(receiver) =>
            {
                rest
            }
            _ => path.as_slice(),
        };

        unqualified.split_first().is_some_and(|(global, rest)| {
            *global == self.config.test_global() && rest == members
        })
    }
}

/// Visits `root` and its descendants in document order, returning the first
/// value produced by `visit`.
fn find_map_preorder<'t, R>(
    root: Node<'t>,
    mut visit: impl FnMut(Node<'t>) -> Option<R>,
) -> Option<R> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_named() {
            if let Some(found) = visit(node) {
                return Some(found);
            }
        }
        if cursor.goto_first_child() {
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}
