//! Human-readable rendering of findings with source context.

use std::io::{self, Write};

use starterlint::Span;

use super::Finding;

/// Renders one finding: a header line, the primary and related locations
/// with their source lines, then any notes.
pub(crate) fn render_finding<W: Write>(out: &mut W, finding: &Finding<'_>) -> io::Result<()> {
    let diagnostic = &finding.diagnostic;
    let (line, column) = diagnostic.span().start().one_based();
    writeln!(
        out,
        "{}:{line}:{column}: {}[{}]: {}",
        finding.unit,
        diagnostic.severity(),
        diagnostic.rule(),
        diagnostic.message()
    )?;

    let width = gutter_width(diagnostic);
    render_snippet(out, finding.text, diagnostic.span(), "", width)?;
    for related in diagnostic.related() {
        render_snippet(out, finding.text, related.span(), related.label(), width)?;
    }
    for note in diagnostic.notes() {
        writeln!(out, "{:>width$} = note: {note}", "")?;
    }
    writeln!(out)
}

fn render_snippet<W: Write>(
    out: &mut W,
    text: &str,
    span: &Span,
    label: &str,
    width: usize,
) -> io::Result<()> {
    let (line, column) = span.start().one_based();
    writeln!(out, "{:>width$}--> {line}:{column}", "")?;

    let source_line = usize::try_from(span.start().line())
        .ok()
        .and_then(|index| text.lines().nth(index));
    let Some(source_line) = source_line else {
        return Ok(());
    };

    writeln!(out, "{:>width$} |", "")?;
    writeln!(out, "{line:>width$} | {source_line}")?;
    let marker = underline(source_line, span);
    if label.is_empty() {
        writeln!(out, "{:>width$} | {marker}", "")
    } else {
        writeln!(out, "{:>width$} | {marker} {label}", "")
    }
}

/// Builds the `^^^` marker under the spanned part of `source_line`.
///
/// Leading tabs are reproduced so the marker lines up in terminals.
fn underline(source_line: &str, span: &Span) -> String {
    let start = usize::try_from(span.start().column()).unwrap_or(usize::MAX);
    let end = if span.end().line() == span.start().line() {
        usize::try_from(span.end().column()).unwrap_or(usize::MAX)
    } else {
        source_line.len()
    };

    let prefix = source_line.get(..start).unwrap_or(source_line);
    let covered = source_line.get(start..end).unwrap_or_default();

    let mut marker: String = prefix
        .chars()
        .map(|ch| if ch == '\t' { '\t' } else { ' ' })
        .collect();
    let carets = covered.chars().count().max(1);
    marker.extend(std::iter::repeat_n('^', carets));
    marker
}

fn gutter_width(diagnostic: &starterlint::Diagnostic) -> usize {
    let widest = diagnostic
        .related()
        .iter()
        .map(|related| related.span().start().one_based().0)
        .chain(std::iter::once(diagnostic.span().start().one_based().0))
        .max()
        .unwrap_or(1);
    widest.to_string().len()
}
