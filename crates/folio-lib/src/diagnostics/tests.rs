use std::sync::Arc;

use folio_core::Lexical;
use indoc::indoc;

use super::*;

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::TableRowArity, Lexical::new(3, 5))
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    let diag = &diagnostics.as_slice()[0];
    assert_eq!(diag.message(), "table row does not match the table header");
    assert_eq!(
        diag.hint(),
        Some("every row needs exactly one cell per header column")
    );
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::DuplicateBlockId, Lexical::new(1, 1))
        .message("intro")
        .hint("first declared at 1:1")
        .emit();

    insta::assert_snapshot!(
        diagnostics.render(),
        @"1:1: error: block id `intro` is already in use (hint: first declared at 1:1)"
    );
}

#[test]
fn severity_override_counts_as_warning() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::TableRowArity, Lexical::new(1, 1))
        .severity(Severity::Warning)
        .emit();

    assert!(!diagnostics.has_errors());
    assert!(diagnostics.has_warnings());
    assert_eq!(diagnostics.error_count(), 0);
    assert_eq!(diagnostics.warning_count(), 1);
}

#[test]
fn extend_keeps_order() {
    let mut first = Diagnostics::new();
    first
        .report(DiagnosticKind::TableRowArity, Lexical::new(1, 1))
        .emit();
    let mut second = Diagnostics::new();
    second
        .report(DiagnosticKind::DuplicateBlockId, Lexical::new(2, 1))
        .emit();

    first.extend(second);
    let kinds: Vec<DiagnosticKind> = first.iter().map(Diagnostic::kind).collect();
    assert_eq!(
        kinds,
        [DiagnosticKind::TableRowArity, DiagnosticKind::DuplicateBlockId]
    );
}

#[test]
fn plain_render_includes_file() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::TableRowArity,
            Lexical::new(4, 7).with_file(Arc::from("book.json")),
        )
        .message("expected 3, received 2")
        .emit();

    insta::assert_snapshot!(
        diagnostics.render(),
        @"book.json:4:7: error: table row does not match the table header: expected 3, received 2 (hint: every row needs exactly one cell per header column)"
    );
}

#[test]
fn snippet_render_points_at_position() {
    let source = indoc! {r#"
        <table>
          <table-row>
        </table>
    "#};

    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::TableRowArity, Lexical::new(2, 3))
        .message("expected 3, received 2")
        .emit();

    let out = diagnostics.printer().source(source).path("doc.xml").render();
    assert!(out.contains("error: table row does not match the table header"), "{out}");
    assert!(out.contains("doc.xml:2:3"), "{out}");
    assert!(out.contains("<table-row>"), "{out}");
    assert!(out.contains("help: every row needs exactly one cell per header column"), "{out}");
}

#[test]
fn span_clamps_past_end() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::TableRowArity, Lexical::new(40, 90))
        .emit();

    let out = diagnostics.printer().source("short\n").render();
    assert!(out.contains("error"), "{out}");
}
