use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_builder_chain() {
    let diag = Diagnostic::error(ErrorCode::E3002)
        .with_message("non-exhaustive switch")
        .with_label(Span::new(0, 6), "missing `[_, _]`")
        .with_secondary_label(Span::new(10, 20), "last clause")
        .with_note("patterns `[_, _]` not covered")
        .with_suggestion("add a `case [...]` clause");

    assert!(diag.is_error());
    assert_eq!(diag.primary_span(), Some(Span::new(0, 6)));
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions.len(), 1);
    assert_eq!(diag.to_string(), "error[E3002]: non-exhaustive switch");
}

#[test]
fn test_deny_upgrades_only_warnings() {
    let warning = Diagnostic::warning(ErrorCode::E3003).with_message("unreachable");
    assert!(warning.is_warning());
    assert!(warning.denied().is_error());

    let error = Diagnostic::error(ErrorCode::E3001);
    assert_eq!(error.clone().denied(), error);
}

#[test]
fn test_severity_names() {
    assert_eq!(Severity::Error.to_string(), "error");
    assert_eq!(Severity::Warning.as_str(), "warning");
}

#[test]
fn test_primary_span_absent() {
    let diag = Diagnostic::error(ErrorCode::E9001).with_secondary_label(Span::DUMMY, "x");
    assert_eq!(diag.primary_span(), None);
}
