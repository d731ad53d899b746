use pretty_assertions::assert_eq;
use seqpat_ir::Span;

use super::*;
use crate::ErrorCode;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E3002)
        .with_message("non-exhaustive switch `foo`")
        .with_label(Span::new(7, 10), "patterns `[_, _]` not covered")
        .with_note("guarded clauses do not count towards coverage")
        .with_suggestion("add a \"rest\" clause")
}

fn render(mut emitter: JsonEmitter<Vec<u8>>, diagnostics: &[Diagnostic]) -> String {
    emitter.begin();
    emitter.emit_all(diagnostics);
    emitter.end();
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap_or_default()
}

#[test]
fn test_json_emitter() {
    let text = render(JsonEmitter::new(Vec::new()), &[sample_diagnostic()]);
    assert!(text.starts_with("[\n  {"));
    assert!(text.contains("\"code\": \"E3002\""));
    assert!(text.contains("\"severity\": \"error\""));
    assert!(text.contains(
        "\"labels\": [{\"start\": 7, \"end\": 10, \"message\": \"patterns `[_, _]` not covered\", \"primary\": true}]"
    ));
    assert!(text.contains("\"notes\": [\"guarded clauses do not count towards coverage\"]"));
    assert!(text.contains("add a \\\"rest\\\" clause"));
    assert!(!text.contains("\"line\""));
    assert!(text.trim_end().ends_with(']'));
}

#[test]
fn test_json_emitter_multiple() {
    let text = render(
        JsonEmitter::new(Vec::new()),
        &[
            Diagnostic::error(ErrorCode::E1001).with_message("error 1"),
            Diagnostic::warning(ErrorCode::E3003).with_message("warning 1"),
        ],
    );
    assert!(text.contains("\"E1001\""));
    assert!(text.contains("\"severity\": \"warning\""));
    assert!(text.contains("  },\n  {"));
    assert!(text.contains("\"notes\": []"));
}

#[test]
fn test_json_emitter_empty_run() {
    let text = render(JsonEmitter::new(Vec::new()), &[]);
    assert_eq!(text, "[\n\n]\n");
}

#[test]
fn test_json_emitter_with_source_positions() {
    let emitter = JsonEmitter::new(Vec::new()).with_source("switch\nfoo(xs) {}");
    let diag = Diagnostic::error(ErrorCode::E1001).with_label(Span::new(7, 10), "here");
    let text = render(emitter, &[diag]);
    assert!(text.contains("\"line\": 2, \"column\": 1, "));
}
