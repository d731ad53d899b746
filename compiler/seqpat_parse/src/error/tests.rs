use pretty_assertions::assert_eq;
use seqpat_diagnostic::Severity;

use super::*;

#[test]
fn test_unexpected_token_message() {
    let kind = ParseErrorKind::UnexpectedToken {
        found: TokenKind::Comma,
        expected: "=>",
    };
    assert_eq!(kind.message(), "expected =>, found ,");
    assert_eq!(kind.error_code(), ErrorCode::E1001);
    assert!(kind.hint().is_none());
}

#[test]
fn test_lex_error_codes() {
    let cases = [
        (LexErrorKind::UnterminatedString, ErrorCode::E0001),
        (LexErrorKind::InvalidCharacter, ErrorCode::E0002),
        (LexErrorKind::IntegerOverflow, ErrorCode::E0003),
        (LexErrorKind::InvalidChar, ErrorCode::E0004),
        (LexErrorKind::InvalidEscape, ErrorCode::E0005),
    ];
    for (lex, code) in cases {
        assert_eq!(ParseErrorKind::Lex(lex).error_code(), code);
    }
    assert_eq!(ParseErrorKind::IntegerOutOfRange.error_code(), ErrorCode::E0003);
}

#[test]
fn test_pattern_check_codes() {
    assert_eq!(
        ParseErrorKind::MultipleRestMarkers { first: Span::DUMMY }.error_code(),
        ErrorCode::E3001
    );
    assert_eq!(
        ParseErrorKind::DuplicateBindingName {
            name: "x",
            first: Span::DUMMY
        }
        .error_code(),
        ErrorCode::E3004
    );
    assert_eq!(ParseErrorKind::SuffixWithoutRest.error_code(), ErrorCode::E3005);
    assert_eq!(
        ParseErrorKind::InconsistentAlternativeBindings {
            name: "x",
            bound_at: Span::DUMMY
        }
        .error_code(),
        ErrorCode::E3006
    );
    assert_eq!(
        ParseErrorKind::UnknownBinding { name: "x" }.error_code(),
        ErrorCode::E3007
    );
}

#[test]
fn test_from_pattern_error_reports_second_binding() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let err = PatternError::DuplicateBinding {
        name: x,
        first: Span::new(1, 2),
        second: Span::new(4, 5),
    };
    let (kind, span) = ParseErrorKind::from_pattern_error(&err, &interner);
    assert_eq!(span, Span::new(4, 5));
    assert_eq!(
        kind,
        ParseErrorKind::DuplicateBindingName {
            name: "x",
            first: Span::new(1, 2),
        }
    );
    assert_eq!(kind.message(), "`x` is bound more than once in the same pattern");
}

#[test]
fn test_multiple_rest_diagnostic() {
    let err = ParseError::new(
        ParseErrorKind::MultipleRestMarkers {
            first: Span::new(1, 4),
        },
        Span::new(9, 12),
    );
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E3001);
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.primary_span(), Some(Span::new(9, 12)));
    assert_eq!(diag.labels.len(), 2);
    assert!(!diag.labels[1].is_primary);
    assert_eq!(diag.labels[1].span, Span::new(1, 4));
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn test_unclosed_delimiter_diagnostic() {
    let err = ParseError::new(
        ParseErrorKind::UnclosedDelimiter {
            open: TokenKind::LBracket,
            open_span: Span::new(5, 6),
        },
        Span::point(10),
    );
    let diag = err.to_diagnostic();
    assert_eq!(diag.message, "unclosed delimiter `[`");
    assert_eq!(diag.labels[1].message, "`[` opened here");
    assert!(diag.suggestions.is_empty());
}

#[test]
fn test_display() {
    let err = ParseError::new(ParseErrorKind::UnknownBinding { name: "y" }, Span::new(3, 4));
    assert_eq!(err.to_string(), "cannot find binding `y` in this case at 3..4");
    assert_eq!(err.code(), ErrorCode::E3007);
}
