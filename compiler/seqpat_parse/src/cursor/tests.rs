use pretty_assertions::assert_eq;
use seqpat_ir::LexErrorKind;

use super::*;

/// Owns the token list and interner so `Cursor` can borrow them.
struct TestCtx {
    tokens: TokenList,
    interner: StringInterner,
}

impl TestCtx {
    fn new(source: &str) -> Self {
        let interner = StringInterner::new();
        let tokens = seqpat_lexer::lex(source, &interner);
        Self { tokens, interner }
    }

    fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.tokens, &self.interner)
    }
}

#[test]
fn test_cursor_navigation() {
    let ctx = TestCtx::new("switch foo(x)");
    let mut cursor = ctx.cursor();

    assert!(cursor.check(&TokenKind::Switch));
    assert!(matches!(cursor.peek_next_kind(), TokenKind::Ident(_)));
    cursor.advance();
    assert!(cursor.check(&TokenKind::Ident(Name::EMPTY)));
    cursor.advance();
    assert!(cursor.eat(&TokenKind::LParen));
    assert!(!cursor.eat(&TokenKind::RParen));
    cursor.advance();
    assert!(cursor.eat(&TokenKind::RParen));
    assert!(cursor.is_at_end());
    assert_eq!(cursor.position(), 5);
}

#[test]
fn test_advance_stops_at_eof() {
    let ctx = TestCtx::new("case");
    let mut cursor = ctx.cursor();
    cursor.advance();
    assert!(cursor.is_at_end());
    let eof = cursor.advance();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.position(), 1);
}

#[test]
fn test_previous_span() {
    let ctx = TestCtx::new("case  _");
    let mut cursor = ctx.cursor();
    assert_eq!(cursor.previous_span(), Span::DUMMY);
    cursor.advance();
    assert_eq!(cursor.previous_span(), Span::new(0, 4));
    assert_eq!(cursor.current_span(), Span::new(6, 7));
}

#[test]
fn test_expect_success_returns_span() {
    let ctx = TestCtx::new("=> \"x\"");
    let mut cursor = ctx.cursor();
    assert_eq!(cursor.expect(&TokenKind::FatArrow), Ok(Span::new(0, 2)));
    assert!(matches!(cursor.current_kind(), TokenKind::Str(_)));
}

#[test]
fn test_expect_failure() {
    let ctx = TestCtx::new("case");
    let mut cursor = ctx.cursor();
    let err = cursor.expect(&TokenKind::Switch).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            found: TokenKind::Case,
            expected: "switch",
        }
    );
    assert_eq!(err.span, Span::new(0, 4));
    // nothing consumed
    assert!(cursor.check(&TokenKind::Case));
}

#[test]
fn test_expect_ident() {
    let ctx = TestCtx::new("foo 1");
    let mut cursor = ctx.cursor();
    let (name, span) = cursor.expect_ident("switch name").unwrap();
    assert_eq!(ctx.interner.lookup(name), "foo");
    assert_eq!(span, Span::new(0, 3));

    let err = cursor.expect_ident("switch name").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::ExpectedIdentifier {
            found: TokenKind::Int(1),
            context: "switch name",
        }
    );
}

#[test]
fn test_error_token_takes_precedence() {
    let ctx = TestCtx::new("# case");
    let cursor = ctx.cursor();
    let err = cursor.unexpected("case");
    assert_eq!(err.kind, ParseErrorKind::Lex(LexErrorKind::InvalidCharacter));
    assert_eq!(err.span, Span::new(0, 1));
}

#[test]
fn test_synchronize() {
    let ctx = TestCtx::new("x y ] case _");
    let mut cursor = ctx.cursor();
    cursor.synchronize(&[TokenKind::Case, TokenKind::RBrace]);
    assert!(cursor.check(&TokenKind::Case));

    let before = cursor.position();
    cursor.synchronize(&[TokenKind::Case]);
    assert_eq!(cursor.position(), before);

    cursor.synchronize(&[TokenKind::Switch]);
    assert!(cursor.is_at_end());
}
