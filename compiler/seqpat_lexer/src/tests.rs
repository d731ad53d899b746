use pretty_assertions::assert_eq;

use super::*;

fn kinds(source: &str, interner: &StringInterner) -> Vec<TokenKind> {
    lex(source, interner).iter().map(|t| t.kind).collect()
}

#[test]
fn test_sequence_pattern_tokens() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let rest = interner.intern("rest");
    assert_eq!(
        kinds("[x, ...rest, _]", &interner),
        vec![
            TokenKind::LBracket,
            TokenKind::Ident(x),
            TokenKind::Comma,
            TokenKind::Ellipsis,
            TokenKind::Ident(rest),
            TokenKind::Comma,
            TokenKind::Underscore,
            TokenKind::RBracket,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keywords_and_operators() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("switch case if null true false => | ? : == != <= >= < > && || ! -", &interner),
        vec![
            TokenKind::Switch,
            TokenKind::Case,
            TokenKind::If,
            TokenKind::Null,
            TokenKind::True,
            TokenKind::False,
            TokenKind::FatArrow,
            TokenKind::Pipe,
            TokenKind::Question,
            TokenKind::Colon,
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::LtEq,
            TokenKind::GtEq,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::AndAnd,
            TokenKind::OrOr,
            TokenKind::Bang,
            TokenKind::Minus,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_identifiers_starting_with_keywords() {
    let interner = StringInterner::new();
    let cases = interner.intern("cases");
    let under = interner.intern("_tail");
    assert_eq!(
        kinds("cases _tail", &interner),
        vec![TokenKind::Ident(cases), TokenKind::Ident(under), TokenKind::Eof]
    );
}

#[test]
fn test_literals() {
    let interner = StringInterner::new();
    let hi = interner.intern("hi\n");
    assert_eq!(
        kinds(r#"-3 "hi\n" 'c' '\''"#, &interner),
        vec![
            TokenKind::Minus,
            TokenKind::Int(3),
            TokenKind::Str(hi),
            TokenKind::Char('c'),
            TokenKind::Char('\''),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_comments_and_whitespace_are_skipped() {
    let interner = StringInterner::new();
    let source = "// leading\n[\n  _ // trailing\n]\n";
    assert_eq!(
        kinds(source, &interner),
        vec![
            TokenKind::LBracket,
            TokenKind::Underscore,
            TokenKind::RBracket,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_spans() {
    let interner = StringInterner::new();
    let tokens = lex("[a, ...b]", &interner);
    assert_eq!(tokens[0].span, Span::new(0, 1));
    assert_eq!(tokens[3].span, Span::new(4, 7));
    assert_eq!(tokens[4].span, Span::new(7, 8));
    assert_eq!(tokens[tokens.len() - 1].span, Span::point(9));
}

#[test]
fn test_error_tokens() {
    let interner = StringInterner::new();
    let tokens = lex("[$, \"open\n 'ab' \"\\q\" 99999999999999999999]", &interner);
    let errors: Vec<LexErrorKind> = tokens.errors().map(|(kind, _)| kind).collect();
    assert_eq!(
        errors,
        vec![
            LexErrorKind::InvalidCharacter,
            LexErrorKind::UnterminatedString,
            LexErrorKind::InvalidChar,
            LexErrorKind::InvalidEscape,
            LexErrorKind::IntegerOverflow,
        ]
    );
    assert_eq!(tokens[tokens.len() - 2].kind, TokenKind::RBracket);
}

#[test]
fn test_empty_source_is_just_eof() {
    let interner = StringInterner::new();
    let tokens = lex("", &interner);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}
