//! Token Conversion
//!
//! Converts raw logos tokens to final `TokenKind` with string interning.

use seqpat_ir::{LexErrorKind, StringInterner, TokenKind};

use crate::escape::unescape;
use crate::raw_token::RawToken;

/// Convert a raw token to a `TokenKind`, interning strings.
///
/// Returns `None` for trivia (comments).
pub(crate) fn convert_token(
    raw: RawToken,
    slice: &str,
    interner: &StringInterner,
) -> Option<TokenKind> {
    let kind = match raw {
        RawToken::LineComment => return None,

        RawToken::Int(n) => TokenKind::Int(n),
        RawToken::String => match unescape(&slice[1..slice.len() - 1]) {
            Some(text) => TokenKind::Str(interner.intern(&text)),
            None => TokenKind::Error(LexErrorKind::InvalidEscape),
        },
        RawToken::UnterminatedString => TokenKind::Error(LexErrorKind::UnterminatedString),
        RawToken::Char => convert_char(&slice[1..slice.len() - 1]),
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        RawToken::Switch => TokenKind::Switch,
        RawToken::Case => TokenKind::Case,
        RawToken::If => TokenKind::If,
        RawToken::Null => TokenKind::Null,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::Underscore => TokenKind::Underscore,

        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Question => TokenKind::Question,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::FatArrow => TokenKind::FatArrow,
        RawToken::Ellipsis => TokenKind::Ellipsis,
        RawToken::Minus => TokenKind::Minus,

        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::AndAnd => TokenKind::AndAnd,
        RawToken::OrOr => TokenKind::OrOr,
        RawToken::Bang => TokenKind::Bang,
    };
    Some(kind)
}

fn convert_char(body: &str) -> TokenKind {
    let Some(text) = unescape(body) else {
        return TokenKind::Error(LexErrorKind::InvalidEscape);
    };
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => TokenKind::Char(c),
        _ => TokenKind::Error(LexErrorKind::InvalidChar),
    }
}
