//! Lexer for the seqpat switch language, built on logos with string
//! interning.
//!
//! Lexing never fails: malformed input becomes `TokenKind::Error` tokens
//! that the parser reports with their span. The list always ends in `Eof`.

mod convert;
mod escape;
mod raw_token;

use logos::Logos;
use seqpat_ir::{LexErrorKind, Span, StringInterner, Token, TokenKind, TokenList};

use crate::convert::convert_token;
use crate::raw_token::RawToken;

/// Lex source code into a `TokenList`.
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());

        match token_result {
            Ok(raw) => {
                if let Some(kind) = convert_token(raw, logos.slice(), interner) {
                    result.push(Token::new(kind, span));
                }
            }
            Err(err) => {
                result.push(Token::new(TokenKind::Error(LexErrorKind::from(err)), span));
            }
        }
    }

    let end = Span::from_range(source.len()..source.len());
    result.push(Token::new(TokenKind::Eof, end));
    result
}

#[cfg(test)]
mod tests;
