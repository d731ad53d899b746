//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.

use seqpat_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList};
use tracing::trace;

use crate::{ParseError, ParseErrorKind};

/// Cursor for navigating tokens.
///
/// Invariant: the token list ends in `Eof` and the cursor never moves past
/// it, so `current()` is always valid.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    /// Get a reference to the string interner.
    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Get the current position in the token stream.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &'a Token {
        let tokens: &'a TokenList = self.tokens;
        tokens
            .get(self.pos)
            .or_else(|| tokens.get(tokens.len().saturating_sub(1)))
            .unwrap_or(&EOF_TOKEN)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Get the previous token's span.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens.get(self.pos - 1).map_or(Span::DUMMY, |t| t.span)
        } else {
            Span::DUMMY
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token has the same kind as `kind`, ignoring
    /// payloads.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind().same_kind(kind)
    }

    /// Peek at the next token's kind (one-token lookahead).
    pub fn peek_next_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    /// Advance to the next token and return the consumed token.
    ///
    /// At `Eof` the cursor stays put.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        trace!(
            pos = self.pos,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect the current token to be of the given kind, advance and return
    /// its span.
    #[inline]
    pub fn expect(&mut self, kind: &TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(self.unexpected(kind.display_name()))
        }
    }

    /// Expect and consume an identifier, returning its interned name.
    pub fn expect_ident(&mut self, context: &'static str) -> Result<(Name, Span), ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            let span = self.advance().span;
            Ok((name, span))
        } else {
            Err(self.error_here(ParseErrorKind::ExpectedIdentifier {
                found: self.current_kind(),
                context,
            }))
        }
    }

    /// Error for the current token when `expected` was required.
    ///
    /// Error tokens from the lexer surface as their lexical problem rather
    /// than as an unexpected token.
    #[cold]
    pub fn unexpected(&self, expected: &'static str) -> ParseError {
        let found = self.current_kind();
        self.error_here(ParseErrorKind::UnexpectedToken { found, expected })
    }

    /// Build an error of `kind` at the current token, unless the current
    /// token is a lexer error, which takes precedence.
    #[cold]
    pub fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        let kind = match self.current_kind() {
            TokenKind::Error(lex) => ParseErrorKind::Lex(lex),
            _ => kind,
        };
        ParseError::new(kind, self.current_span())
    }

    /// Skip tokens until one of `stops` (or `Eof`) is current.
    pub fn synchronize(&mut self, stops: &[TokenKind]) {
        while !self.is_at_end() && !stops.iter().any(|k| self.check(k)) {
            self.advance();
        }
    }
}

static EOF_TOKEN: Token = Token {
    kind: TokenKind::Eof,
    span: Span::DUMMY,
};

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
