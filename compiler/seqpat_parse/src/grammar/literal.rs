//! Literal parsing shared by patterns, guards and subject values.

use seqpat_ir::{Literal, Span, TokenKind};

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Whether the current token can start a literal.
    pub(crate) fn at_literal(&self) -> bool {
        matches!(
            self.cursor.current_kind(),
            TokenKind::Int(_)
                | TokenKind::Minus
                | TokenKind::Str(_)
                | TokenKind::Char(_)
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }

    /// Parse a literal: `0`, `-3`, `true`, `'c'`, `"s"`, `null`.
    ///
    /// The caller has checked [`at_literal`](Self::at_literal).
    pub(crate) fn parse_literal(&mut self) -> Result<(Literal, Span), ParseError> {
        let start = self.cursor.current_span();
        let literal = match self.cursor.current_kind() {
            TokenKind::Int(n) => {
                self.cursor.advance();
                Literal::Int(int_value(n, false, start)?)
            }
            TokenKind::Minus => {
                self.cursor.advance();
                let TokenKind::Int(n) = self.cursor.current_kind() else {
                    return Err(self.cursor.unexpected("integer"));
                };
                let span = start.merge(self.cursor.advance().span);
                return Ok((Literal::Int(int_value(n, true, span)?), span));
            }
            TokenKind::Str(name) => {
                self.cursor.advance();
                Literal::Str(name)
            }
            TokenKind::Char(c) => {
                self.cursor.advance();
                Literal::Char(c)
            }
            TokenKind::True => {
                self.cursor.advance();
                Literal::Bool(true)
            }
            TokenKind::False => {
                self.cursor.advance();
                Literal::Bool(false)
            }
            TokenKind::Null => {
                self.cursor.advance();
                Literal::Null
            }
            _ => return Err(self.cursor.unexpected("literal")),
        };
        Ok((literal, start))
    }
}

/// Apply the sign to an unsigned integer token, checking the `i64` range.
fn int_value(magnitude: u64, negative: bool, span: Span) -> Result<i64, ParseError> {
    let wide = i128::from(magnitude);
    let signed = if negative { -wide } else { wide };
    i64::try_from(signed).map_err(|_| ParseError::new(ParseErrorKind::IntegerOutOfRange, span))
}

#[cfg(test)]
mod tests;
