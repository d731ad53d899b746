//! Pattern parsing.
//!
//! ```text
//! case_pattern     = "null" | "_" | IDENT | sequence_pattern
//! sequence_pattern = "[" [ item { "," item } [ "," ] ] "]"
//! item             = "..." [ IDENT ] | element
//! element          = "_" | IDENT | literal | sequence_pattern
//! ```
//!
//! Items before the rest marker form the prefix, items after it the
//! suffix. Each bracket level may hold one rest marker.

use seqpat_ir::{CasePattern, ElementPattern, RestSpec, SequencePattern, TokenKind};
use tracing::trace;

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse the top-level pattern of one case alternative.
    pub(crate) fn parse_case_pattern(&mut self) -> Result<CasePattern, ParseError> {
        let span = self.cursor.current_span();
        match self.cursor.current_kind() {
            TokenKind::Null => {
                self.cursor.advance();
                Ok(CasePattern::Null(span))
            }
            TokenKind::Underscore => {
                self.cursor.advance();
                Ok(CasePattern::CatchAll { name: None, span })
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Ok(CasePattern::CatchAll {
                    name: Some(name),
                    span,
                })
            }
            TokenKind::LBracket => self.parse_sequence_pattern().map(CasePattern::Sequence),
            found => Err(self
                .cursor
                .error_here(ParseErrorKind::ExpectedPattern { found })),
        }
    }

    /// Parse a bracketed sequence pattern.
    pub(crate) fn parse_sequence_pattern(&mut self) -> Result<SequencePattern, ParseError> {
        self.nested(Self::parse_sequence_items)
    }

    fn parse_sequence_items(&mut self) -> Result<SequencePattern, ParseError> {
        let open_span = self.cursor.expect(&TokenKind::LBracket)?;
        let mut prefix = Vec::new();
        let mut suffix = Vec::new();
        let mut rest = RestSpec::None;

        while !self.cursor.check(&TokenKind::RBracket) {
            if self.cursor.is_at_end() {
                return Err(self.unclosed(TokenKind::LBracket, open_span));
            }

            if self.cursor.check(&TokenKind::Ellipsis) {
                let marker = self.parse_rest_marker()?;
                if let Some(first) = rest.span() {
                    return Err(ParseError::new(
                        ParseErrorKind::MultipleRestMarkers { first },
                        marker.span().unwrap_or(open_span),
                    ));
                }
                rest = marker;
            } else {
                let element = self.parse_element_pattern()?;
                if rest.is_present() {
                    suffix.push(element);
                } else {
                    prefix.push(element);
                }
            }

            if !self.cursor.check(&TokenKind::RBracket) {
                if self.cursor.is_at_end() {
                    return Err(self.unclosed(TokenKind::LBracket, open_span));
                }
                self.cursor.expect(&TokenKind::Comma)?;
            }
        }
        let close_span = self.cursor.advance().span;
        let span = open_span.merge(close_span);

        trace!(
            prefix = prefix.len(),
            rest = rest.is_present(),
            suffix = suffix.len(),
            "sequence pattern"
        );

        SequencePattern::new(prefix, rest, suffix, span).map_err(|err| {
            let (kind, span) = ParseErrorKind::from_pattern_error(&err, self.cursor.interner());
            ParseError::new(kind, span)
        })
    }

    /// `...` or `...name`.
    fn parse_rest_marker(&mut self) -> Result<RestSpec, ParseError> {
        let dots = self.cursor.expect(&TokenKind::Ellipsis)?;
        if let TokenKind::Ident(name) = self.cursor.current_kind() {
            let name_span = self.cursor.advance().span;
            Ok(RestSpec::Named {
                name,
                span: dots.merge(name_span),
            })
        } else {
            Ok(RestSpec::Anonymous { span: dots })
        }
    }

    fn parse_element_pattern(&mut self) -> Result<ElementPattern, ParseError> {
        let span = self.cursor.current_span();
        match self.cursor.current_kind() {
            TokenKind::Underscore => {
                self.cursor.advance();
                Ok(ElementPattern::Wildcard(span))
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Ok(ElementPattern::Binding { name, span })
            }
            TokenKind::LBracket => self.parse_sequence_pattern().map(ElementPattern::Nested),
            _ if self.at_literal() => {
                let (value, span) = self.parse_literal()?;
                Ok(ElementPattern::Literal { value, span })
            }
            found => Err(self
                .cursor
                .error_here(ParseErrorKind::ExpectedPattern { found })),
        }
    }

    /// Error for input ending inside `open`.
    #[cold]
    pub(crate) fn unclosed(&self, open: TokenKind, open_span: seqpat_ir::Span) -> ParseError {
        ParseError::new(
            ParseErrorKind::UnclosedDelimiter { open, open_span },
            self.cursor.current_span(),
        )
    }
}
