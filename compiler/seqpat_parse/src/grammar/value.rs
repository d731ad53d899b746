//! Subject value parsing: `null`, literals and nested lists.

use seqpat_ir::{TokenKind, Value};

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    pub(crate) fn parse_value(&mut self) -> Result<Value, ParseError> {
        if self.cursor.check(&TokenKind::LBracket) {
            return self.nested(Self::parse_list_value);
        }
        if !self.at_literal() {
            return Err(self.cursor.error_here(ParseErrorKind::ExpectedValue {
                found: self.cursor.current_kind(),
            }));
        }
        let (literal, _) = self.parse_literal()?;
        Ok(Value::from_literal(&literal, self.cursor.interner()))
    }

    fn parse_list_value(&mut self) -> Result<Value, ParseError> {
        let open_span = self.cursor.expect(&TokenKind::LBracket)?;
        let mut items = Vec::new();
        while !self.cursor.check(&TokenKind::RBracket) {
            if self.cursor.is_at_end() {
                return Err(self.unclosed(TokenKind::LBracket, open_span));
            }
            items.push(self.parse_value()?);
            if !self.cursor.check(&TokenKind::RBracket) {
                if self.cursor.is_at_end() {
                    return Err(self.unclosed(TokenKind::LBracket, open_span));
                }
                self.cursor.expect(&TokenKind::Comma)?;
            }
        }
        self.cursor.advance();
        Ok(Value::from(items))
    }
}
