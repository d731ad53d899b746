//! Subject type parsing: `int`, `bool`, `char`, `str`, `any`, `[T]`, `T?`.

use seqpat_ir::{SubjectType, TokenKind};

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    pub(crate) fn parse_subject_type(&mut self) -> Result<SubjectType, ParseError> {
        let mut ty = match self.cursor.current_kind() {
            TokenKind::LBracket => {
                let open_span = self.cursor.advance().span;
                let elem = self.nested(Self::parse_subject_type)?;
                if self.cursor.is_at_end() {
                    return Err(self.unclosed(TokenKind::LBracket, open_span));
                }
                self.cursor.expect(&TokenKind::RBracket)?;
                SubjectType::List(Box::new(elem))
            }
            TokenKind::Ident(name) => {
                let ty = match self.cursor.interner().lookup(name) {
                    "int" => SubjectType::Int,
                    "bool" => SubjectType::Bool,
                    "char" => SubjectType::Char,
                    "str" => SubjectType::Str,
                    "any" => SubjectType::Any,
                    _ => return Err(self.expected_type()),
                };
                self.cursor.advance();
                ty
            }
            _ => return Err(self.expected_type()),
        };

        while self.cursor.eat(&TokenKind::Question) {
            ty = ty.nullable();
        }
        Ok(ty)
    }

    #[cold]
    fn expected_type(&self) -> ParseError {
        self.cursor.error_here(ParseErrorKind::ExpectedType {
            found: self.cursor.current_kind(),
        })
    }
}
