//! Guard parsing.
//!
//! ```text
//! guard   = or
//! or      = and { "||" and }
//! and     = unary { "&&" unary }
//! unary   = "!" unary | "(" or ")" | compare
//! compare = operand [ cmp_op operand ]
//! operand = IDENT | literal
//! ```

use seqpat_ir::{CompareOp, GuardExpr, Operand, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_guard(&mut self) -> Result<GuardExpr, ParseError> {
        let mut lhs = self.parse_guard_and()?;
        while self.cursor.eat(&TokenKind::OrOr) {
            let rhs = self.parse_guard_and()?;
            lhs = GuardExpr::Or(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_guard_and(&mut self) -> Result<GuardExpr, ParseError> {
        let mut lhs = self.parse_guard_unary()?;
        while self.cursor.eat(&TokenKind::AndAnd) {
            let rhs = self.parse_guard_unary()?;
            lhs = GuardExpr::And(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_guard_unary(&mut self) -> Result<GuardExpr, ParseError> {
        if self.cursor.eat(&TokenKind::Bang) {
            let inner = self.nested(Self::parse_guard_unary)?;
            return Ok(GuardExpr::Not(Box::new(inner)));
        }
        if self.cursor.check(&TokenKind::LParen) {
            let open_span = self.cursor.advance().span;
            let inner = self.nested(Self::parse_guard)?;
            if self.cursor.is_at_end() {
                return Err(self.unclosed(TokenKind::LParen, open_span));
            }
            self.cursor.expect(&TokenKind::RParen)?;
            return Ok(inner);
        }

        let lhs = self.parse_guard_operand()?;
        let Some(op) = compare_op(self.cursor.current_kind()) else {
            return Ok(GuardExpr::Operand(lhs));
        };
        self.cursor.advance();
        let rhs = self.parse_guard_operand()?;
        Ok(GuardExpr::Compare { op, lhs, rhs })
    }

    fn parse_guard_operand(&mut self) -> Result<Operand, ParseError> {
        if let TokenKind::Ident(name) = self.cursor.current_kind() {
            let span = self.cursor.advance().span;
            return Ok(Operand::Binding { name, span });
        }
        if self.at_literal() {
            let (value, span) = self.parse_literal()?;
            return Ok(Operand::Literal { value, span });
        }
        Err(self.cursor.unexpected("a binding or literal"))
    }
}

fn compare_op(kind: TokenKind) -> Option<CompareOp> {
    match kind {
        TokenKind::EqEq => Some(CompareOp::Eq),
        TokenKind::NotEq => Some(CompareOp::NotEq),
        TokenKind::Lt => Some(CompareOp::Lt),
        TokenKind::LtEq => Some(CompareOp::LtEq),
        TokenKind::Gt => Some(CompareOp::Gt),
        TokenKind::GtEq => Some(CompareOp::GtEq),
        _ => None,
    }
}
