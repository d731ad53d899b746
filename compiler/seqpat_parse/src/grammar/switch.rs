//! Switch declarations and case clauses.
//!
//! ```text
//! module = { switch }
//! switch = "switch" IDENT "(" [ IDENT [ ":" type ] ] ")" "{" { arm } "}"
//! arm    = "case" case_pattern { "|" case_pattern } [ "if" guard ] "=>" STRING
//! ```
//!
//! A malformed arm is recorded and skipped; parsing resumes at the next
//! `case`, so one mistake does not hide the rest of the switch.

use rustc_hash::FxHashMap;
use seqpat_ir::{Arm, Module, Name, Span, SwitchDecl, TokenKind};
use tracing::{debug, trace};

use crate::{ParseError, ParseErrorKind, Parser, ITEM_START};

/// Where to resume after a malformed arm.
const ARM_RECOVERY: &[TokenKind] = &[TokenKind::Case, TokenKind::RBrace, TokenKind::Switch];

impl Parser<'_> {
    pub(crate) fn parse_module(&mut self) -> Module {
        let mut switches = Vec::new();

        while !self.cursor.is_at_end() {
            if !self.cursor.check(&TokenKind::Switch) {
                let err = self.cursor.unexpected("a switch declaration");
                self.errors.push(err);
                self.cursor.advance();
                self.cursor.synchronize(ITEM_START);
                continue;
            }

            let errors_before = self.errors.len();
            match self.parse_switch() {
                Ok(decl) if self.errors.len() == errors_before => switches.push(decl),
                Ok(decl) => {
                    debug!(
                        name = self.cursor.interner().lookup(decl.name),
                        "dropping switch with malformed cases"
                    );
                }
                Err(err) => {
                    self.errors.push(err);
                    self.cursor.synchronize(ITEM_START);
                }
            }
        }

        Module { switches }
    }

    fn parse_switch(&mut self) -> Result<SwitchDecl, ParseError> {
        let start = self.cursor.expect(&TokenKind::Switch)?;
        let (name, name_span) = self.cursor.expect_ident("switch name")?;

        let open_paren = self.cursor.expect(&TokenKind::LParen)?;
        let mut param = None;
        let mut subject_ty = None;
        if let TokenKind::Ident(p) = self.cursor.current_kind() {
            self.cursor.advance();
            param = Some(p);
            if self.cursor.eat(&TokenKind::Colon) {
                subject_ty = Some(self.parse_subject_type()?);
            }
        }
        if self.cursor.is_at_end() {
            return Err(self.unclosed(TokenKind::LParen, open_paren));
        }
        self.cursor.expect(&TokenKind::RParen)?;

        let open_brace = self.cursor.expect(&TokenKind::LBrace)?;
        let mut arms = Vec::new();
        while !self.cursor.check(&TokenKind::RBrace) {
            if self.cursor.is_at_end() || self.cursor.check(&TokenKind::Switch) {
                return Err(self.unclosed(TokenKind::LBrace, open_brace));
            }
            match self.parse_arm() {
                Ok(arm) => arms.push(arm),
                Err(err) => {
                    self.errors.push(err);
                    self.cursor.synchronize(ARM_RECOVERY);
                }
            }
        }
        let close = self.cursor.advance().span;

        debug!(
            name = self.cursor.interner().lookup(name),
            arms = arms.len(),
            annotated = subject_ty.is_some(),
            "parsed switch"
        );

        Ok(SwitchDecl {
            name,
            name_span,
            param,
            subject_ty,
            arms,
            span: start.merge(close),
        })
    }

    fn parse_arm(&mut self) -> Result<Arm, ParseError> {
        let start = self.cursor.expect(&TokenKind::Case)?;

        let mut patterns = vec![self.parse_case_pattern()?];
        while self.cursor.eat(&TokenKind::Pipe) {
            patterns.push(self.parse_case_pattern()?);
        }

        let guard = if self.cursor.eat(&TokenKind::If) {
            Some(self.parse_guard()?)
        } else {
            None
        };

        self.cursor.expect(&TokenKind::FatArrow)?;
        let body = self.parse_body_template()?;
        let span = start.merge(body.span);
        let arm = Arm {
            patterns,
            guard,
            body,
            span,
        };
        self.check_arm_bindings(&arm)?;

        trace!(
            alternatives = arm.patterns.len(),
            guarded = arm.guard.is_some(),
            "parsed case"
        );
        Ok(arm)
    }

    /// All alternatives bind the same names, and the guard and body only
    /// use those names.
    fn check_arm_bindings(&self, arm: &Arm) -> Result<(), ParseError> {
        let interner = self.cursor.interner();
        let Some((first, others)) = arm.patterns.split_first() else {
            return Ok(());
        };
        let first_bindings = first.bindings();
        let bound: FxHashMap<Name, Span> = first_bindings.iter().copied().collect();

        for alt in others {
            let alt_bindings = alt.bindings();
            let alt_bound: FxHashMap<Name, Span> = alt_bindings.iter().copied().collect();

            if let Some(&(name, bound_at)) =
                first_bindings.iter().find(|(n, _)| !alt_bound.contains_key(n))
            {
                return Err(inconsistent(interner.lookup(name), bound_at, alt.span()));
            }
            if let Some(&(name, bound_at)) =
                alt_bindings.iter().find(|(n, _)| !bound.contains_key(n))
            {
                return Err(inconsistent(interner.lookup(name), bound_at, first.span()));
            }
        }

        let guard_refs = arm
            .guard
            .as_ref()
            .map(seqpat_ir::GuardExpr::referenced_bindings)
            .unwrap_or_default();
        for (name, span) in guard_refs.into_iter().chain(arm.body.holes()) {
            if !bound.contains_key(&name) {
                return Err(ParseError::new(
                    ParseErrorKind::UnknownBinding {
                        name: interner.lookup(name),
                    },
                    span,
                ));
            }
        }
        Ok(())
    }
}

fn inconsistent(name: &'static str, bound_at: Span, missing_in: Span) -> ParseError {
    ParseError::new(
        ParseErrorKind::InconsistentAlternativeBindings { name, bound_at },
        missing_in,
    )
}
