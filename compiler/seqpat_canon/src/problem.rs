//! Problems found by the static checker.

use seqpat_diagnostic::{Diagnostic, ErrorCode};
use seqpat_ir::Span;

/// A coverage problem in one switch.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum PatternProblem {
    /// Some value of the subject type reaches no clause.
    NonExhaustive {
        /// Span of the switch name.
        switch_span: Span,
        /// The subject type the check ran against, as written.
        subject_ty: String,
        /// Example patterns no clause matches.
        missing: Vec<String>,
    },
    /// A clause that earlier unguarded clauses already cover.
    Unreachable {
        clause_span: Span,
        switch_span: Span,
        arm_index: usize,
    },
}

impl PatternProblem {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            PatternProblem::NonExhaustive { .. } => ErrorCode::E3002,
            PatternProblem::Unreachable { .. } => ErrorCode::E3003,
        }
    }

    /// Missing coverage is an error; an unreachable clause is only a warning.
    pub fn is_error(&self) -> bool {
        matches!(self, PatternProblem::NonExhaustive { .. })
    }

    pub fn span(&self) -> Span {
        match self {
            PatternProblem::NonExhaustive { switch_span, .. } => *switch_span,
            PatternProblem::Unreachable { clause_span, .. } => *clause_span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            PatternProblem::NonExhaustive {
                switch_span,
                subject_ty,
                missing,
            } => {
                let listed = missing
                    .iter()
                    .map(|m| format!("`{m}`"))
                    .collect::<Vec<_>>()
                    .join(", ");
                let noun = if missing.len() == 1 {
                    "pattern"
                } else {
                    "patterns"
                };
                Diagnostic::error(ErrorCode::E3002)
                    .with_message(format!("non-exhaustive switch: {noun} {listed} not covered"))
                    .with_label(*switch_span, format!("{noun} {listed} not covered"))
                    .with_note(format!("the subject has type `{subject_ty}`"))
                    .with_suggestion(
                        "add clauses for the missing patterns, or a catch-all `_` clause",
                    )
            }
            PatternProblem::Unreachable {
                clause_span,
                switch_span,
                ..
            } => Diagnostic::warning(ErrorCode::E3003)
                .with_message("unreachable clause")
                .with_label(*clause_span, "every value matching this is handled above")
                .with_secondary_label(*switch_span, "in this switch")
                .with_suggestion("remove this clause or move it before the clauses covering it"),
        }
    }
}
