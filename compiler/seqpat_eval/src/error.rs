//! Evaluation errors.

use seqpat_diagnostic::{Diagnostic, ErrorCode};
use seqpat_ir::Span;
use thiserror::Error;

/// Errors raised while selecting a case or rendering its body.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum EvalError {
    /// No clause accepted the subject.
    ///
    /// Cannot happen for a switch the exhaustiveness checker accepted.
    #[error("no case matched the subject `{subject}`")]
    NoMatch { subject: String },

    /// An ordering comparison between values without a common order.
    #[error("cannot compare {lhs} and {rhs} with `{op}`")]
    GuardTypeMismatch {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
        span: Span,
    },

    /// A bare guard operand that is not a boolean.
    #[error("guard condition must be a bool, found {found}")]
    NonBoolGuard { found: &'static str, span: Span },

    /// A guard or template used a name the clause does not bind.
    #[error("`{name}` is not bound by the selected case")]
    UnboundName { name: String, span: Span },
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::NoMatch { .. } => ErrorCode::E6001,
            EvalError::GuardTypeMismatch { .. } | EvalError::NonBoolGuard { .. } => {
                ErrorCode::E6002
            }
            EvalError::UnboundName { .. } => ErrorCode::E9001,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            EvalError::NoMatch { .. } => None,
            EvalError::GuardTypeMismatch { span, .. }
            | EvalError::NonBoolGuard { span, .. }
            | EvalError::UnboundName { span, .. } => Some(*span),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(self.to_string());
        if let Some(span) = self.span() {
            diag = diag.with_label(span, "while evaluating this");
        }
        if let EvalError::NoMatch { .. } = self {
            diag = diag.with_note("run `seqpat check` to list the values no case covers");
        }
        diag
    }
}
