//! Guard expressions: `case [x, y, ...] if x == y`.
//!
//! Guards compare bindings against bindings or literals and combine the
//! comparisons with `&&`, `||` and `!`. Anything richer belongs to a host
//! language and is plugged in through the evaluator's `Guard` trait instead.

use crate::{Literal, Name, Span};

/// A leaf value in a guard.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operand {
    Binding { name: Name, span: Span },
    Literal { value: Literal, span: Span },
}

impl Operand {
    pub fn span(&self) -> Span {
        match self {
            Operand::Binding { span, .. } | Operand::Literal { span, .. } => *span,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CompareOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl CompareOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::NotEq => "!=",
            CompareOp::Lt => "<",
            CompareOp::LtEq => "<=",
            CompareOp::Gt => ">",
            CompareOp::GtEq => ">=",
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum GuardExpr {
    /// A bare operand, which must evaluate to a boolean.
    Operand(Operand),
    Compare {
        op: CompareOp,
        lhs: Operand,
        rhs: Operand,
    },
    Not(Box<GuardExpr>),
    And(Box<GuardExpr>, Box<GuardExpr>),
    Or(Box<GuardExpr>, Box<GuardExpr>),
}

impl GuardExpr {
    /// Every binding the guard reads, in source order.
    pub fn referenced_bindings(&self) -> Vec<(Name, Span)> {
        let mut out = Vec::new();
        self.collect_refs(&mut out);
        out
    }

    fn collect_refs(&self, out: &mut Vec<(Name, Span)>) {
        match self {
            GuardExpr::Operand(op) => push_binding(op, out),
            GuardExpr::Compare { lhs, rhs, .. } => {
                push_binding(lhs, out);
                push_binding(rhs, out);
            }
            GuardExpr::Not(inner) => inner.collect_refs(out),
            GuardExpr::And(a, b) | GuardExpr::Or(a, b) => {
                a.collect_refs(out);
                b.collect_refs(out);
            }
        }
    }
}

fn push_binding(op: &Operand, out: &mut Vec<(Name, Span)>) {
    if let Operand::Binding { name, span } = op {
        out.push((*name, *span));
    }
}
