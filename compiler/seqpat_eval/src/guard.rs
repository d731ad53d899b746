//! Guards: conditions evaluated after a structural match.
//!
//! A guard sees the clause's bindings and can veto the match, in which case
//! the selector moves on to the next clause.

use seqpat_ir::{CompareOp, GuardExpr, Operand, StringInterner, Value};

use crate::{Bindings, Element, EvalError};

/// A condition on the bindings of a matched clause.
pub trait Guard<T>: Send + Sync {
    fn check(&self, bindings: &Bindings<'_, T>, interner: &StringInterner)
        -> Result<bool, EvalError>;
}

/// Guard backed by a Rust closure.
///
/// ```ignore
/// let positive = GuardFn(|b: &Bindings<'_, i64>| matches!(b.get(x), Some(Matched::Element(n)) if *n > 0));
/// ```
pub struct GuardFn<F>(pub F);

impl<T, F> Guard<T> for GuardFn<F>
where
    F: Fn(&Bindings<'_, T>) -> bool + Send + Sync,
{
    fn check(
        &self,
        bindings: &Bindings<'_, T>,
        _interner: &StringInterner,
    ) -> Result<bool, EvalError> {
        Ok((self.0)(bindings))
    }
}

impl<T: Element> Guard<T> for GuardExpr {
    fn check(
        &self,
        bindings: &Bindings<'_, T>,
        interner: &StringInterner,
    ) -> Result<bool, EvalError> {
        match self {
            GuardExpr::Operand(op) => match operand_value(op, bindings, interner)? {
                Value::Bool(b) => Ok(b),
                other => Err(EvalError::NonBoolGuard {
                    found: other.type_name(),
                    span: op.span(),
                }),
            },
            GuardExpr::Compare { op, lhs, rhs } => {
                let l = operand_value(lhs, bindings, interner)?;
                let r = operand_value(rhs, bindings, interner)?;
                compare(*op, &l, &r).ok_or_else(|| EvalError::GuardTypeMismatch {
                    op: op.as_str(),
                    lhs: l.type_name(),
                    rhs: r.type_name(),
                    span: lhs.span().merge(rhs.span()),
                })
            }
            GuardExpr::Not(inner) => Ok(!inner.check(bindings, interner)?),
            GuardExpr::And(a, b) => Ok(a.check(bindings, interner)? && b.check(bindings, interner)?),
            GuardExpr::Or(a, b) => Ok(a.check(bindings, interner)? || b.check(bindings, interner)?),
        }
    }
}

fn operand_value<T: Element>(
    operand: &Operand,
    bindings: &Bindings<'_, T>,
    interner: &StringInterner,
) -> Result<Value, EvalError> {
    match operand {
        Operand::Literal { value, .. } => Ok(Value::from_literal(value, interner)),
        Operand::Binding { name, span } => bindings
            .get(*name)
            .map(|matched| matched.to_value())
            .ok_or_else(|| EvalError::UnboundName {
                name: interner.lookup(*name).to_string(),
                span: *span,
            }),
    }
}

/// `None` when an ordering is asked of values that have none.
///
/// Equality is structural and defined for every pair of values; ordering
/// only between two ints, two chars or two strings.
fn compare(op: CompareOp, lhs: &Value, rhs: &Value) -> Option<bool> {
    match op {
        CompareOp::Eq => return Some(lhs == rhs),
        CompareOp::NotEq => return Some(lhs != rhs),
        _ => {}
    }
    let ordering = match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::Char(a), Value::Char(b)) => a.cmp(b),
        (Value::Str(a), Value::Str(b)) => a.cmp(b),
        _ => return None,
    };
    Some(match op {
        CompareOp::Lt => ordering.is_lt(),
        CompareOp::LtEq => ordering.is_le(),
        CompareOp::Gt => ordering.is_gt(),
        CompareOp::GtEq => ordering.is_ge(),
        CompareOp::Eq => ordering.is_eq(),
        CompareOp::NotEq => ordering.is_ne(),
    })
}
