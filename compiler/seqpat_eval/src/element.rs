//! What the matcher needs from the elements of a subject sequence.

use seqpat_ir::{Literal, StringInterner, Value};

/// An element of a sequence the matcher can inspect.
///
/// Implemented for the runtime [`Value`] and for plain `i64`, so host code
/// can match `&[i64]` directly without converting to values first.
pub trait Element: Sized {
    /// View the element as a sequence, for nested patterns.
    fn as_sequence(&self) -> Option<&[Self]>;

    /// Whether the element equals a pattern literal.
    fn eq_literal(&self, literal: &Literal, interner: &StringInterner) -> bool;

    /// Convert to a runtime value, for guards and body rendering.
    fn to_value(&self) -> Value;
}

impl Element for Value {
    #[inline]
    fn as_sequence(&self) -> Option<&[Value]> {
        self.as_list()
    }

    fn eq_literal(&self, literal: &Literal, interner: &StringInterner) -> bool {
        match (self, literal) {
            (Value::Int(a), Literal::Int(b)) => a == b,
            (Value::Bool(a), Literal::Bool(b)) => a == b,
            (Value::Char(a), Literal::Char(b)) => a == b,
            (Value::Str(a), Literal::Str(b)) => &**a == interner.lookup(*b),
            (Value::Null, Literal::Null) => true,
            _ => false,
        }
    }

    #[inline]
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl Element for i64 {
    #[inline]
    fn as_sequence(&self) -> Option<&[i64]> {
        None
    }

    #[inline]
    fn eq_literal(&self, literal: &Literal, _interner: &StringInterner) -> bool {
        matches!(literal, Literal::Int(n) if n == self)
    }

    #[inline]
    fn to_value(&self) -> Value {
        Value::Int(*self)
    }
}
