//! Runtime subject values.
//!
//! Subjects are immutable and cheaply clonable: strings and lists are
//! reference-counted, so a rest capture can hand out sub-slices without
//! copying elements.

use std::fmt;
use std::sync::Arc;

use seqpat_stack::ensure_sufficient_stack;

use crate::{Literal, StringInterner};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Char(char),
    Str(Arc<str>),
    List(Arc<[Value]>),
}

impl Value {
    pub fn str(s: &str) -> Self {
        Value::Str(Arc::from(s))
    }

    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(items.into_iter().collect())
    }

    pub fn ints(items: impl IntoIterator<Item = i64>) -> Self {
        Value::list(items.into_iter().map(Value::Int))
    }

    /// The value a pattern or guard literal denotes.
    pub fn from_literal(literal: &Literal, interner: &StringInterner) -> Self {
        match *literal {
            Literal::Int(n) => Value::Int(n),
            Literal::Bool(b) => Value::Bool(b),
            Literal::Char(c) => Value::Char(c),
            Literal::Str(name) => Value::str(interner.lookup(name)),
            Literal::Null => Value::Null,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Short type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Char(_) => "char",
            Value::Str(_) => "str",
            Value::List(_) => "list",
        }
    }

    /// Render for template interpolation: strings and chars appear without
    /// quotes at the top level, everything else as [`Display`](fmt::Display).
    pub fn interpolate(&self) -> impl fmt::Display + '_ {
        Interpolated(self)
    }
}

/// Render a slice the way a list value prints: `[1, 2]`.
pub fn display_slice(items: &[Value]) -> impl fmt::Display + '_ {
    SliceDisplay(items)
}

struct SliceDisplay<'a>(&'a [Value]);

impl fmt::Display for SliceDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            write!(f, "[")?;
            for (i, item) in self.0.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{item}")?;
            }
            write!(f, "]")
        })
    }
}

struct Interpolated<'a>(&'a Value);

impl fmt::Display for Interpolated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Str(s) => write!(f, "{s}"),
            Value::Char(c) => write!(f, "{c}"),
            other => write!(f, "{other}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Char(c) => write!(f, "{c:?}"),
            Value::Str(s) => write!(f, "{:?}", &**s),
            Value::List(items) => write!(f, "{}", display_slice(items)),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items.into())
    }
}

#[cfg(test)]
mod tests;
