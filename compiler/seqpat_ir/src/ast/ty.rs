//! Declared subject types.

use std::fmt;

static ANY: SubjectType = SubjectType::Any;

/// The type written after the switch parameter: `xs: [int]?`.
///
/// Only the shape matters to the checker: which constructors can occur at
/// each position, and whether `null` is a value of the type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum SubjectType {
    /// Any value; an infinite domain with no structure the checker can split.
    Any,
    Int,
    Bool,
    Char,
    Str,
    /// `[T]`
    List(Box<SubjectType>),
    /// `T?`
    Nullable(Box<SubjectType>),
}

impl SubjectType {
    /// `[any]`, the default subject type.
    pub fn any_list() -> Self {
        SubjectType::List(Box::new(SubjectType::Any))
    }

    #[must_use]
    pub fn nullable(self) -> Self {
        match self {
            SubjectType::Nullable(_) => self,
            other => SubjectType::Nullable(Box::new(other)),
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, SubjectType::Nullable(_) | SubjectType::Any)
    }

    /// Strip one level of `?`.
    pub fn non_null(&self) -> &SubjectType {
        match self {
            SubjectType::Nullable(inner) => inner,
            other => other,
        }
    }

    /// Element type when this is a (possibly nullable) list.
    pub fn element(&self) -> Option<&SubjectType> {
        match self.non_null() {
            SubjectType::List(elem) => Some(elem),
            SubjectType::Any => Some(&ANY),
            _ => None,
        }
    }
}

impl fmt::Display for SubjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectType::Any => write!(f, "any"),
            SubjectType::Int => write!(f, "int"),
            SubjectType::Bool => write!(f, "bool"),
            SubjectType::Char => write!(f, "char"),
            SubjectType::Str => write!(f, "str"),
            SubjectType::List(elem) => write!(f, "[{elem}]"),
            SubjectType::Nullable(inner) => write!(f, "{inner}?"),
        }
    }
}
