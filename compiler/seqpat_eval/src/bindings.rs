//! Match results: names bound to parts of the subject.

use std::fmt;

use seqpat_ir::{display_slice, Name, Value};
use smallvec::SmallVec;

use crate::Element;

/// What a name is bound to.
///
/// Every variant borrows from the subject; a rest capture is a view into
/// the subject's storage, never a copy.
pub enum Matched<'v, T> {
    /// A single element.
    Element(&'v T),
    /// A contiguous run of elements: a rest capture, or a whole sequence
    /// subject bound by a catch-all.
    Sequence(&'v [T]),
    /// The absent subject.
    Null,
}

impl<T> Clone for Matched<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Matched<'_, T> {}

impl<T: PartialEq> PartialEq for Matched<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Matched::Element(a), Matched::Element(b)) => a == b,
            (Matched::Sequence(a), Matched::Sequence(b)) => a == b,
            (Matched::Null, Matched::Null) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Matched<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Matched<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matched::Element(e) => f.debug_tuple("Element").field(e).finish(),
            Matched::Sequence(s) => f.debug_tuple("Sequence").field(s).finish(),
            Matched::Null => write!(f, "Null"),
        }
    }
}

impl<T: Element> Matched<'_, T> {
    /// Copy the matched part out as a runtime value.
    pub fn to_value(&self) -> Value {
        match self {
            Matched::Element(e) => e.to_value(),
            Matched::Sequence(s) => Value::list(s.iter().map(Element::to_value)),
            Matched::Null => Value::Null,
        }
    }

    /// Render for template interpolation.
    pub(crate) fn interpolated(&self) -> String {
        match self {
            Matched::Element(e) => e.to_value().interpolate().to_string(),
            Matched::Sequence(s) => {
                let items: Vec<Value> = s.iter().map(Element::to_value).collect();
                let rendered = display_slice(&items).to_string();
                rendered
            }
            Matched::Null => "null".to_string(),
        }
    }
}

/// Bindings produced by one successful match, in source order.
///
/// Names are unique (the parser and pattern builder reject duplicates), so
/// lookup is a linear scan over a handful of entries.
pub struct Bindings<'v, T> {
    entries: SmallVec<[(Name, Matched<'v, T>); 4]>,
}

impl<'v, T> Bindings<'v, T> {
    pub fn new() -> Self {
        Bindings {
            entries: SmallVec::new(),
        }
    }

    /// The value bound to `name`, if any.
    pub fn get(&self, name: Name) -> Option<Matched<'v, T>> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, m)| *m)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Name, Matched<'v, T>)> + '_ {
        self.entries.iter().copied()
    }

    #[inline]
    pub(crate) fn push(&mut self, name: Name, matched: Matched<'v, T>) {
        self.entries.push((name, matched));
    }
}

impl<T> Default for Bindings<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Bindings<'_, T> {
    fn clone(&self) -> Self {
        Bindings {
            entries: self.entries.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Bindings<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T: Eq> Eq for Bindings<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Bindings<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(n, m)| (n, m)))
            .finish()
    }
}
