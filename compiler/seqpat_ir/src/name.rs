//! Interned identifier.
//!
//! Binding names, rest-capture names, switch names and string literals are
//! all interned, so equality checks in the matcher and checker are `u32`
//! comparisons.

use std::fmt;

/// Index of a string in a [`StringInterner`](crate::StringInterner).
///
/// A `Name` is only meaningful together with the interner that produced it.
/// Names from one interner are dense: the n-th distinct string gets index n.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// The empty string, interned first by every interner.
    pub const EMPTY: Name = Name(0);

    #[inline]
    pub(crate) const fn from_index(index: u32) -> Self {
        Name(index)
    }

    /// Position in the interner's string table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name#{}", self.0)
    }
}

#[cfg(test)]
mod tests;
