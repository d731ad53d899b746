//! String interner shared by the parser, the checker and evaluation threads.
//!
//! Patterns are interned once while parsing and only looked up afterwards,
//! so a single `RwLock` over one table is enough: lookups take the read
//! lock, and only a string seen for the first time takes the write lock.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::Name;

/// Words the lexer turns into keyword tokens; interned up front so lexing a
/// switch never has to grow the table for them.
const KEYWORDS: &[&str] = &[
    "switch", "case", "if", "null", "true", "false", "int", "bool", "char", "str", "any",
];

/// The interner ran out of `u32` indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InternError {
    pub count: usize,
}

impl fmt::Display for InternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "string interner is full ({} strings)", self.count)
    }
}

impl std::error::Error for InternError {}

#[derive(Default)]
struct Table {
    indices: FxHashMap<&'static str, Name>,
    strings: Vec<&'static str>,
}

impl Table {
    fn insert(&mut self, s: &str) -> Result<Name, InternError> {
        if let Some(&name) = self.indices.get(s) {
            return Ok(name);
        }
        let index = u32::try_from(self.strings.len()).map_err(|_| InternError {
            count: self.strings.len(),
        })?;
        let name = Name::from_index(index);
        // Interned strings live for the rest of the process.
        let stored: &'static str = Box::leak(s.into());
        self.strings.push(stored);
        self.indices.insert(stored, name);
        Ok(name)
    }
}

/// Maps strings to [`Name`]s and back.
pub struct StringInterner {
    table: RwLock<Table>,
}

impl StringInterner {
    /// An interner holding the empty string (as [`Name::EMPTY`]) and the
    /// switch-language keywords.
    pub fn new() -> Self {
        let mut table = Table::default();
        for s in std::iter::once("").chain(KEYWORDS.iter().copied()) {
            // A fresh table has room for a dozen strings.
            let _ = table.insert(s);
        }
        StringInterner {
            table: RwLock::new(table),
        }
    }

    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        if let Some(&name) = self.table.read().indices.get(s) {
            return Ok(name);
        }
        self.table.write().insert(s)
    }

    /// Intern `s`, returning the same `Name` for equal strings.
    ///
    /// # Panics
    /// Panics once more than `u32::MAX` distinct strings have been interned.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// The string behind `name`.
    ///
    /// A `Name` from a different interner yields the empty string or an
    /// unrelated entry.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table
            .read()
            .strings
            .get(name.index())
            .copied()
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// True when nothing besides the empty string is interned.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable handle to one [`StringInterner`].
///
/// Clones share the table, so names produced while parsing stay valid for
/// every thread evaluating the resulting selectors.
#[derive(Clone, Default)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
