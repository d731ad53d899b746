//! Sequence pattern AST.
//!
//! A `case [...]` pattern is a prefix of element patterns, an optional rest
//! marker (`...` or `...name`) and a suffix of element patterns. The
//! structure is validated on construction, so a `SequencePattern` value
//! always satisfies:
//!
//! - a non-empty suffix implies a rest marker;
//! - every binding name (elements, nested patterns, rest capture) is unique.
//!
//! "At most one rest marker" holds by construction: there is a single
//! [`RestSpec`] slot per pattern.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{Name, Span, StringInterner};

/// Literal element value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    Int(i64),
    Bool(bool),
    Char(char),
    /// Interned string contents.
    Str(Name),
    Null,
}

impl Literal {
    /// Render the literal the way it is written in source.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> impl fmt::Display + 'a {
        LiteralDisplay {
            literal: self,
            interner,
        }
    }
}

struct LiteralDisplay<'a> {
    literal: &'a Literal,
    interner: &'a StringInterner,
}

impl fmt::Display for LiteralDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.literal {
            Literal::Int(n) => write!(f, "{n}"),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Char(c) => write!(f, "{c:?}"),
            Literal::Str(name) => write!(f, "{:?}", self.interner.lookup(*name)),
            Literal::Null => write!(f, "null"),
        }
    }
}

/// Pattern for a single element position.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ElementPattern {
    /// `_`
    Wildcard(Span),
    /// `0`, `-3`, `true`, `'c'`, `"s"`, `null`
    Literal { value: Literal, span: Span },
    /// `x`
    Binding { name: Name, span: Span },
    /// `[a, ...b]` in element position (arrays of arrays)
    Nested(SequencePattern),
}

impl ElementPattern {
    pub fn span(&self) -> Span {
        match self {
            ElementPattern::Wildcard(span)
            | ElementPattern::Literal { span, .. }
            | ElementPattern::Binding { span, .. } => *span,
            ElementPattern::Nested(seq) => seq.span,
        }
    }

    /// Shorthand for programmatic construction.
    pub fn binding(name: Name) -> Self {
        ElementPattern::Binding {
            name,
            span: Span::DUMMY,
        }
    }

    /// Shorthand for programmatic construction.
    pub fn literal(value: Literal) -> Self {
        ElementPattern::Literal {
            value,
            span: Span::DUMMY,
        }
    }

    fn collect_bindings(&self, out: &mut Vec<(Name, Span)>) {
        match self {
            ElementPattern::Binding { name, span } => out.push((*name, *span)),
            ElementPattern::Nested(seq) => seq.collect_bindings(out),
            ElementPattern::Wildcard(_) | ElementPattern::Literal { .. } => {}
        }
    }
}

/// The rest marker of a sequence pattern.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RestSpec {
    /// No marker: the subject length must equal `prefix + suffix`.
    None,
    /// `...`: zero or more extra elements, not captured.
    Anonymous { span: Span },
    /// `...name`: zero or more extra elements, bound to `name`.
    Named { name: Name, span: Span },
}

impl RestSpec {
    #[inline]
    pub fn is_present(&self) -> bool {
        !matches!(self, RestSpec::None)
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            RestSpec::None => None,
            RestSpec::Anonymous { span } | RestSpec::Named { span, .. } => Some(*span),
        }
    }
}

/// Structural violation found while building a [`SequencePattern`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum PatternError {
    /// Trailing elements were supplied without a rest marker.
    SuffixWithoutRest { span: Span },
    /// Two bindings in one pattern claim the same name.
    DuplicateBinding {
        name: Name,
        first: Span,
        second: Span,
    },
}

/// One `case [...]` sequence pattern.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SequencePattern {
    prefix: Vec<ElementPattern>,
    rest: RestSpec,
    suffix: Vec<ElementPattern>,
    span: Span,
}

impl SequencePattern {
    /// Build a pattern, checking its structural invariants.
    pub fn new(
        prefix: Vec<ElementPattern>,
        rest: RestSpec,
        suffix: Vec<ElementPattern>,
        span: Span,
    ) -> Result<Self, PatternError> {
        if !rest.is_present() {
            if let Some(first) = suffix.first() {
                return Err(PatternError::SuffixWithoutRest { span: first.span() });
            }
        }

        let pattern = SequencePattern {
            prefix,
            rest,
            suffix,
            span,
        };

        let mut seen: FxHashMap<Name, Span> = FxHashMap::default();
        for (name, span) in pattern.bindings() {
            if let Some(&first) = seen.get(&name) {
                return Err(PatternError::DuplicateBinding {
                    name,
                    first,
                    second: span,
                });
            }
            seen.insert(name, span);
        }

        Ok(pattern)
    }

    /// Fixed-length pattern: `[p0, p1, ...]` without a rest marker.
    pub fn exact(prefix: Vec<ElementPattern>) -> Result<Self, PatternError> {
        Self::new(prefix, RestSpec::None, Vec::new(), Span::DUMMY)
    }

    #[inline]
    pub fn prefix(&self) -> &[ElementPattern] {
        &self.prefix
    }

    #[inline]
    pub fn rest(&self) -> RestSpec {
        self.rest
    }

    #[inline]
    pub fn suffix(&self) -> &[ElementPattern] {
        &self.suffix
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Smallest subject length this pattern can match.
    #[inline]
    pub fn min_len(&self) -> usize {
        self.prefix.len() + self.suffix.len()
    }

    /// Every binding introduced by this pattern, in source order.
    pub fn bindings(&self) -> Vec<(Name, Span)> {
        let mut out = Vec::new();
        self.collect_bindings(&mut out);
        out
    }

    fn collect_bindings(&self, out: &mut Vec<(Name, Span)>) {
        for elem in &self.prefix {
            elem.collect_bindings(out);
        }
        if let RestSpec::Named { name, span } = self.rest {
            out.push((name, span));
        }
        for elem in &self.suffix {
            elem.collect_bindings(out);
        }
    }

    /// Render the pattern the way it is written in source.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> impl fmt::Display + 'a {
        SequenceDisplay {
            pattern: self,
            interner,
        }
    }
}

struct SequenceDisplay<'a> {
    pattern: &'a SequencePattern,
    interner: &'a StringInterner,
}

impl SequenceDisplay<'_> {
    fn element(&self, f: &mut fmt::Formatter<'_>, elem: &ElementPattern) -> fmt::Result {
        match elem {
            ElementPattern::Wildcard(_) => write!(f, "_"),
            ElementPattern::Literal { value, .. } => write!(f, "{}", value.display(self.interner)),
            ElementPattern::Binding { name, .. } => write!(f, "{}", self.interner.lookup(*name)),
            ElementPattern::Nested(seq) => write!(f, "{}", seq.display(self.interner)),
        }
    }
}

impl fmt::Display for SequenceDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let mut sep = |f: &mut fmt::Formatter<'_>| {
            if first {
                first = false;
                Ok(())
            } else {
                write!(f, ", ")
            }
        };

        write!(f, "[")?;
        for elem in &self.pattern.prefix {
            sep(f)?;
            self.element(f, elem)?;
        }
        match self.pattern.rest {
            RestSpec::None => {}
            RestSpec::Anonymous { .. } => {
                sep(f)?;
                write!(f, "...")?;
            }
            RestSpec::Named { name, .. } => {
                sep(f)?;
                write!(f, "...{}", self.interner.lookup(name))?;
            }
        }
        for elem in &self.pattern.suffix {
            sep(f)?;
            self.element(f, elem)?;
        }
        write!(f, "]")
    }
}

/// Top-level pattern of one case clause.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum CasePattern {
    /// `null`: matches only the absent subject.
    Null(Span),
    /// `[...]`: matches a present subject of suitable length.
    Sequence(SequencePattern),
    /// `_` or a bare name: matches any subject, present or absent.
    CatchAll { name: Option<Name>, span: Span },
}

impl CasePattern {
    pub fn span(&self) -> Span {
        match self {
            CasePattern::Null(span) | CasePattern::CatchAll { span, .. } => *span,
            CasePattern::Sequence(seq) => seq.span(),
        }
    }

    /// Every binding introduced by this pattern, in source order.
    pub fn bindings(&self) -> Vec<(Name, Span)> {
        match self {
            CasePattern::Null(_) | CasePattern::CatchAll { name: None, .. } => Vec::new(),
            CasePattern::CatchAll {
                name: Some(name),
                span,
            } => vec![(*name, *span)],
            CasePattern::Sequence(seq) => seq.bindings(),
        }
    }

    /// Render the pattern the way it is written in source.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> impl fmt::Display + 'a {
        CaseDisplay {
            pattern: self,
            interner,
        }
    }
}

struct CaseDisplay<'a> {
    pattern: &'a CasePattern,
    interner: &'a StringInterner,
}

impl fmt::Display for CaseDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pattern {
            CasePattern::Null(_) => write!(f, "null"),
            CasePattern::Sequence(seq) => write!(f, "{}", seq.display(self.interner)),
            CasePattern::CatchAll { name: None, .. } => write!(f, "_"),
            CasePattern::CatchAll {
                name: Some(name), ..
            } => write!(f, "{}", self.interner.lookup(*name)),
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
