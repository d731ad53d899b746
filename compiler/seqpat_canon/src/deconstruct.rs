//! Deconstructed patterns and constructor splitting.
//!
//! The checker does not work on the source AST directly. Every pattern is
//! lowered to a [`Pat`]: a constructor applied to sub-patterns, or a
//! wildcard. Bindings are wildcards here; only shape matters.
//!
//! # Slice constructors
//!
//! List lengths are unbounded, so lists cannot be enumerated one length at a
//! time. Given the slice patterns in a column, let
//!
//! - `max_fixed` be the largest exact length,
//! - `max_prefix` / `max_suffix` the largest prefix / suffix of a pattern
//!   with a rest marker,
//! - `L = max(max_fixed + 1, max_prefix + max_suffix)`.
//!
//! Every length below `L` gets its own `Fixed(n)` constructor and all
//! lengths `>= L` collapse into a single `VarLen(L - max_suffix, max_suffix)`.
//! No pattern in the column can tell two lists of length `>= L` apart by
//! length alone, so this finite set is exact.

use std::fmt;

use seqpat_ir::{CasePattern, ElementPattern, Literal, SequencePattern, StringInterner, SubjectType};

use crate::columns::Columns;

pub(crate) static ANY: SubjectType = SubjectType::Any;

/// A pattern row: one deconstructed pattern per column.
pub(crate) type Row = Columns<Pat>;

/// A deconstructed pattern.
#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) enum Pat {
    Wild,
    Null,
    Bool(bool),
    /// Int, char or string literal: a value from an infinite domain.
    Lit(Literal),
    Slice(Slice),
}

/// Shape of a list pattern.
#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) struct Slice {
    pub prefix: Vec<Pat>,
    pub suffix: Vec<Pat>,
    pub var: bool,
}

impl Slice {
    fn kind(&self) -> SliceKind {
        if self.var {
            SliceKind::VarLen(self.prefix.len(), self.suffix.len())
        } else {
            SliceKind::Fixed(self.prefix.len())
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum SliceKind {
    /// Exactly `n` elements.
    Fixed(usize),
    /// At least `prefix + suffix` elements.
    VarLen(usize, usize),
}

impl SliceKind {
    fn arity(self) -> usize {
        match self {
            SliceKind::Fixed(n) => n,
            SliceKind::VarLen(prefix, suffix) => prefix + suffix,
        }
    }

    /// Whether every list of shape `other` also has shape `self`.
    fn covers(self, other: SliceKind) -> bool {
        match (self, other) {
            (SliceKind::Fixed(a), SliceKind::Fixed(b)) => a == b,
            (SliceKind::Fixed(_), SliceKind::VarLen(..)) => false,
            (SliceKind::VarLen(p, s), SliceKind::Fixed(n)) => n >= p + s,
            (SliceKind::VarLen(p, s), SliceKind::VarLen(cp, cs)) => cp >= p && cs >= s,
        }
    }
}

/// A constructor of a column's type.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Ctor {
    Null,
    Bool(bool),
    Lit(Literal),
    Slice(SliceKind),
    /// Every value of an infinite domain not named by a literal in the
    /// column. Only wildcards cover it.
    Other,
}

impl Ctor {
    pub(crate) fn arity(self) -> usize {
        match self {
            Ctor::Slice(kind) => kind.arity(),
            Ctor::Null | Ctor::Bool(_) | Ctor::Lit(_) | Ctor::Other => 0,
        }
    }

    /// Column types of this constructor's fields.
    pub(crate) fn field_types(
        self,
        ty: &SubjectType,
    ) -> impl DoubleEndedIterator<Item = &SubjectType> {
        let elem = ty.element().unwrap_or(&ANY);
        (0..self.arity()).map(move |_| elem)
    }
}

impl Pat {
    pub(crate) fn from_case(pattern: &CasePattern) -> Self {
        match pattern {
            CasePattern::Null(_) => Pat::Null,
            CasePattern::Sequence(seq) => Pat::from_sequence(seq),
            CasePattern::CatchAll { .. } => Pat::Wild,
        }
    }

    fn from_sequence(seq: &SequencePattern) -> Self {
        Pat::Slice(Slice {
            prefix: seq.prefix().iter().map(Pat::from_element).collect(),
            suffix: seq.suffix().iter().map(Pat::from_element).collect(),
            var: seq.rest().is_present(),
        })
    }

    fn from_element(elem: &ElementPattern) -> Self {
        match elem {
            ElementPattern::Wildcard(_) | ElementPattern::Binding { .. } => Pat::Wild,
            ElementPattern::Literal { value, .. } => match *value {
                Literal::Null => Pat::Null,
                Literal::Bool(b) => Pat::Bool(b),
                other => Pat::Lit(other),
            },
            ElementPattern::Nested(seq) => Pat::from_sequence(seq),
        }
    }

    pub(crate) fn is_wild(&self) -> bool {
        matches!(self, Pat::Wild)
    }

    /// The constructor this pattern names, `None` for a wildcard.
    pub(crate) fn ctor(&self) -> Option<Ctor> {
        match self {
            Pat::Wild => None,
            Pat::Null => Some(Ctor::Null),
            Pat::Bool(b) => Some(Ctor::Bool(*b)),
            Pat::Lit(lit) => Some(Ctor::Lit(*lit)),
            Pat::Slice(slice) => Some(Ctor::Slice(slice.kind())),
        }
    }

    /// Whether this pattern matches every value built by `ctor`.
    pub(crate) fn covers(&self, ctor: Ctor) -> bool {
        match (self, ctor) {
            (Pat::Wild, _) => true,
            (Pat::Null, Ctor::Null) => true,
            (Pat::Bool(a), Ctor::Bool(b)) => *a == b,
            (Pat::Lit(a), Ctor::Lit(b)) => *a == b,
            (Pat::Slice(slice), Ctor::Slice(kind)) => slice.kind().covers(kind),
            _ => false,
        }
    }

    /// The fields of this pattern viewed through `ctor`, or `None` when
    /// the pattern does not cover it.
    pub(crate) fn specialize(&self, ctor: Ctor) -> Option<Vec<Pat>> {
        if !self.covers(ctor) {
            return None;
        }
        let arity = ctor.arity();
        let fields = match self {
            Pat::Wild => vec![Pat::Wild; arity],
            Pat::Slice(slice) => {
                let mut fields = Vec::with_capacity(arity);
                fields.extend(slice.prefix.iter().cloned());
                let fill = arity - slice.prefix.len() - slice.suffix.len();
                fields.extend(std::iter::repeat_n(Pat::Wild, fill));
                fields.extend(slice.suffix.iter().cloned());
                fields
            }
            Pat::Null | Pat::Bool(_) | Pat::Lit(_) => Vec::new(),
        };
        Some(fields)
    }
}

/// The constructors a column of type `ty` is split into, given the
/// patterns heading its rows.
///
/// The result always describes every value of `ty`: infinite domains end
/// with [`Ctor::Other`].
pub(crate) fn split_ctors<'p>(
    ty: &SubjectType,
    heads: impl Iterator<Item = &'p Pat> + Clone,
) -> Vec<Ctor> {
    let mut ctors = Vec::new();
    if ty.is_nullable() {
        ctors.push(Ctor::Null);
    }

    match ty.non_null() {
        SubjectType::Bool => ctors.extend([Ctor::Bool(true), Ctor::Bool(false)]),
        SubjectType::List(_) => split_slices(heads, &mut ctors),
        SubjectType::Int | SubjectType::Char | SubjectType::Str => {
            push_literals(heads, &mut ctors);
            ctors.push(Ctor::Other);
        }
        // Nullable(Nullable(_)) never occurs: `nullable()` flattens it.
        SubjectType::Any | SubjectType::Nullable(_) => {
            push_literals(heads.clone(), &mut ctors);
            if heads.clone().any(|p| matches!(p, Pat::Slice(_))) {
                split_slices(heads, &mut ctors);
            }
            ctors.push(Ctor::Other);
        }
    }
    ctors
}

fn push_literals<'p>(heads: impl Iterator<Item = &'p Pat>, ctors: &mut Vec<Ctor>) {
    for head in heads {
        let ctor = match head {
            Pat::Bool(b) => Ctor::Bool(*b),
            Pat::Lit(lit) => Ctor::Lit(*lit),
            _ => continue,
        };
        if !ctors.contains(&ctor) {
            ctors.push(ctor);
        }
    }
}

fn split_slices<'p>(heads: impl Iterator<Item = &'p Pat>, ctors: &mut Vec<Ctor>) {
    let mut max_fixed: Option<usize> = None;
    let mut max_prefix = 0;
    let mut max_suffix = 0;
    for head in heads {
        if let Pat::Slice(slice) = head {
            match slice.kind() {
                SliceKind::Fixed(n) => max_fixed = max_fixed.max(Some(n)),
                SliceKind::VarLen(p, s) => {
                    max_prefix = max_prefix.max(p);
                    max_suffix = max_suffix.max(s);
                }
            }
        }
    }

    let threshold = max_fixed.map_or(0, |n| n + 1).max(max_prefix + max_suffix);
    ctors.extend((0..threshold).map(|n| Ctor::Slice(SliceKind::Fixed(n))));
    ctors.push(Ctor::Slice(SliceKind::VarLen(
        threshold - max_suffix,
        max_suffix,
    )));
}

/// A pattern describing values no clause matches.
#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) enum Witness {
    Wild,
    Null,
    Bool(bool),
    Lit(Literal),
    Slice {
        prefix: Vec<Witness>,
        var: bool,
        suffix: Vec<Witness>,
    },
}

impl Witness {
    /// Build `ctor` applied to `fields` (exactly `ctor.arity()` of them).
    pub(crate) fn apply(ctor: Ctor, mut fields: Vec<Witness>) -> Self {
        match ctor {
            Ctor::Null => Witness::Null,
            Ctor::Bool(b) => Witness::Bool(b),
            Ctor::Lit(lit) => Witness::Lit(lit),
            Ctor::Other => Witness::Wild,
            Ctor::Slice(SliceKind::Fixed(_)) => Witness::Slice {
                prefix: fields,
                var: false,
                suffix: Vec::new(),
            },
            Ctor::Slice(SliceKind::VarLen(prefix, _)) => {
                let suffix = fields.split_off(prefix);
                Witness::Slice {
                    prefix: fields,
                    var: true,
                    suffix,
                }
            }
        }
    }

    pub(crate) fn display<'a>(&'a self, interner: &'a StringInterner) -> impl fmt::Display + 'a {
        WitnessDisplay {
            witness: self,
            interner,
        }
    }
}

struct WitnessDisplay<'a> {
    witness: &'a Witness,
    interner: &'a StringInterner,
}

impl fmt::Display for WitnessDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.witness {
            Witness::Wild => write!(f, "_"),
            Witness::Null => write!(f, "null"),
            Witness::Bool(b) => write!(f, "{b}"),
            Witness::Lit(lit) => write!(f, "{}", lit.display(self.interner)),
            Witness::Slice {
                prefix,
                var,
                suffix,
            } => {
                let mut parts: Vec<String> = prefix
                    .iter()
                    .map(|w| w.display(self.interner).to_string())
                    .collect();
                if *var {
                    parts.push("...".to_string());
                }
                parts.extend(suffix.iter().map(|w| w.display(self.interner).to_string()));
                write!(f, "[{}]", parts.join(", "))
            }
        }
    }
}
