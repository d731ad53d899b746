//! The sequence matcher.
//!
//! Matching is pure: it only reads the subject and the pattern, and every
//! binding it produces borrows from the subject.

use seqpat_ir::{CasePattern, ElementPattern, RestSpec, SequencePattern, StringInterner};
use seqpat_stack::ensure_sufficient_stack;

use crate::{Bindings, Element, Matched};

/// Match a sequence pattern against a subject sequence.
///
/// Without a rest marker the subject length must equal the pattern's
/// minimum length; with one it must be at least that. Prefix patterns are
/// matched against the leading elements, suffix patterns against the
/// trailing ones, and a named rest binds the middle slice (possibly empty).
pub fn match_sequence<'v, T: Element>(
    pattern: &SequencePattern,
    subject: &'v [T],
    interner: &StringInterner,
) -> Option<Bindings<'v, T>> {
    let mut bindings = Bindings::new();
    match_sequence_into(pattern, subject, interner, &mut bindings).then_some(bindings)
}

/// Match the top-level pattern of a case against a subject.
pub fn match_case<'v, T: Element>(
    pattern: &CasePattern,
    subject: Matched<'v, T>,
    interner: &StringInterner,
) -> Option<Bindings<'v, T>> {
    match pattern {
        CasePattern::Null(_) => matches!(subject, Matched::Null).then(Bindings::new),
        CasePattern::Sequence(seq) => {
            let items = match subject {
                Matched::Sequence(items) => items,
                Matched::Element(e) => e.as_sequence()?,
                Matched::Null => return None,
            };
            match_sequence(seq, items, interner)
        }
        CasePattern::CatchAll { name, .. } => {
            let mut bindings = Bindings::new();
            if let Some(name) = name {
                bindings.push(*name, subject);
            }
            Some(bindings)
        }
    }
}

fn match_sequence_into<'v, T: Element>(
    pattern: &SequencePattern,
    subject: &'v [T],
    interner: &StringInterner,
    out: &mut Bindings<'v, T>,
) -> bool {
    let len = subject.len();
    let min_len = pattern.min_len();
    let length_ok = if pattern.rest().is_present() {
        len >= min_len
    } else {
        len == min_len
    };
    if !length_ok {
        return false;
    }

    let prefix = pattern.prefix();
    let suffix = pattern.suffix();
    let suffix_start = len - suffix.len();

    for (pat, elem) in prefix.iter().zip(subject) {
        if !match_element(pat, elem, interner, out) {
            return false;
        }
    }

    if let RestSpec::Named { name, .. } = pattern.rest() {
        out.push(name, Matched::Sequence(&subject[prefix.len()..suffix_start]));
    }

    for (pat, elem) in suffix.iter().zip(&subject[suffix_start..]) {
        if !match_element(pat, elem, interner, out) {
            return false;
        }
    }

    true
}

fn match_element<'v, T: Element>(
    pattern: &ElementPattern,
    elem: &'v T,
    interner: &StringInterner,
    out: &mut Bindings<'v, T>,
) -> bool {
    match pattern {
        ElementPattern::Wildcard(_) => true,
        ElementPattern::Literal { value, .. } => elem.eq_literal(value, interner),
        ElementPattern::Binding { name, .. } => {
            out.push(*name, Matched::Element(elem));
            true
        }
        ElementPattern::Nested(seq) => elem.as_sequence().is_some_and(|items| {
            ensure_sufficient_stack(|| match_sequence_into(seq, items, interner, out))
        }),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
