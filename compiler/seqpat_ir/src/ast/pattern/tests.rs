use pretty_assertions::assert_eq;

use super::*;

fn span(start: u32) -> Span {
    Span::new(start, start + 1)
}

#[test]
fn exact_pattern_has_no_rest() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let pat = SequencePattern::exact(vec![ElementPattern::binding(x)]).unwrap();
    assert_eq!(pat.min_len(), 1);
    assert!(!pat.rest().is_present());
    assert_eq!(pat.display(&interner).to_string(), "[x]");
}

#[test]
fn suffix_without_rest_is_rejected() {
    let err = SequencePattern::new(
        vec![],
        RestSpec::None,
        vec![ElementPattern::Wildcard(span(4))],
        Span::DUMMY,
    )
    .unwrap_err();
    assert_eq!(err, PatternError::SuffixWithoutRest { span: span(4) });
}

#[test]
fn duplicate_element_bindings_are_rejected() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let err = SequencePattern::new(
        vec![
            ElementPattern::Binding { name: x, span: span(1) },
            ElementPattern::Binding { name: x, span: span(4) },
        ],
        RestSpec::None,
        vec![],
        Span::DUMMY,
    )
    .unwrap_err();
    assert_eq!(
        err,
        PatternError::DuplicateBinding {
            name: x,
            first: span(1),
            second: span(4),
        }
    );
}

#[test]
fn rest_name_clashing_with_element_is_rejected() {
    let interner = StringInterner::new();
    let xs = interner.intern("xs");
    let err = SequencePattern::new(
        vec![ElementPattern::Binding { name: xs, span: span(1) }],
        RestSpec::Named { name: xs, span: span(5) },
        vec![],
        Span::DUMMY,
    )
    .unwrap_err();
    assert!(matches!(err, PatternError::DuplicateBinding { .. }));
}

#[test]
fn nested_bindings_share_one_namespace() {
    let interner = StringInterner::new();
    let a = interner.intern("a");
    let inner = SequencePattern::exact(vec![ElementPattern::Binding { name: a, span: span(8) }])
        .unwrap();
    let err = SequencePattern::new(
        vec![
            ElementPattern::Binding { name: a, span: span(1) },
            ElementPattern::Nested(inner),
        ],
        RestSpec::None,
        vec![],
        Span::DUMMY,
    )
    .unwrap_err();
    assert_eq!(
        err,
        PatternError::DuplicateBinding {
            name: a,
            first: span(1),
            second: span(8),
        }
    );
}

#[test]
fn bindings_are_listed_in_source_order() {
    let interner = StringInterner::new();
    let first = interner.intern("first");
    let middle = interner.intern("middle");
    let last = interner.intern("last");
    let pat = SequencePattern::new(
        vec![ElementPattern::Binding { name: first, span: span(1) }],
        RestSpec::Named { name: middle, span: span(8) },
        vec![ElementPattern::Binding { name: last, span: span(20) }],
        Span::DUMMY,
    )
    .unwrap();
    let names: Vec<Name> = pat.bindings().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec![first, middle, last]);
    assert_eq!(pat.min_len(), 2);
    assert_eq!(
        pat.display(&interner).to_string(),
        "[first, ...middle, last]"
    );
}

#[test]
fn display_covers_literals_and_nesting() {
    let interner = StringInterner::new();
    let s = interner.intern("hi");
    let inner = SequencePattern::new(
        vec![],
        RestSpec::Anonymous { span: Span::DUMMY },
        vec![],
        Span::DUMMY,
    )
    .unwrap();
    let pat = SequencePattern::exact(vec![
        ElementPattern::literal(Literal::Int(-3)),
        ElementPattern::literal(Literal::Str(s)),
        ElementPattern::literal(Literal::Null),
        ElementPattern::Wildcard(Span::DUMMY),
        ElementPattern::Nested(inner),
    ])
    .unwrap();
    assert_eq!(
        pat.display(&interner).to_string(),
        "[-3, \"hi\", null, _, [...]]"
    );
}

#[test]
fn case_pattern_bindings() {
    let interner = StringInterner::new();
    let all = interner.intern("all");
    let catch_all = CasePattern::CatchAll {
        name: Some(all),
        span: span(0),
    };
    assert_eq!(catch_all.bindings(), vec![(all, span(0))]);
    assert!(CasePattern::Null(span(0)).bindings().is_empty());
    assert_eq!(catch_all.display(&interner).to_string(), "all");
}
