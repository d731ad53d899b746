use pretty_assertions::assert_eq;
use rayon::prelude::*;
use seqpat_ir::{ElementPattern, Name, RestSpec, SequencePattern, Span};

use super::*;
use crate::GuardFn;

const FOO: &str = r#"
switch foo(xs: [int]?) {
    case null | [] => "empty"
    case [x] => "only {x}"
    case [x, y, ...] if x == y => "{x} equals {y}"
    case [x, y] => "only {x} and {y}"
    case [head, ...tail] => "{head} :: {tail}"
}
"#;

fn selector(source: &str) -> CaseSelector<Value, BodyTemplate> {
    let interner = SharedInterner::new();
    let tokens = seqpat_lexer::lex(source, &interner);
    let output = seqpat_parse::parse(&tokens, &interner);
    assert!(!output.has_errors(), "{:?}", output.errors);
    CaseSelector::from_switch(&output.module.switches[0], interner)
}

#[test]
fn test_foo_examples() {
    let foo = selector(FOO);
    assert_eq!(foo.clause_count(), 6);
    assert_eq!(foo.run(&Value::Null), Ok("empty".to_string()));
    assert_eq!(foo.run(&Value::ints([])), Ok("empty".to_string()));
    assert_eq!(foo.run(&Value::ints([0])), Ok("only 0".to_string()));
    assert_eq!(foo.run(&Value::ints([0, 1])), Ok("only 0 and 1".to_string()));
    assert_eq!(foo.run(&Value::ints([0, 0, 2])), Ok("0 equals 0".to_string()));
    assert_eq!(foo.run(&Value::ints([0, 1, 2])), Ok("0 :: [1, 2]".to_string()));
}

#[test]
fn test_failed_guard_falls_through() {
    let foo = selector(FOO);
    let subject = Value::ints([0, 0]);
    let selection = foo.evaluate_value(&subject).unwrap();
    // `[x, y, ...] if x == y` is the third arm and wins over `[x, y]`.
    assert_eq!(selection.arm, 2);

    let subject = Value::ints([0, 1]);
    assert_eq!(foo.evaluate_value(&subject).unwrap().arm, 3);
}

#[test]
fn test_alternatives_share_body() {
    let foo = selector(FOO);
    let null = foo.evaluate_value(&Value::Null).unwrap();
    let empty_list = Value::ints([]);
    let empty = foo.evaluate_value(&empty_list).unwrap();
    assert_eq!(null.arm, empty.arm);
    assert!(std::ptr::eq(null.body, empty.body));
}

#[test]
fn test_first_match_wins() {
    let s = selector(
        r#"switch f() {
            case [x, ...] => "first"
            case [x] => "second"
        }"#,
    );
    assert_eq!(s.run(&Value::ints([1])), Ok("first".to_string()));
}

#[test]
fn test_no_match() {
    let s = selector(r#"switch f() { case [x] => "one" }"#);
    let err = s.run(&Value::ints([1, 2])).unwrap_err();
    assert_eq!(
        err,
        EvalError::NoMatch {
            subject: "[1, 2]".into()
        }
    );
    assert_eq!(err.code(), seqpat_diagnostic::ErrorCode::E6001);
    assert!(s.run(&Value::Null).is_err());
}

#[test]
fn test_scalar_subject_only_caught_by_catch_all() {
    let s = selector(
        r#"switch f() {
            case [...] => "list"
            case other => "got {other}"
        }"#,
    );
    assert_eq!(s.run(&Value::str("text")), Ok("got text".to_string()));
    assert_eq!(s.run(&Value::Null), Ok("got null".to_string()));
    assert_eq!(s.run(&Value::ints([1])), Ok("list".to_string()));
}

#[test]
fn test_guard_error_propagates() {
    let s = selector(r#"switch f() { case [a, b] if a < b => "lt" case _ => "other" }"#);
    let subject = Value::list([Value::Int(1), Value::str("x")]);
    assert!(matches!(
        s.run(&subject),
        Err(EvalError::GuardTypeMismatch { .. })
    ));
}

/// `quicksort` with `[]` and `[p, ...xs]` over plain integers.
fn quicksort(sel: &CaseSelector<i64, &'static str>, p: Name, xs: Name, items: &[i64]) -> Vec<i64> {
    let selection = sel.evaluate(Some(items)).unwrap();
    match *selection.body {
        "empty" => Vec::new(),
        _ => {
            let Some(Matched::Element(&pivot)) = selection.bindings.get(p) else {
                unreachable!("`p` binds an element");
            };
            let Some(Matched::Sequence(rest)) = selection.bindings.get(xs) else {
                unreachable!("`xs` binds a sequence");
            };
            let smaller: Vec<i64> = rest.iter().copied().filter(|&n| n < pivot).collect();
            let larger: Vec<i64> = rest.iter().copied().filter(|&n| n >= pivot).collect();
            let (mut sorted, tail) = rayon::join(
                || quicksort(sel, p, xs, &smaller),
                || quicksort(sel, p, xs, &larger),
            );
            sorted.push(pivot);
            sorted.extend(tail);
            sorted
        }
    }
}

fn quicksort_selector() -> (CaseSelector<i64, &'static str>, Name, Name) {
    let interner = SharedInterner::new();
    let p = interner.intern("p");
    let xs = interner.intern("xs");
    let empty = SequencePattern::exact(vec![]).unwrap();
    let split = SequencePattern::new(
        vec![ElementPattern::binding(p)],
        RestSpec::Named {
            name: xs,
            span: Span::DUMMY,
        },
        vec![],
        Span::DUMMY,
    )
    .unwrap();
    let sel = CaseSelector::builder(interner)
        .arm([CasePattern::Sequence(empty)], "empty")
        .arm([CasePattern::Sequence(split)], "split")
        .build();
    (sel, p, xs)
}

#[test]
fn test_quicksort() {
    let (sel, p, xs) = quicksort_selector();
    assert_eq!(quicksort(&sel, p, xs, &[]), Vec::<i64>::new());
    assert_eq!(quicksort(&sel, p, xs, &[3, 1, 2]), vec![1, 2, 3]);
    assert_eq!(
        quicksort(&sel, p, xs, &[5, -1, 5, 0, 9, 3]),
        vec![-1, 0, 3, 5, 5, 9]
    );
}

#[test]
fn test_closure_guards_in_builder() {
    let interner = SharedInterner::new();
    let x = interner.intern("x");
    let single = SequencePattern::exact(vec![ElementPattern::binding(x)]).unwrap();
    let sel = CaseSelector::builder(interner)
        .guarded_arm(
            [CasePattern::Sequence(single.clone())],
            GuardFn(move |b: &Bindings<'_, i64>| {
                matches!(b.get(x), Some(Matched::Element(n)) if *n % 2 == 0)
            }),
            "even",
        )
        .arm([CasePattern::Sequence(single)], "odd")
        .arm(
            [CasePattern::CatchAll {
                name: None,
                span: Span::DUMMY,
            }],
            "other",
        )
        .build();

    let body = |items: Option<&[i64]>| sel.evaluate(items).map(|s| *s.body);
    assert_eq!(body(Some(&[4][..])), Ok("even"));
    assert_eq!(body(Some(&[3][..])), Ok("odd"));
    assert_eq!(body(Some(&[][..])), Ok("other"));
    assert_eq!(body(None), Ok("other"));
}

#[test]
fn test_selector_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CaseSelector<Value, BodyTemplate>>();
    assert_send_sync::<CaseSelector<i64, &'static str>>();
}

#[test]
fn test_concurrent_evaluation_keeps_order() {
    let foo = selector(FOO);
    let subjects: Vec<Value> = (0..512)
        .map(|i| match i % 4 {
            0 => Value::Null,
            1 => Value::ints([i]),
            2 => Value::ints([i, i, 0]),
            _ => Value::ints([i, i + 1, i + 2]),
        })
        .collect();

    let sequential: Vec<String> = subjects.iter().map(|s| foo.run(s).unwrap()).collect();
    let parallel: Vec<String> = subjects
        .par_iter()
        .map(|s| foo.clone().run(s).unwrap())
        .collect();
    assert_eq!(sequential, parallel);
    assert_eq!(parallel[2], "2 equals 2");
    assert_eq!(parallel[3], "3 :: [4, 5]");
}
