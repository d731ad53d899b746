use pretty_assertions::assert_eq;
use seqpat_ir::{Literal, Name, Span, StringInterner, Value};

use super::*;

fn pat(source: &str, interner: &StringInterner) -> SequencePattern {
    let tokens = seqpat_lexer::lex(source, interner);
    seqpat_parse::parse_sequence_pattern(&tokens, interner).unwrap()
}

fn names(bindings: &Bindings<'_, Value>, interner: &StringInterner) -> Vec<&'static str> {
    bindings.iter().map(|(n, _)| interner.lookup(n)).collect()
}

#[test]
fn test_exact_length() {
    let interner = StringInterner::new();
    let p = pat("[x, y]", &interner);
    let x = interner.intern("x");
    let y = interner.intern("y");

    let subject = [Value::Int(1), Value::Int(2)];
    let bindings = match_sequence(&p, &subject, &interner).unwrap();
    assert_eq!(bindings.get(x), Some(Matched::Element(&Value::Int(1))));
    assert_eq!(bindings.get(y), Some(Matched::Element(&Value::Int(2))));

    assert!(match_sequence(&p, &[Value::Int(1)], &interner).is_none());
    assert!(match_sequence(&p, &[Value::Int(1), Value::Int(2), Value::Int(3)], &interner).is_none());
}

#[test]
fn test_rest_binds_middle_view() {
    let interner = StringInterner::new();
    let p = pat("[first, ...middle, last]", &interner);
    let middle = interner.intern("middle");
    let subject = [Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)];

    let bindings = match_sequence(&p, &subject, &interner).unwrap();
    assert_eq!(names(&bindings, &interner), vec!["first", "middle", "last"]);
    let Some(Matched::Sequence(captured)) = bindings.get(middle) else {
        panic!("rest should bind a sequence");
    };
    assert_eq!(captured, &subject[1..3]);
    assert!(std::ptr::eq(captured.as_ptr(), subject[1..].as_ptr()));
}

#[test]
fn test_first_and_last_on_minimum_length() {
    let interner = StringInterner::new();
    let p = pat("[first, ...middle, last]", &interner);
    let middle = interner.intern("middle");
    let last = interner.intern("last");
    let subject = [Value::Int(1), Value::Int(9)];

    let bindings = match_sequence(&p, &subject, &interner).unwrap();
    assert_eq!(bindings.get(middle), Some(Matched::<Value>::Sequence(&[])));
    assert_eq!(bindings.get(last), Some(Matched::Element(&Value::Int(9))));
    assert!(match_sequence(&p, &[Value::Int(1)], &interner).is_none());
}

#[test]
fn test_empty_subject_boundary() {
    let interner = StringInterner::new();
    let empty: [Value; 0] = [];
    let rest = interner.intern("rest");

    assert!(match_sequence(&pat("[]", &interner), &empty, &interner).is_some());
    let bindings = match_sequence(&pat("[...rest]", &interner), &empty, &interner).unwrap();
    assert_eq!(bindings.get(rest), Some(Matched::<Value>::Sequence(&[])));
    assert!(match_sequence(&pat("[x, ...rest]", &interner), &empty, &interner).is_none());
}

#[test]
fn test_anonymous_rest_binds_nothing() {
    let interner = StringInterner::new();
    let p = pat("[x, ...]", &interner);
    let subject = Value::ints([5, 6, 7]);
    let bindings = match_sequence(&p, subject.as_list().unwrap(), &interner).unwrap();
    assert_eq!(bindings.len(), 1);
}

#[test]
fn test_literals() {
    let interner = StringInterner::new();
    let p = pat(r#"[0, "a", 'c', true, null, -4]"#, &interner);
    let good = [
        Value::Int(0),
        Value::str("a"),
        Value::Char('c'),
        Value::Bool(true),
        Value::Null,
        Value::Int(-4),
    ];
    let bindings = match_sequence(&p, &good, &interner).unwrap();
    assert!(bindings.is_empty());

    let mut bad = good.clone();
    bad[1] = Value::str("b");
    assert!(match_sequence(&p, &bad, &interner).is_none());

    let mut wrong_type = good.clone();
    wrong_type[0] = Value::str("0");
    assert!(match_sequence(&p, &wrong_type, &interner).is_none());
}

#[test]
fn test_suffix_literal_checked_against_tail() {
    let interner = StringInterner::new();
    let p = pat("[..., 0]", &interner);
    assert!(match_sequence(&p, &[1_i64, 2, 0], &interner).is_some());
    assert!(match_sequence(&p, &[0_i64, 2], &interner).is_none());
}

#[test]
fn test_nested_patterns() {
    let interner = StringInterner::new();
    let p = pat("[[a, ...], b]", &interner);
    let a = interner.intern("a");
    let b = interner.intern("b");

    let subject = [Value::ints([1, 2]), Value::Int(3)];
    let bindings = match_sequence(&p, &subject, &interner).unwrap();
    assert_eq!(bindings.get(a), Some(Matched::Element(&Value::Int(1))));
    assert_eq!(bindings.get(b), Some(Matched::Element(&Value::Int(3))));

    // first element is not a list
    assert!(match_sequence(&p, &[Value::Int(1), Value::Int(3)], &interner).is_none());
    // inner list too short
    assert!(match_sequence(&p, &[Value::ints([]), Value::Int(3)], &interner).is_none());
}

#[test]
fn test_plain_integers() {
    let interner = StringInterner::new();
    let p = pat("[p, ...xs]", &interner);
    let xs = interner.intern("xs");
    let subject = [3_i64, 1, 2];
    let bindings = match_sequence(&p, &subject, &interner).unwrap();
    assert_eq!(bindings.get(xs), Some(Matched::Sequence(&[1, 2][..])));

    // nested patterns never match scalars
    assert!(match_sequence(&pat("[[x]]", &interner), &subject[..1], &interner).is_none());
}

#[test]
fn test_programmatic_pattern() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let p = SequencePattern::new(
        vec![ElementPattern::literal(Literal::Int(7))],
        RestSpec::Named {
            name: x,
            span: Span::DUMMY,
        },
        vec![],
        Span::DUMMY,
    )
    .unwrap();
    let bindings = match_sequence(&p, &[7_i64, 8, 9], &interner).unwrap();
    assert_eq!(bindings.get(x), Some(Matched::Sequence(&[8, 9][..])));
    assert_eq!(bindings.get(Name::EMPTY), None);
}

#[test]
fn test_matching_is_idempotent() {
    let interner = StringInterner::new();
    let p = pat("[h, ...t]", &interner);
    let subject = Value::ints([1, 2, 3]);
    let items = subject.as_list().unwrap();
    let first = match_sequence(&p, items, &interner);
    let second = match_sequence(&p, items, &interner);
    assert_eq!(first, second);
    assert_eq!(subject, Value::ints([1, 2, 3]));
}

#[test]
fn test_case_patterns() {
    let interner = StringInterner::new();
    let all = interner.intern("all");
    let items = [1_i64, 2];

    let null = CasePattern::Null(Span::DUMMY);
    assert!(match_case(&null, Matched::<i64>::Null, &interner).is_some());
    assert!(match_case(&null, Matched::Sequence(&items[..]), &interner).is_none());

    let seq = CasePattern::Sequence(pat("[...]", &interner));
    assert!(match_case(&seq, Matched::<i64>::Null, &interner).is_none());
    assert!(match_case(&seq, Matched::Sequence(&items[..]), &interner).is_some());

    let catch_all = CasePattern::CatchAll {
        name: Some(all),
        span: Span::DUMMY,
    };
    let bindings = match_case(&catch_all, Matched::<i64>::Null, &interner).unwrap();
    assert_eq!(bindings.get(all), Some(Matched::Null));
    let bindings = match_case(&catch_all, Matched::Sequence(&items[..]), &interner).unwrap();
    assert_eq!(bindings.get(all), Some(Matched::Sequence(&items[..])));
}

#[test]
fn test_sequence_pattern_on_list_element_subject() {
    let interner = StringInterner::new();
    let list = Value::ints([4]);
    let seq = CasePattern::Sequence(pat("[x]", &interner));
    assert!(match_case(&seq, Matched::Element(&list), &interner).is_some());
    assert!(match_case(&seq, Matched::Element(&Value::Int(4)), &interner).is_none());
}
