use pretty_assertions::assert_eq;

use super::*;

#[test]
fn lists_print_like_source() {
    let v = Value::list([Value::Int(1), Value::str("a"), Value::Null, Value::ints([])]);
    assert_eq!(v.to_string(), "[1, \"a\", null, []]");
}

#[test]
fn interpolation_unquotes_top_level_strings() {
    assert_eq!(Value::str("hi").interpolate().to_string(), "hi");
    assert_eq!(Value::Char('c').interpolate().to_string(), "c");
    let nested = Value::list([Value::str("hi")]);
    assert_eq!(nested.interpolate().to_string(), "[\"hi\"]");
}

#[test]
fn slices_display_as_lists() {
    let v = Value::ints([0, 1, 2]);
    let items = v.as_list().unwrap_or_default();
    assert_eq!(display_slice(&items[1..]).to_string(), "[1, 2]");
    assert_eq!(display_slice(&items[..0]).to_string(), "[]");
}

#[test]
fn literals_convert_to_values() {
    let interner = StringInterner::new();
    let s = interner.intern("text");
    assert_eq!(Value::from_literal(&Literal::Str(s), &interner), Value::str("text"));
    assert_eq!(Value::from_literal(&Literal::Int(-2), &interner), Value::Int(-2));
    assert_eq!(Value::from_literal(&Literal::Null, &interner), Value::Null);
}
