use super::*;

#[test]
fn test_int_value_bounds() {
    let span = Span::DUMMY;
    assert_eq!(int_value(0, true, span), Ok(0));
    assert_eq!(int_value(9_223_372_036_854_775_807, false, span), Ok(i64::MAX));
    assert_eq!(int_value(9_223_372_036_854_775_808, true, span), Ok(i64::MIN));
    assert!(int_value(9_223_372_036_854_775_808, false, span).is_err());
    assert!(int_value(u64::MAX, true, span).is_err());
}
