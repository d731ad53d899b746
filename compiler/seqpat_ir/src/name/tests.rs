use super::*;

#[test]
fn test_default_is_empty() {
    assert_eq!(Name::default(), Name::EMPTY);
    assert_eq!(Name::EMPTY.index(), 0);
}

#[test]
fn test_order_follows_index() {
    assert!(Name::from_index(1) < Name::from_index(2));
    assert_eq!(format!("{:?}", Name::from_index(7)), "Name#7");
}
