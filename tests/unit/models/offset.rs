use super::*;

#[test]
fn test_raw_round_trip() {
    assert_eq!(LogicalOffset::new(42).raw(), 42);
    assert_eq!(Utf16Offset::new(7).raw(), 7);
}

#[test]
fn test_default_is_zero() {
    assert_eq!(LogicalOffset::default(), LogicalOffset::new(0));
    assert_eq!(Utf16Offset::default(), Utf16Offset::new(0));
}

#[test]
fn test_ordering_within_unit() {
    assert!(LogicalOffset::new(1) < LogicalOffset::new(2));
    assert!(Utf16Offset::new(3) > Utf16Offset::new(0));
    assert_eq!(
        LogicalOffset::new(5).max(LogicalOffset::new(2)),
        LogicalOffset::new(5)
    );
}
