use super::*;

#[test]
fn test_caret_has_zero_length() {
    let caret = Selection::caret(Utf16Offset::new(6));
    assert_eq!(caret.location, Utf16Offset::new(6));
    assert_eq!(caret.length, Utf16Offset::new(0));
    assert!(caret.is_caret());
}

#[test]
fn test_ranged_selection_is_not_caret() {
    let selection = Selection::new(Utf16Offset::new(2), Utf16Offset::new(4));
    assert_eq!(selection.location.raw(), 2);
    assert_eq!(selection.length.raw(), 4);
    assert!(!selection.is_caret());
}
