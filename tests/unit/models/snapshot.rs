use super::*;

#[test]
fn test_ascii_lengths_match() {
    let snapshot = TextSnapshot::new("print");
    assert_eq!(snapshot.len_logical(), 5);
    assert_eq!(snapshot.len_utf16(), 5);
    assert!(!snapshot.is_empty());
}

#[test]
fn test_empty_text() {
    let snapshot = TextSnapshot::new("");
    assert_eq!(snapshot.len_logical(), 0);
    assert_eq!(snapshot.len_utf16(), 0);
    assert!(snapshot.is_empty());
}

#[test]
fn test_surrogate_pair_widens_utf16_only() {
    // 😀 是一个字素，但占两个 UTF-16 编码单元
    let snapshot = TextSnapshot::new("x = 😀");
    assert_eq!(snapshot.len_logical(), 5);
    assert_eq!(snapshot.len_utf16(), 6);
}

#[test]
fn test_cjk_is_one_unit_each() {
    let snapshot = TextSnapshot::new("let 变量名 = value;");
    assert_eq!(snapshot.len_logical(), 16);
    assert_eq!(snapshot.len_utf16(), 16);
}

#[test]
fn test_combining_mark_counts_as_one_grapheme() {
    // "e" + U+0301 组合成单个字素
    let snapshot = TextSnapshot::new("cafe\u{301}");
    assert_eq!(snapshot.len_logical(), 4);
    assert_eq!(snapshot.len_utf16(), 5);
}

#[test]
fn test_fresh_snapshots_get_distinct_ids() {
    let a = TextSnapshot::new("same");
    let b = TextSnapshot::new("same");
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_clone_keeps_identity_and_text() {
    let original = TextSnapshot::new("x = 😀prin");
    let clone = original.clone();
    assert_eq!(clone.id(), original.id());
    assert_eq!(clone.text(), original.text());
    assert_eq!(clone.len_logical(), original.len_logical());
    assert_eq!(clone.len_utf16(), original.len_utf16());
}
