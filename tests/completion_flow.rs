use std::sync::Arc;

use suggest::apply::{apply, ApplyError};
use suggest::docs::{DocItem, DocItemKind, DocumentationIndex, IndexConfig};
use suggest::models::{LogicalOffset, TextSnapshot, Utf16Offset};
use suggest::provider::{Suggestion, SuggestionProvider};
use suggest::session::CompletionSession;
use suggest::translate;

fn doc_item(name: &str, kind: DocItemKind, detail: &str) -> DocItem {
    DocItem {
        name: name.to_string(),
        kind,
        detail: Some(detail.to_string()),
    }
}

fn script_documentation() -> Arc<DocumentationIndex> {
    Arc::new(DocumentationIndex::new(
        vec![
            doc_item(
                "print",
                DocItemKind::Function,
                "Prints a value to the console",
            ),
            doc_item(
                "println",
                DocItemKind::Function,
                "Prints a value followed by a newline",
            ),
            doc_item("shell", DocItemKind::Function, "Runs a shell command"),
            doc_item(
                "captureShell",
                DocItemKind::Function,
                "Runs a shell command and returns its output",
            ),
        ],
        IndexConfig::default(),
    ))
}

#[test]
fn typed_prefix_to_committed_completion() {
    let mut session = CompletionSession::new(script_documentation());

    // 控件上屏文本 "pri"，光标在末尾（UTF-16 单位）
    let snapshot = TextSnapshot::new("pri");
    session.refresh(&snapshot, Utf16Offset::new(3)).unwrap();

    let labels: Vec<&str> = session
        .candidates()
        .iter()
        .map(|c| c.display_text())
        .collect();
    assert_eq!(labels, ["print", "println"]);

    let chosen = session.select(0).unwrap();
    let applied = apply(&snapshot, chosen).unwrap();

    assert_eq!(applied.text, "print(");
    assert_eq!(applied.selection.location.raw(), 6);
    assert_eq!(applied.selection.length.raw(), 0);
}

#[test]
fn completion_after_an_emoji_lands_the_caret_correctly() {
    let index = script_documentation();
    let mut session = CompletionSession::new(index);

    let snapshot = TextSnapshot::new("x = 😀prin");
    // widget 光标在末尾：4 个 ASCII + 2 单元的 😀 + 4 个 ASCII
    session.refresh(&snapshot, Utf16Offset::new(10)).unwrap();

    let chosen = session.select(0).unwrap();
    assert_eq!(chosen.display_text(), "print");
    assert_eq!(chosen.insertion_start(), LogicalOffset::new(5));

    let applied = apply(&snapshot, chosen).unwrap();
    assert_eq!(applied.text, "x = 😀print(");
    // "x = 😀" 共 6 个编码单元，"print(" 再加 6
    assert_eq!(applied.selection.location.raw(), 12);

    let reloaded = TextSnapshot::new(applied.text.as_str());
    assert_eq!(
        translate::to_logical(&reloaded, applied.selection.location).unwrap(),
        LogicalOffset::new(11)
    );
}

#[test]
fn text_change_between_query_and_commit_discards_results() {
    let index = script_documentation();
    let mut session = CompletionSession::new(index.clone());

    let first = TextSnapshot::new("pri");
    session.refresh(&first, Utf16Offset::new(3)).unwrap();
    assert_eq!(session.len(), 2);

    // 异步查询在路上时用户继续输入
    let pending = session.begin_refresh(&first, Utf16Offset::new(3)).unwrap();
    let results = index.query(first.text(), pending.cursor());
    let second = TextSnapshot::new("prin");

    assert!(!session.commit_refresh(pending, results, &second));
    // 旧列表原样保留
    assert_eq!(session.len(), 2);
    assert!(session.is_current_for(&first));
    assert!(!session.is_current_for(&second));
}

#[test]
fn stale_candidate_fails_apply_and_requery_recovers() {
    let index = script_documentation();
    let mut session = CompletionSession::new(index);

    let before = TextSnapshot::new("pri");
    session.refresh(&before, Utf16Offset::new(3)).unwrap();
    let kept = session.select(0).unwrap().clone();

    let after = TextSnapshot::new("prin");
    assert_eq!(apply(&after, &kept).unwrap_err(), ApplyError::StaleCandidate);

    session.refresh(&after, Utf16Offset::new(4)).unwrap();
    let fresh = session.select(0).unwrap();
    let applied = apply(&after, fresh).unwrap();
    assert_eq!(applied.text, "print(");
}

#[test]
fn accepted_completions_rise_in_later_queries() {
    let index = script_documentation();
    let mut session = CompletionSession::new(index.clone());

    let snapshot = TextSnapshot::new("pri");
    session.refresh(&snapshot, Utf16Offset::new(3)).unwrap();
    assert_eq!(session.select(0).unwrap().display_text(), "print");

    index.record_use("println");
    index.record_use("println");

    session.refresh(&snapshot, Utf16Offset::new(3)).unwrap();
    assert_eq!(session.select(0).unwrap().display_text(), "println");
}

#[test]
fn chained_edits_keep_units_straight() {
    let index = script_documentation();
    let mut session = CompletionSession::new(index);

    // 第一轮：补全出 captureShell(
    let snapshot = TextSnapshot::new("out = cap");
    session.refresh(&snapshot, Utf16Offset::new(9)).unwrap();
    let chosen = session.select(0).unwrap();
    assert_eq!(chosen.display_text(), "captureShell");

    let applied = apply(&snapshot, chosen).unwrap();
    assert_eq!(applied.text, "out = captureShell(");
    assert_eq!(applied.selection.location.raw(), 19);

    // 第二轮：回写后的文本重新成为快照，继续在括号内补全
    let next = TextSnapshot::new(format!("{}😀shel", applied.text).as_str());
    session.refresh(&next, Utf16Offset::new(25)).unwrap();
    let chosen = session.select(0).unwrap();
    assert_eq!(chosen.display_text(), "shell");
    assert_eq!(chosen.insertion_start(), LogicalOffset::new(20));

    let applied = apply(&next, chosen).unwrap();
    assert_eq!(applied.text, "out = captureShell(😀shell(");
    assert_eq!(applied.selection.location.raw(), 27);
}

#[test]
fn custom_provider_with_inside_bracket_cursor() {
    struct PairProvider;

    impl SuggestionProvider for PairProvider {
        fn query(&self, text: &str, cursor: LogicalOffset) -> Vec<Suggestion> {
            let _ = text;
            vec![Suggestion {
                display_text: "brackets".to_string(),
                insertion_text: "[]".to_string(),
                insertion_start: cursor,
                cursor_after_insertion: -1,
            }]
        }
    }

    let mut session = CompletionSession::new(Arc::new(PairProvider));
    let snapshot = TextSnapshot::new("list = ");
    session.refresh(&snapshot, Utf16Offset::new(7)).unwrap();

    let applied = apply(&snapshot, session.select(0).unwrap()).unwrap();
    assert_eq!(applied.text, "list = []");
    assert_eq!(applied.selection.location.raw(), 8);
}
