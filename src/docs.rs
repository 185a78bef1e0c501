//! Documentation-index suggestion provider.
//!
//! Backs completion with a flat set of documented names (registered script
//! functions, keywords, values) instead of a parser: the token prefix at
//! the cursor is matched against item names, frequency-ranked, and turned
//! into insertion-ready suggestions.

use std::sync::RwLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;
use unicode_xid::UnicodeXID;

use crate::models::LogicalOffset;
use crate::provider::{Suggestion, SuggestionProvider};
use crate::rank::FrequencyRanker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocItemKind {
    /// Callable; inserts `name(` with the cursor after the paren.
    Function,
    /// Language keyword; inserts a trailing space for identifier-shaped names.
    Keyword,
    /// Plain value or constant; inserts the name as-is.
    Value,
}

/// One documented name the index can suggest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocItem {
    pub name: String,
    pub kind: DocItemKind,
    /// One-line documentation shown alongside the suggestion, when present.
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Upper bound on returned suggestions per query.
    pub max_results: usize,
    /// Whether an empty token prefix suggests the whole index. Off by
    /// default: popping the full list on every keystroke is host policy.
    pub suggest_on_empty_prefix: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_results: 200,
            suggest_on_empty_prefix: false,
        }
    }
}

/// Static documentation index with frequency-aware ordering.
///
/// Shareable behind `Arc`; accepted completions are fed back through
/// `record_use` so often-picked names rise in later queries.
pub struct DocumentationIndex {
    items: Vec<DocItem>,
    config: IndexConfig,
    ranker: RwLock<FrequencyRanker>,
}

impl DocumentationIndex {
    pub fn new(items: Vec<DocItem>, config: IndexConfig) -> Self {
        Self {
            items,
            config,
            ranker: RwLock::new(FrequencyRanker::default()),
        }
    }

    /// Loads the item set from its JSON form.
    pub fn from_json(json: &str, config: IndexConfig) -> serde_json::Result<Self> {
        let items: Vec<DocItem> = serde_json::from_str(json)?;
        tracing::debug!(count = items.len(), "documentation index loaded");
        Ok(Self::new(items, config))
    }

    /// Serializes the item set so hosts can ship it as a file.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.items)
    }

    pub fn items(&self) -> &[DocItem] {
        &self.items
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Records an accepted completion so the name ranks higher next time.
    pub fn record_use(&self, name: &str) {
        if let Ok(mut ranker) = self.ranker.write() {
            ranker.record(name);
        }
    }

    /// Clone of the current ranker state, for persistence.
    pub fn ranker_snapshot(&self) -> FrequencyRanker {
        match self.ranker.read() {
            Ok(ranker) => ranker.clone(),
            Err(_) => FrequencyRanker::default(),
        }
    }

    /// Replaces the ranker wholesale, e.g. with one restored at startup.
    pub fn restore_ranker(&self, ranker: FrequencyRanker) {
        if let Ok(mut slot) = self.ranker.write() {
            *slot = ranker;
        }
    }

    pub fn ranker_dirty(&self) -> bool {
        self.ranker
            .read()
            .map(|ranker| ranker.is_dirty())
            .unwrap_or(false)
    }

    pub fn clear_ranker_dirty(&self) {
        if let Ok(mut ranker) = self.ranker.write() {
            ranker.clear_dirty();
        }
    }

    fn suggestion_for(&self, item: &DocItem, start: usize) -> Suggestion {
        let insertion_text = match item.kind {
            DocItemKind::Function if is_callable_name(&item.name) => {
                format!("{}(", item.name)
            }
            DocItemKind::Keyword if is_plain_identifier(&item.name) => {
                format!("{} ", item.name)
            }
            _ => item.name.clone(),
        };
        let cursor_after = insertion_text.graphemes(true).count() as i64;

        Suggestion {
            display_text: item.name.clone(),
            insertion_text,
            insertion_start: LogicalOffset::new(start),
            cursor_after_insertion: cursor_after,
        }
    }
}

impl SuggestionProvider for DocumentationIndex {
    fn query(&self, text: &str, cursor: LogicalOffset) -> Vec<Suggestion> {
        let (start, prefix) = identifier_prefix(text, cursor.raw());
        if prefix.is_empty() && !self.config.suggest_on_empty_prefix {
            return Vec::new();
        }

        let mut matched: Vec<&DocItem> = self
            .items
            .iter()
            .filter(|item| starts_with_ignore_ascii_case(&item.name, &prefix))
            .collect();

        let mut score_by_name = FxHashMap::default();
        if let Ok(ranker) = self.ranker.read() {
            for item in &matched {
                score_by_name.insert(item.name.as_str(), ranker.score(&item.name));
            }
        }

        matched.sort_by(|a, b| {
            let a_score = score_by_name.get(a.name.as_str()).copied().unwrap_or(0.0);
            let b_score = score_by_name.get(b.name.as_str()).copied().unwrap_or(0.0);
            // Higher frequency first.
            b_score
                .partial_cmp(&a_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });
        matched.truncate(self.config.max_results);

        matched
            .into_iter()
            .map(|item| self.suggestion_for(item, start))
            .collect()
    }
}

/// Token prefix ending at `cursor`: the trailing run of identifier
/// graphemes, plus the logical offset where that run starts.
fn identifier_prefix(text: &str, cursor: usize) -> (usize, String) {
    let mut prefix = String::new();
    let mut run_len = 0usize;
    for grapheme in text.graphemes(true).take(cursor) {
        if is_identifier_grapheme(grapheme) {
            prefix.push_str(grapheme);
            run_len = run_len.saturating_add(1);
        } else {
            prefix.clear();
            run_len = 0;
        }
    }
    (cursor.saturating_sub(run_len), prefix)
}

fn is_identifier_grapheme(grapheme: &str) -> bool {
    let mut chars = grapheme.chars();
    let Some(ch) = chars.next() else {
        return false;
    };
    chars.next().is_none() && (ch == '_' || UnicodeXID::is_xid_continue(ch))
}

fn starts_with_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    haystack
        .get(..needle.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(needle))
}

fn is_callable_name(name: &str) -> bool {
    if name.is_empty() || name.contains('(') || name.chars().any(char::is_whitespace) {
        return false;
    }

    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first == '_' || UnicodeXID::is_xid_start(first)) {
        return false;
    }

    chars.all(|ch| ch == '_' || UnicodeXID::is_xid_continue(ch))
}

fn is_plain_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|ch| ch == '_' || ch.is_alphanumeric())
}
