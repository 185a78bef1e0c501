//! Suggestion data contracts between the session and provider implementations.

use crate::models::LogicalOffset;

/// One completion suggestion with enough metadata to display and apply it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Label shown in the selection UI.
    pub display_text: String,
    /// Text substituted for the span `[insertion_start, query cursor)`.
    pub insertion_text: String,
    /// Logical offset where the replaced span begins. For partial-token
    /// completions this is the start of the token already typed.
    pub insertion_start: LogicalOffset,
    /// Cursor position after applying, relative to `insertion_start` in
    /// logical units. Negative values count back from the end of the
    /// inserted text.
    pub cursor_after_insertion: i64,
}

pub trait SuggestionProvider: Send + Sync {
    /// Completion suggestions for the cursor position, most relevant first,
    /// ties broken by lexicographic `display_text` order. An empty result
    /// means no completions apply at this context; it is not an error.
    ///
    /// Implementations uphold `insertion_start <= cursor` for every returned
    /// suggestion, and keep `insertion_start` within the logical length of
    /// `text`. Runs synchronously and may block; callers decide whether to
    /// move it off the interactive thread.
    fn query(&self, text: &str, cursor: LogicalOffset) -> Vec<Suggestion>;
}
