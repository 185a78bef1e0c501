//! Completion session: the single-owner candidate cache for the current
//! cursor context.
//!
//! One live session per text widget. The candidate list is replaced
//! wholesale on every successful refresh and left untouched on a failed
//! one, so a stale list is always a coherent earlier query result.

use std::sync::Arc;

use crate::models::{LogicalOffset, SnapshotId, TextSnapshot, Utf16Offset};
use crate::provider::{Suggestion, SuggestionProvider};
use crate::translate::{self, OffsetError};

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    Offset(OffsetError),
    IndexOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::Offset(e) => write!(f, "Cursor translation failed: {}", e),
            SessionError::IndexOutOfRange { index, len } => {
                write!(f, "Candidate index {} out of range for {} candidates", index, len)
            }
        }
    }
}

impl std::error::Error for SessionError {}

impl From<OffsetError> for SessionError {
    fn from(e: OffsetError) -> Self {
        SessionError::Offset(e)
    }
}

/// A suggestion stamped with the query context it was computed in. Only a
/// session produces candidates; `apply` uses the stamp to reject candidates
/// whose snapshot is gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    suggestion: Suggestion,
    query_cursor: LogicalOffset,
    snapshot: SnapshotId,
}

impl Candidate {
    pub fn display_text(&self) -> &str {
        &self.suggestion.display_text
    }

    pub fn insertion_text(&self) -> &str {
        &self.suggestion.insertion_text
    }

    pub fn insertion_start(&self) -> LogicalOffset {
        self.suggestion.insertion_start
    }

    pub fn cursor_after_insertion(&self) -> i64 {
        self.suggestion.cursor_after_insertion
    }

    /// Logical cursor position the query ran at.
    pub fn query_cursor(&self) -> LogicalOffset {
        self.query_cursor
    }

    /// Identity of the snapshot the query ran against.
    pub fn snapshot(&self) -> SnapshotId {
        self.snapshot
    }
}

/// Token handed out by `begin_refresh` and redeemed by `commit_refresh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingQuery {
    cursor: LogicalOffset,
    snapshot: SnapshotId,
    ticket: u64,
}

impl PendingQuery {
    /// Logical cursor to hand to `SuggestionProvider::query`.
    pub fn cursor(&self) -> LogicalOffset {
        self.cursor
    }

    pub fn snapshot(&self) -> SnapshotId {
        self.snapshot
    }
}

#[derive(Debug, Clone, Copy)]
struct QueryContext {
    cursor: LogicalOffset,
    snapshot: SnapshotId,
}

pub struct CompletionSession {
    provider: Arc<dyn SuggestionProvider>,
    candidates: Vec<Candidate>,
    context: Option<QueryContext>,
    pending: Option<PendingQuery>,
    next_ticket: u64,
}

impl CompletionSession {
    pub fn new(provider: Arc<dyn SuggestionProvider>) -> Self {
        Self {
            provider,
            candidates: Vec::new(),
            context: None,
            pending: None,
            next_ticket: 0,
        }
    }

    /// Re-queries the provider for the given snapshot and UTF-16 cursor and
    /// replaces the candidate list. On a translation failure the previous
    /// list stays in place and the error is returned.
    pub fn refresh(&mut self, snapshot: &TextSnapshot, cursor: Utf16Offset) -> Result<()> {
        let pending = self.begin_refresh(snapshot, cursor)?;
        let suggestions = self.provider.query(snapshot.text(), pending.cursor());
        let committed = self.commit_refresh(pending, suggestions, snapshot);
        debug_assert!(committed, "synchronous refresh commit cannot be superseded");
        Ok(())
    }

    /// First half of an asynchronous refresh: validates and translates the
    /// cursor, records the pending query, and returns the token the caller
    /// needs for `commit_refresh`. The candidate list is not touched.
    pub fn begin_refresh(
        &mut self,
        snapshot: &TextSnapshot,
        cursor: Utf16Offset,
    ) -> Result<PendingQuery> {
        let logical = translate::to_logical(snapshot, cursor)?;
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let pending = PendingQuery {
            cursor: logical,
            snapshot: snapshot.id(),
            ticket: self.next_ticket,
        };
        self.pending = Some(pending);
        Ok(pending)
    }

    /// Second half of an asynchronous refresh. Installs `suggestions` only
    /// when `pending` is still the latest begun query and its snapshot is
    /// still the current one; otherwise the results are dropped and the
    /// previous candidate list survives. Returns whether the commit landed.
    pub fn commit_refresh(
        &mut self,
        pending: PendingQuery,
        suggestions: Vec<Suggestion>,
        current: &TextSnapshot,
    ) -> bool {
        if self.pending != Some(pending) {
            tracing::debug!(ticket = pending.ticket, "superseded completion results dropped");
            return false;
        }
        if current.id() != pending.snapshot {
            tracing::debug!(
                queried = pending.snapshot.raw(),
                current = current.id().raw(),
                "completion results for a replaced snapshot dropped"
            );
            self.pending = None;
            return false;
        }

        self.pending = None;
        self.candidates = suggestions
            .into_iter()
            .map(|suggestion| Candidate {
                suggestion,
                query_cursor: pending.cursor,
                snapshot: pending.snapshot,
            })
            .collect();
        self.context = Some(QueryContext {
            cursor: pending.cursor,
            snapshot: pending.snapshot,
        });
        tracing::debug!(
            count = self.candidates.len(),
            cursor = pending.cursor.raw(),
            "completion candidates replaced"
        );
        true
    }

    /// Current candidate list, in provider order. Stable between refreshes.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// The candidate at `index` without mutating session state.
    pub fn select(&self, index: usize) -> Result<&Candidate> {
        self.candidates.get(index).ok_or(SessionError::IndexOutOfRange {
            index,
            len: self.candidates.len(),
        })
    }

    /// Drops the candidate list and any in-flight query. Hosts call this on
    /// a text change or cursor move they do not intend to re-query for.
    pub fn invalidate(&mut self) {
        self.candidates.clear();
        self.context = None;
        self.pending = None;
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Logical cursor of the query the current list was computed at.
    pub fn query_cursor(&self) -> Option<LogicalOffset> {
        self.context.map(|context| context.cursor)
    }

    /// Whether the current list was computed against this snapshot.
    pub fn is_current_for(&self, snapshot: &TextSnapshot) -> bool {
        self.context
            .is_some_and(|context| context.snapshot == snapshot.id())
    }
}
