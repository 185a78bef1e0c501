//! Pure application of a chosen candidate: new text plus new UTF-16 caret.

use unicode_segmentation::UnicodeSegmentation;

use crate::models::{Selection, TextSnapshot, Utf16Offset};
use crate::session::Candidate;
use crate::translate::{self, OffsetError};

pub type Result<T> = std::result::Result<T, ApplyError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// The snapshot was replaced after the candidate's query ran.
    StaleCandidate,
    /// The candidate's offsets do not fit the snapshot it was applied to.
    InvalidCandidate { reason: &'static str },
    /// Translating the new cursor position failed.
    Offset(OffsetError),
}

impl std::fmt::Display for ApplyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplyError::StaleCandidate => {
                write!(f, "Candidate is stale: the text changed since the query")
            }
            ApplyError::InvalidCandidate { reason } => {
                write!(f, "Invalid candidate: {}", reason)
            }
            ApplyError::Offset(e) => write!(f, "Cursor translation failed: {}", e),
        }
    }
}

impl std::error::Error for ApplyError {}

impl From<OffsetError> for ApplyError {
    fn from(e: OffsetError) -> Self {
        ApplyError::Offset(e)
    }
}

/// Outcome of `apply`: the full replacement text and the caret to hand back
/// to the text widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub text: String,
    pub selection: Selection,
}

/// Computes the text and UTF-16 caret that result from accepting
/// `candidate` on `snapshot`.
///
/// The logical span `[insertion_start, query_cursor)` of the query-time
/// snapshot (the partially typed token) is replaced by the candidate's
/// insertion text. The caret lands at `insertion_start` plus the
/// candidate's relative cursor offset, translated against the new text.
///
/// Pure function: no I/O, no session state touched, identical inputs give
/// byte-identical output. All failures are typed; nothing is clamped.
pub fn apply(snapshot: &TextSnapshot, candidate: &Candidate) -> Result<Applied> {
    if candidate.snapshot() != snapshot.id() {
        return Err(ApplyError::StaleCandidate);
    }

    let len = snapshot.len_logical();
    let start = candidate.insertion_start().raw();
    let cursor = candidate.query_cursor().raw();
    if start > len {
        return Err(ApplyError::InvalidCandidate {
            reason: "insertion start beyond the end of the text",
        });
    }
    if start > cursor {
        return Err(ApplyError::InvalidCandidate {
            reason: "insertion start after the query cursor",
        });
    }
    if cursor > len {
        return Err(ApplyError::InvalidCandidate {
            reason: "query cursor beyond the end of the text",
        });
    }

    let text = snapshot.text();
    let insertion = candidate.insertion_text();
    let start_byte = translate::byte_of_logical(text, start);
    let cursor_byte = translate::byte_of_logical(text, cursor);

    let mut new_text =
        String::with_capacity(text.len() - (cursor_byte - start_byte) + insertion.len());
    new_text.push_str(&text[..start_byte]);
    new_text.push_str(insertion);
    new_text.push_str(&text[cursor_byte..]);

    let inserted_len = insertion.graphemes(true).count() as i64;
    let relative = candidate.cursor_after_insertion();
    let resolved = if relative < 0 {
        inserted_len + relative
    } else {
        relative
    };
    if resolved < 0 || resolved > inserted_len {
        return Err(ApplyError::InvalidCandidate {
            reason: "cursor offset outside the inserted text",
        });
    }

    let new_cursor = start.saturating_add(resolved as usize);
    let location = match translate::utf16_of_logical(&new_text, new_cursor) {
        Some(units) => Utf16Offset::new(units),
        None => {
            // 拼接处字素合并时可能出现：新文本的字素数少于按成分推算的值
            return Err(ApplyError::Offset(OffsetError::OutOfRange {
                offset: new_cursor,
                len: new_text.graphemes(true).count(),
            }));
        }
    };

    Ok(Applied {
        text: new_text,
        selection: Selection::caret(location),
    })
}
