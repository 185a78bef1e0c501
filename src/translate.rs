//! Offset translation between logical grapheme units and UTF-16 code units.
//!
//! The two units diverge on any text containing surrogate-pair code points
//! or multi-scalar graphemes, so every conversion walks the text from the
//! start summing per-grapheme widths. There is no 1:1 shortcut.

use unicode_segmentation::UnicodeSegmentation;

use crate::models::{LogicalOffset, TextSnapshot, Utf16Offset};

pub type Result<T> = std::result::Result<T, OffsetError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetError {
    /// Offset lies outside `[0, len]` for its unit.
    OutOfRange { offset: usize, len: usize },
    /// UTF-16 offset falls strictly inside a multi-unit grapheme.
    Misaligned { offset: usize },
}

impl std::fmt::Display for OffsetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OffsetError::OutOfRange { offset, len } => {
                write!(f, "Offset {} out of range for length {}", offset, len)
            }
            OffsetError::Misaligned { offset } => {
                write!(f, "UTF-16 offset {} bisects a multi-unit character", offset)
            }
        }
    }
}

impl std::error::Error for OffsetError {}

/// Translates a logical offset into UTF-16 units. `offset == len_logical`
/// is the valid end position.
pub fn to_utf16(snapshot: &TextSnapshot, offset: LogicalOffset) -> Result<Utf16Offset> {
    match utf16_of_logical(snapshot.text(), offset.raw()) {
        Some(units) => Ok(Utf16Offset::new(units)),
        None => Err(OffsetError::OutOfRange {
            offset: offset.raw(),
            len: snapshot.len_logical(),
        }),
    }
}

/// Translates a UTF-16 offset into logical units. Fails with `Misaligned`
/// when the offset does not land on a grapheme boundary; callers snap to a
/// boundary first instead of relying on any rounding here.
pub fn to_logical(snapshot: &TextSnapshot, offset: Utf16Offset) -> Result<LogicalOffset> {
    let target = offset.raw();
    if target > snapshot.len_utf16() {
        return Err(OffsetError::OutOfRange {
            offset: target,
            len: snapshot.len_utf16(),
        });
    }

    let mut utf16 = 0usize;
    let mut logical = 0usize;
    for grapheme in snapshot.text().graphemes(true) {
        if utf16 == target {
            return Ok(LogicalOffset::new(logical));
        }
        utf16 = utf16.saturating_add(grapheme_utf16_len(grapheme));
        if utf16 > target {
            return Err(OffsetError::Misaligned { offset: target });
        }
        logical = logical.saturating_add(1);
    }
    Ok(LogicalOffset::new(logical))
}

/// UTF-16 width of the first `target` graphemes of `text`, or `None` when
/// `target` exceeds the grapheme count.
pub(crate) fn utf16_of_logical(text: &str, target: usize) -> Option<usize> {
    let mut utf16 = 0usize;
    let mut seen = 0usize;
    for grapheme in text.graphemes(true) {
        if seen == target {
            return Some(utf16);
        }
        utf16 = utf16.saturating_add(grapheme_utf16_len(grapheme));
        seen = seen.saturating_add(1);
    }
    (seen == target).then_some(utf16)
}

/// Byte index of the grapheme at logical `offset`, clamped to the end of
/// the text when the offset is past the last grapheme. Callers validate
/// range beforehand.
pub(crate) fn byte_of_logical(text: &str, offset: usize) -> usize {
    for (seen, (byte_idx, _)) in text.grapheme_indices(true).enumerate() {
        if seen == offset {
            return byte_idx;
        }
    }
    text.len()
}

fn grapheme_utf16_len(grapheme: &str) -> usize {
    grapheme.chars().map(char::len_utf16).sum()
}
