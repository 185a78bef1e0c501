//! 文本快照：不可变文本值，同时记录字素长度与 UTF-16 长度

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

static SNAPSHOT_ID: AtomicU64 = AtomicU64::new(0);

fn next_snapshot_id() -> u64 {
    SNAPSHOT_ID.fetch_add(1, Ordering::Relaxed)
}

/// 快照身份。进程内单调递增，用于判断候选是否过期。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SnapshotId(u64);

impl SnapshotId {
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// 全文的一次性捕获。
///
/// 文本创建后不再变化，只会整体替换；两种长度在构造时一趟扫描算出。
/// 克隆共享底层文本并保留身份；用新文本构造必然得到新身份。
#[derive(Clone, Debug)]
pub struct TextSnapshot {
    text: Arc<str>,
    id: SnapshotId,
    len_logical: usize,
    len_utf16: usize,
}

impl TextSnapshot {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        let text: Arc<str> = text.into();

        let mut len_logical = 0usize;
        let mut len_utf16 = 0usize;
        for grapheme in text.graphemes(true) {
            len_logical = len_logical.saturating_add(1);
            len_utf16 =
                len_utf16.saturating_add(grapheme.chars().map(char::len_utf16).sum::<usize>());
        }

        Self {
            text,
            id: SnapshotId(next_snapshot_id()),
            len_logical,
            len_utf16,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn id(&self) -> SnapshotId {
        self.id
    }

    /// 字素单位下的文本长度。
    pub fn len_logical(&self) -> usize {
        self.len_logical
    }

    /// UTF-16 编码单元下的文本长度。
    pub fn len_utf16(&self) -> usize {
        self.len_utf16
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/snapshot.rs"]
mod tests;
