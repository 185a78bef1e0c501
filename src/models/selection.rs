//! 选区模型：文本控件回写用的 UTF-16 光标/选区

use super::offset::Utf16Offset;

/// 控件端选区。`length` 为零时表示纯光标。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub location: Utf16Offset,
    pub length: Utf16Offset,
}

impl Selection {
    pub const fn new(location: Utf16Offset, length: Utf16Offset) -> Self {
        Self { location, length }
    }

    /// 在指定位置构造零长度选区（光标）。
    pub const fn caret(location: Utf16Offset) -> Self {
        Self {
            location,
            length: Utf16Offset::new(0),
        }
    }

    pub const fn is_caret(self) -> bool {
        self.length.raw() == 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/selection.rs"]
mod tests;
