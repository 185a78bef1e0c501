//! 偏移模型：逻辑字素偏移与 UTF-16 编码单元偏移，两种单位互不混用

/// 以字素（用户感知字符）计数的文本位置。
///
/// 只能与同单位偏移比较；与 UTF-16 偏移互转必须经过 `translate` 模块。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogicalOffset(usize);

impl LogicalOffset {
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> usize {
        self.0
    }
}

/// 以 16 位编码单元计数的文本位置，即屏幕端选区 API 使用的单位。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Utf16Offset(usize);

impl Utf16Offset {
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> usize {
        self.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/offset.rs"]
mod tests;
