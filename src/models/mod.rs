//! 数据模型层

pub mod offset;
pub mod selection;
pub mod snapshot;

pub use offset::{LogicalOffset, Utf16Offset};
pub use selection::Selection;
pub use snapshot::{SnapshotId, TextSnapshot};
