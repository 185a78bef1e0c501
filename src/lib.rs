//! suggest - 代码补全核心库
//!
//! 在两套互不兼容的文本偏移单位（补全引擎的逻辑字素偏移与屏幕端选区 API 的
//! UTF-16 编码单元）之间做显式换算，管理补全候选会话，并以纯函数方式计算
//! 选中候选后的新文本与新光标。
//!
//! 模块结构：
//! - models: 数据模型（偏移、选区、文本快照）
//! - translate: 逻辑偏移与 UTF-16 偏移互转
//! - provider: 补全建议提供者契约
//! - session: 候选列表会话
//! - apply: 候选应用（新文本 + 新光标）
//! - docs: 文档索引型建议提供者
//! - rank: 使用频率排序

pub mod apply;
pub mod docs;
pub mod models;
pub mod provider;
pub mod rank;
pub mod session;
pub mod translate;
