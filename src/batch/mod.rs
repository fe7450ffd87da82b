//! # 批量处理模块
//!
//! 收集测量数据文件并在其 q 点上并行求值模型。
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 使用
//! - 子模块: collector, runner

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchRunner, BatchSummary, FileOutcome};
