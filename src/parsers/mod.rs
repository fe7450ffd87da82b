//! # 解析器模块
//!
//! 提供测量数据文件的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: qdata

pub mod qdata;

use crate::error::{ParacrystalError, Result};
use std::path::Path;

/// 从文件路径推断格式并读取 q 值
pub fn parse_data_file(path: &Path) -> Result<Vec<f64>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "dat" | "txt" | "csv" | "xy" | "abs" => qdata::parse_q_file(path),
        _ => Err(ParacrystalError::UnsupportedFormat(format!(
            "Cannot determine format for: {}",
            path.display()
        ))),
    }
}
