//! # 实验数据 q 列解析器
//!
//! 从测量数据文件读取散射矢量 q（第一列）。
//!
//! ## 格式说明
//! ```text
//! # 注释行（# 或 % 开头）
//! q  I  dI          <- 非数值表头行会被跳过
//! 0.0010 123.4 1.2
//! 0.0012,120.1,1.1  <- 逗号、分号、空白分隔均可
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 无外部模块依赖

use crate::error::{ParacrystalError, Result};
use std::fs;
use std::path::Path;

/// 解析数据文件中的 q 列
pub fn parse_q_file(path: &Path) -> Result<Vec<f64>> {
    let content = fs::read_to_string(path).map_err(|e| ParacrystalError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_q_content(&content).map_err(|reason| ParacrystalError::ParseError {
        format: "q-data".to_string(),
        path: path.display().to_string(),
        reason,
    })
}

/// 从字符串内容解析 q 列
pub fn parse_q_content(content: &str) -> std::result::Result<Vec<f64>, String> {
    let mut qs = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('%') {
            continue;
        }

        let first = match line
            .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
            .find(|s| !s.is_empty())
        {
            Some(token) => token,
            None => continue,
        };

        match first.parse::<f64>() {
            Ok(q) if q.is_finite() => qs.push(q),
            Ok(q) => {
                return Err(format!("line {}: non-finite q value {}", line_no + 1, q));
            }
            // 表头只允许出现在数据之前
            Err(_) if qs.is_empty() => continue,
            Err(_) => {
                return Err(format!(
                    "line {}: cannot parse '{}' as q value",
                    line_no + 1,
                    first
                ));
            }
        }
    }

    if qs.is_empty() {
        return Err("no q values found".to_string());
    }

    Ok(qs)
}
