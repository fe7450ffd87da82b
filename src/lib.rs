//! # paracrystal - BCC 次晶小角散射模型
//!
//! 体心立方次晶晶格上球形粒子的小角散射强度：
//! 结构因子、体积分数、粉末取向平均与定向二维强度。
//!
//! ## 模块结构
//! ```text
//! lib.rs
//!   ├── sas/       (散射核函数、求积、并行计算、绘图与导出)
//!   ├── models/    (模型参数与计算结果)
//!   ├── parsers/   (测量数据 q 列解析)
//!   ├── batch/     (批量文件收集与并行执行)
//!   ├── cli/       (命令行参数定义)
//!   ├── commands/  (命令执行逻辑)
//!   ├── utils/     (终端输出与进度条)
//!   └── error.rs   (错误处理)
//! ```

pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
pub mod models;
pub mod parsers;
pub mod sas;
pub mod utils;

pub use error::{ParacrystalError, Result};
pub use models::BccParacrystal;
