//! # batch 子命令 CLI 定义
//!
//! 在测量数据文件的 q 点上批量求值模型。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`

use crate::cli::model::ModelArgs;

use clap::Args;
use std::path::PathBuf;

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input: data file or directory containing data files
    pub input: PathBuf,

    /// Output directory for <stem>_iq.csv files
    #[arg(short, long, default_value = "bcc_batch")]
    pub output: PathBuf,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Glob patterns for input files (comma separated)
    #[arg(long, default_value = "*.dat,*.txt,*.csv")]
    pub pattern: String,

    /// Number of parallel jobs (0 = all cores)
    #[arg(short, long, default_value_t = 0, env = "PARACRYSTAL_JOBS")]
    pub jobs: usize,

    /// Recurse into subdirectories
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
