//! # iq / iqxy 子命令 CLI 定义
//!
//! - `iq`: 粉末平均 I(q) 曲线
//! - `iqxy`: 固定取向下的二维探测器图像
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/iq.rs`, `commands/iqxy.rs`

use crate::cli::model::{ModelArgs, OrientationArgs, OutputFormat};

use clap::Args;
use std::path::PathBuf;

/// iq 子命令参数
#[derive(Args, Debug)]
pub struct IqArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// q range in 1/Å (e.g., "0.001-0.5" or "1e-3:0.5")
    #[arg(short, long, default_value = "0.001-0.5")]
    pub q_range: String,

    /// Number of q points
    #[arg(short = 'n', long, default_value_t = 200)]
    pub points: usize,

    /// Use logarithmic q spacing
    #[arg(long, default_value_t = false)]
    pub log_spacing: bool,

    /// Output file path
    #[arg(short, long, default_value = "bcc_iq.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Number of parallel jobs (0 = all cores)
    #[arg(short, long, default_value_t = 0, env = "PARACRYSTAL_JOBS")]
    pub jobs: usize,

    /// Number of rows in the printed summary table
    #[arg(long, default_value_t = 10)]
    pub table_rows: usize,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot
    #[arg(long)]
    pub title: Option<String>,
}

/// iqxy 子命令参数
#[derive(Args, Debug)]
pub struct IqxyArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    #[command(flatten)]
    pub orientation: OrientationArgs,

    /// Detector extent: grid covers [-qmax, qmax] in both qx and qy (1/Å)
    #[arg(long, default_value_t = 0.1)]
    pub qmax: f64,

    /// Pixels per side
    #[arg(long, default_value_t = 128)]
    pub pixels: usize,

    /// Output file path
    #[arg(short, long, default_value = "bcc_iqxy.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Number of parallel jobs (0 = all cores)
    #[arg(short, long, default_value_t = 0, env = "PARACRYSTAL_JOBS")]
    pub jobs: usize,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 900)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot
    #[arg(long)]
    pub title: Option<String>,
}
