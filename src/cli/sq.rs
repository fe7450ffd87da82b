//! # sq 子命令 CLI 定义
//!
//! 在晶体坐标系中的单个散射矢量处求结构因子。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/sq.rs`

use clap::Args;

/// sq 子命令参数
#[derive(Args, Debug)]
pub struct SqArgs {
    /// Crystal-frame component qa (1/Å)
    #[arg(long, allow_negative_numbers = true)]
    pub qa: f64,

    /// Crystal-frame component qb (1/Å)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub qb: f64,

    /// Crystal-frame component qc (1/Å)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub qc: f64,

    /// Nearest-neighbour distance dnn (Å)
    #[arg(long, default_value_t = 220.0)]
    pub dnn: f64,

    /// Paracrystal distortion factor g (dimensionless)
    #[arg(long, default_value_t = 0.06)]
    pub d_factor: f64,

    /// Particle radius for the volume fraction (Å)
    #[arg(long, default_value_t = 40.0)]
    pub radius: f64,
}
