//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `iq`: 粉末平均散射曲线
//! - `iqxy`: 定向二维探测器图像
//! - `sq`: 单点结构因子
//! - `batch`: 在测量数据的 q 点上批量求值
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: model, iq, sq, batch

pub mod batch;
pub mod iq;
pub mod model;
pub mod sq;

use clap::{Parser, Subcommand};

/// paracrystal - BCC 次晶小角散射计算
#[derive(Parser, Debug)]
#[command(name = "paracrystal")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Small-angle scattering from spheres on a BCC paracrystalline lattice",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the powder-averaged intensity I(q)
    Iq(iq::IqArgs),

    /// Compute the oriented 2D detector intensity I(qx, qy)
    Iqxy(iq::IqxyArgs),

    /// Evaluate the bare structure factor at a crystal-frame q vector
    Sq(sq::SqArgs),

    /// Evaluate I(q) at the q points of measured data files
    Batch(batch::BatchArgs),
}
