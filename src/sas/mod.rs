//! # 小角散射 (SAS) 计算模块
//!
//! 提供 BCC 次晶中球形粒子的散射强度计算。
//!
//! ## 子模块
//! - `paracrystal`: 结构因子、体积分数、取向平均与定向强度
//! - `sphere`: 球形状因子与体积
//! - `orientation`: 探测器坐标到晶体坐标的取向变换
//! - `quadrature` / `gauss150`: 150 点 Gauss-Legendre 求积表
//! - `calculator`: q 数组与探测器网格的并行批量计算
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `models/parameters.rs` 使用
//! - 使用 `models/curve.rs`

pub mod calculator;
pub mod export;
pub mod gauss150;
pub mod orientation;
pub mod paracrystal;
pub mod plot;
pub mod quadrature;
pub mod sphere;

pub use calculator::{GridSpacing, SasCalculator};
pub use paracrystal::{
    bcc_volume_fraction, form_volume, isotropic_intensity, orientational_average,
    oriented_intensity, structure_factor,
};
