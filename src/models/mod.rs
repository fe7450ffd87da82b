//! # 数据模型模块
//!
//! 定义模型参数与计算结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `sas/` 和 `commands/` 使用
//! - 子模块: parameters, curve

pub mod curve;
pub mod parameters;

pub use curve::{CurvePoint, DetectorImage, ScatteringCurve};
pub use parameters::{
    BccParacrystal, LatticeParameters, Orientation, ParticleParameters, ScatteringVector,
};
