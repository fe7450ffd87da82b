//! # 模型参数 CLI 定义
//!
//! 各子命令共用的模型参数组，通过 `#[command(flatten)]` 嵌入。
//! 缺省值与 `BccParacrystal::default()` 一致。
//!
//! ## 依赖关系
//! - 被 `cli/iq.rs`, `cli/sq.rs`, `cli/batch.rs` 使用
//! - 构造 `models/parameters.rs` 的 BccParacrystal

use crate::models::{BccParacrystal, LatticeParameters, Orientation, ParticleParameters};

use clap::{Args, ValueEnum};

/// 晶格、粒子与强度标度参数
#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// Nearest-neighbour distance dnn (Å)
    #[arg(long, default_value_t = 220.0)]
    pub dnn: f64,

    /// Paracrystal distortion factor g (dimensionless)
    #[arg(long, default_value_t = 0.06)]
    pub d_factor: f64,

    /// Particle radius (Å)
    #[arg(long, default_value_t = 40.0)]
    pub radius: f64,

    /// Particle scattering length density (1e-6/Å²)
    #[arg(long, default_value_t = 4.0, allow_negative_numbers = true)]
    pub sld: f64,

    /// Solvent scattering length density (1e-6/Å²)
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub sld_solvent: f64,

    /// Intensity scale factor
    #[arg(long, default_value_t = 1.0)]
    pub scale: f64,

    /// Incoherent background (1/cm)
    #[arg(long, default_value_t = 0.001, allow_negative_numbers = true)]
    pub background: f64,
}

impl ModelArgs {
    /// 构造模型（取向使用缺省值）
    pub fn to_model(&self) -> BccParacrystal {
        BccParacrystal {
            lattice: LatticeParameters::new(self.dnn, self.d_factor),
            particle: ParticleParameters::new(self.radius, self.sld, self.sld_solvent),
            orientation: Orientation::default(),
            scale: self.scale,
            background: self.background,
        }
    }
}

/// 晶体取向参数（度）
#[derive(Args, Debug, Clone)]
pub struct OrientationArgs {
    /// Angle between the c axis and the beam (degrees)
    #[arg(long, default_value_t = 60.0, allow_negative_numbers = true)]
    pub theta: f64,

    /// Rotation about the beam (degrees)
    #[arg(long, default_value_t = 60.0, allow_negative_numbers = true)]
    pub phi: f64,

    /// Rotation about the c axis (degrees)
    #[arg(long, default_value_t = 60.0, allow_negative_numbers = true)]
    pub psi: f64,
}

impl OrientationArgs {
    pub fn to_orientation(&self) -> Orientation {
        Orientation::new(self.theta, self.phi, self.psi)
    }
}

/// 输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV data file
    Csv,
    /// XY data file (1D curves only)
    Xy,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "png"),
            OutputFormat::Svg => write!(f, "svg"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Xy => write!(f, "xy"),
        }
    }
}
