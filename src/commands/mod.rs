//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `sas/`, `models/`, `parsers/`, `utils/`
//! - 子模块: iq, iqxy, sq, batch

pub mod batch;
pub mod iq;
pub mod iqxy;
pub mod sq;

use crate::cli::model::OutputFormat;
use crate::cli::Commands;
use crate::error::{ParacrystalError, Result};
use crate::models::BccParacrystal;
use crate::utils::output;

use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Iq(args) => iq::execute(args),
        Commands::Iqxy(args) => iqxy::execute(args),
        Commands::Sq(args) => sq::execute(args),
        Commands::Batch(args) => batch::execute(args),
    }
}

/// 从文件扩展名推断输出格式
pub(crate) fn guess_format_from_extension(path: &Path) -> OutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => OutputFormat::Svg,
        Some("csv") => OutputFormat::Csv,
        Some("xy") | Some("dat") | Some("txt") => OutputFormat::Xy,
        _ => OutputFormat::Png,
    }
}

/// 解析 q 范围，如 "0.001-0.5" 或 "1e-3:0.5"
pub(crate) fn parse_range(range: &str) -> Result<(f64, f64)> {
    let invalid = || ParacrystalError::InvalidRange(range.to_string());

    // 指数中的负号不是分隔符
    let bytes = range.as_bytes();
    let split_at = range
        .char_indices()
        .find(|&(i, c)| {
            c == ':' || (c == '-' && i > 0 && !matches!(bytes[i - 1], b'e' | b'E'))
        })
        .map(|(i, _)| i)
        .ok_or_else(invalid)?;

    let min: f64 = range[..split_at].trim().parse().map_err(|_| invalid())?;
    let max: f64 = range[split_at + 1..].trim().parse().map_err(|_| invalid())?;

    if !(min.is_finite() && max.is_finite()) || min < 0.0 || max <= min {
        return Err(ParacrystalError::InvalidRange(format!(
            "{} (must be 0 <= min < max)",
            range
        )));
    }

    Ok((min, max))
}

/// 检查模型参数是否落在物理区间内（只警告，不阻止计算）
pub(crate) fn check_model(model: &BccParacrystal) {
    let lattice = &model.lattice;
    let particle = &model.particle;

    if lattice.dnn <= 0.0 {
        output::print_warning(&format!("dnn = {} is not positive", lattice.dnn));
    }
    if lattice.d_factor <= 0.0 {
        output::print_warning(&format!(
            "d_factor = {} gives an undefined structure factor",
            lattice.d_factor
        ));
    }
    if particle.radius <= 0.0 {
        output::print_warning(&format!("radius = {} is not positive", particle.radius));
    }
    let vf = model.volume_fraction();
    if vf > 1.0 {
        output::print_warning(&format!(
            "volume fraction {:.3} exceeds 1: spheres overlap at radius {} and dnn {}",
            vf, particle.radius, lattice.dnn
        ));
    }
}

/// 打印模型参数
pub(crate) fn print_model(model: &BccParacrystal) {
    output::print_param("dnn", model.lattice.dnn, "Å");
    output::print_param("d_factor", model.lattice.d_factor, "");
    output::print_param("radius", model.particle.radius, "Å");
    output::print_param("sld", model.particle.sld, "1e-6/Å²");
    output::print_param("sld_solvent", model.particle.solvent_sld, "1e-6/Å²");
    output::print_param("scale", model.scale, "");
    output::print_param("background", model.background, "1/cm");
    output::print_param("volume fraction", model.volume_fraction(), "");
}
