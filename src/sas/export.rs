//! # 散射数据导出
//!
//! 导出 I(q) 曲线与探测器图像到 CSV 和 XY 格式。
//!
//! ## 支持格式
//! - CSV: 曲线为 q, intensity；图像为 qx, qy, intensity（每像素一行）
//! - XY: 带注释头的两列文本（q, intensity），SasView 等软件可直接读取
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `models/curve.rs` 的 ScatteringCurve, DetectorImage
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{ParacrystalError, Result};
use crate::models::{BccParacrystal, DetectorImage, ScatteringCurve};

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 图像 CSV 行
#[derive(Serialize)]
struct PixelRow {
    qx: f64,
    qy: f64,
    intensity: f64,
}

fn write_error(path: &Path) -> impl Fn(std::io::Error) -> ParacrystalError + '_ {
    move |e| ParacrystalError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    }
}

/// 导出曲线为 CSV 格式
pub fn curve_to_csv(curve: &ScatteringCurve, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for point in &curve.points {
        wtr.serialize(point)?;
    }

    wtr.flush().map_err(write_error(output_path))?;

    Ok(())
}

/// 导出曲线为 XY 格式
pub fn curve_to_xy(
    curve: &ScatteringCurve,
    model: &BccParacrystal,
    output_path: &Path,
) -> Result<()> {
    let file = File::create(output_path).map_err(write_error(output_path))?;
    let mut out = BufWriter::new(file);

    write_model_header(&mut out, &curve.name, model).map_err(write_error(output_path))?;
    writeln!(out, "# Columns: q (1/Angstrom), I(q) (1/cm)").map_err(write_error(output_path))?;
    writeln!(out, "#").map_err(write_error(output_path))?;

    for point in &curve.points {
        writeln!(out, "{:.6e}\t{:.6e}", point.q, point.intensity)
            .map_err(write_error(output_path))?;
    }

    out.flush().map_err(write_error(output_path))?;

    Ok(())
}

/// 导出探测器图像为 CSV 格式
pub fn image_to_csv(image: &DetectorImage, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for (row, &qy) in image.qy.iter().enumerate() {
        for (col, &qx) in image.qx.iter().enumerate() {
            let intensity = image.get(row, col).unwrap_or(f64::NAN);
            wtr.serialize(PixelRow { qx, qy, intensity })?;
        }
    }

    wtr.flush().map_err(write_error(output_path))?;

    Ok(())
}

/// 写入模型参数注释头
fn write_model_header<W: Write>(
    out: &mut W,
    name: &str,
    model: &BccParacrystal,
) -> std::io::Result<()> {
    writeln!(out, "# BCC paracrystal: {}", name)?;
    writeln!(
        out,
        "# dnn = {} A, d_factor = {}, radius = {} A",
        model.lattice.dnn, model.lattice.d_factor, model.particle.radius
    )?;
    writeln!(
        out,
        "# sld = {}, sld_solvent = {} (1e-6/A^2)",
        model.particle.sld, model.particle.solvent_sld
    )?;
    writeln!(
        out,
        "# scale = {}, background = {} (1/cm)",
        model.scale, model.background
    )
}
