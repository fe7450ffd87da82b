//! # 散射图表生成
//!
//! 使用 `plotters` 库生成 I(q) 曲线图与二维探测器强度图。
//!
//! ## 功能
//! - 双对数坐标 I(q) 曲线
//! - log10 色标的 I(qx, qy) 热图
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `models/curve.rs` 的 ScatteringCurve, DetectorImage
//! - 使用 `plotters` 渲染图表

use crate::error::{ParacrystalError, Result};
use crate::models::{DetectorImage, ScatteringCurve};

use plotters::prelude::*;
use std::path::Path;

fn plot_error<E: std::fmt::Debug>(e: E) -> ParacrystalError {
    ParacrystalError::PlotError(format!("{:?}", e))
}

/// 生成 I(q) 曲线图
pub fn generate_curve_plot(
    curve: &ScatteringCurve,
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_curve_chart(&root, curve, title)?;
        root.present().map_err(plot_error)?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_curve_chart(&root, curve, title)?;
        root.present().map_err(plot_error)?;
    }
    Ok(())
}

/// 生成探测器热图
pub fn generate_image_plot(
    image: &DetectorImage,
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_image_chart(&root, image, title)?;
        root.present().map_err(plot_error)?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_image_chart(&root, image, title)?;
        root.present().map_err(plot_error)?;
    }
    Ok(())
}

/// 双对数坐标下可绘制的点
fn plottable_points(curve: &ScatteringCurve) -> Vec<(f64, f64)> {
    curve
        .points
        .iter()
        .filter(|p| p.q > 0.0 && p.intensity.is_finite() && p.intensity > 0.0)
        .map(|p| (p.q, p.intensity))
        .collect()
}

/// 绘制 I(q) 曲线
fn draw_curve_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    curve: &ScatteringCurve,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let data = plottable_points(curve);
    if data.is_empty() {
        return Err(ParacrystalError::PlotError(
            "No positive finite intensities to plot on log axes".to_string(),
        ));
    }

    root.fill(&WHITE).map_err(plot_error)?;

    let x_min = data.iter().map(|(x, _)| *x).fold(f64::INFINITY, f64::min);
    let x_max = data.iter().map(|(x, _)| *x).fold(f64::NEG_INFINITY, f64::max);
    let y_min = data.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let y_max = data.iter().map(|(_, y)| *y).fold(f64::NEG_INFINITY, f64::max);

    // 留出半个量级的边距
    let (x_lo, x_hi) = if x_max > x_min {
        (x_min, x_max)
    } else {
        (x_min * 0.5, x_max * 2.0)
    };
    let (y_lo, y_hi) = (y_min / 3.0, y_max * 3.0);

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d((x_lo..x_hi).log_scale(), (y_lo..y_hi).log_scale())
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc("q (Å⁻¹)")
        .y_desc("I(q) (cm⁻¹)")
        .x_label_formatter(&|x| format!("{:.0e}", x))
        .y_label_formatter(&|y| format!("{:.0e}", y))
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(plot_error)?;

    let line_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(data, line_color.stroke_width(2)))
        .map_err(plot_error)?;

    Ok(())
}

/// log10 强度 -> 颜色（蓝 -> 红）
fn heat_color(log_value: f64, log_min: f64, log_max: f64) -> HSLColor {
    let t = if log_max > log_min {
        ((log_value - log_min) / (log_max - log_min)).clamp(0.0, 1.0)
    } else {
        0.5
    };
    HSLColor(0.7 * (1.0 - t), 0.9, 0.5)
}

/// 绘制探测器热图
fn draw_image_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    image: &DetectorImage,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let (lo, hi) = image
        .finite_range()
        .filter(|(_, hi)| *hi > 0.0)
        .ok_or_else(|| ParacrystalError::PlotError("Image has no positive values".to_string()))?;
    let log_max = hi.log10();
    let log_min = if lo > 0.0 { lo.log10() } else { log_max - 6.0 };

    root.fill(&WHITE).map_err(plot_error)?;

    let half_x = half_pixel(&image.qx);
    let half_y = half_pixel(&image.qy);
    let x_range = axis_range(&image.qx, half_x);
    let y_range = axis_range(&image.qy, half_y);

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("qx (Å⁻¹)")
        .y_desc("qy (Å⁻¹)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(plot_error)?;

    let mut cells = Vec::with_capacity(image.values.len());
    for (row, &qy) in image.qy.iter().enumerate() {
        for (col, &qx) in image.qx.iter().enumerate() {
            let value = match image.get(row, col) {
                Some(v) if v.is_finite() && v > 0.0 => v.log10(),
                _ => continue,
            };
            let color = heat_color(value, log_min, log_max);
            cells.push(Rectangle::new(
                [(qx - half_x, qy - half_y), (qx + half_x, qy + half_y)],
                color.filled(),
            ));
        }
    }
    chart.draw_series(cells).map_err(plot_error)?;

    let range_text = format!("log10 I: {:.2} .. {:.2}", log_min, log_max);
    root.draw(&Text::new(
        range_text,
        (40, 10),
        ("sans-serif", 14).into_font().color(&BLACK),
    ))
    .map_err(plot_error)?;

    Ok(())
}

fn half_pixel(axis: &[f64]) -> f64 {
    if axis.len() >= 2 {
        0.5 * (axis[1] - axis[0]).abs()
    } else {
        0.5
    }
}

fn axis_range(axis: &[f64], half: f64) -> std::ops::Range<f64> {
    let lo = axis.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = axis.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (lo - half)..(hi + half)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CurvePoint;

    #[test]
    fn test_plottable_points_drop_non_positive() {
        let curve = ScatteringCurve::new(
            "c",
            vec![
                CurvePoint { q: 0.0, intensity: 1.0 },
                CurvePoint { q: 0.1, intensity: f64::NAN },
                CurvePoint { q: 0.2, intensity: -1.0 },
                CurvePoint { q: 0.3, intensity: 2.0 },
            ],
        );
        assert_eq!(plottable_points(&curve), vec![(0.3, 2.0)]);
    }

    #[test]
    fn test_heat_color_clamps() {
        let HSLColor(h_lo, _, _) = heat_color(-10.0, 0.0, 1.0);
        let HSLColor(h_hi, _, _) = heat_color(10.0, 0.0, 1.0);
        assert!((h_lo - 0.7).abs() < 1e-12);
        assert!(h_hi.abs() < 1e-12);
    }

    #[test]
    fn test_axis_range_pads_half_pixel() {
        let axis = [-0.075, -0.025, 0.025, 0.075];
        let half = half_pixel(&axis);
        assert!((half - 0.025).abs() < 1e-15);
        let range = axis_range(&axis, half);
        assert!((range.start + 0.1).abs() < 1e-15);
        assert!((range.end - 0.1).abs() < 1e-15);
    }

    #[test]
    fn test_empty_curve_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.svg");
        let curve = ScatteringCurve::new("c", vec![]);
        assert!(generate_curve_plot(&curve, &path, "test", 400, 300, true).is_err());
    }
}
