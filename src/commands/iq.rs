//! # iq 子命令实现
//!
//! 计算粉末平均散射曲线 I(q)。
//!
//! ## 功能
//! - 线性或对数 q 网格
//! - 并行计算（rayon）
//! - 输出图像 (PNG/SVG) 或数据文件 (CSV/XY)
//! - 打印曲线摘要表格
//!
//! ## 依赖关系
//! - 使用 `cli/iq.rs` 定义的 IqArgs
//! - 使用 `sas/` 模块进行计算与输出

use super::{check_model, guess_format_from_extension, parse_range, print_model};
use crate::cli::iq::IqArgs;
use crate::cli::model::OutputFormat;
use crate::error::Result;
use crate::models::ScatteringCurve;
use crate::sas::{self, calculator, GridSpacing, SasCalculator};
use crate::utils::{output, progress};

use tabled::{Table, Tabled};

/// 执行 iq 计算
pub fn execute(args: IqArgs) -> Result<()> {
    output::print_header("BCC Paracrystal: Powder-Averaged I(q)");

    let model = args.model.to_model();
    print_model(&model);
    check_model(&model);

    let (q_min, q_max) = parse_range(&args.q_range)?;
    let spacing = if args.log_spacing {
        GridSpacing::Log
    } else {
        GridSpacing::Linear
    };
    let qs = calculator::q_grid(q_min, q_max, args.points, spacing)?;

    let calculator = SasCalculator::new(args.jobs);
    output::print_info(&format!(
        "Evaluating {} q points in [{}, {}] 1/Å on {} threads",
        qs.len(),
        q_min,
        q_max,
        calculator.jobs()
    ));

    let spinner = progress::create_spinner("Integrating over orientations...");
    let curve = calculator.calculate_curve(&model, &qs, "bcc_paracrystal")?;
    spinner.finish_and_clear();

    let non_finite = curve.non_finite_count();
    if non_finite > 0 {
        output::print_warning(&format!(
            "{} of {} points are not finite",
            non_finite,
            curve.len()
        ));
    }

    let format = args
        .format
        .unwrap_or_else(|| guess_format_from_extension(&args.output));

    match format {
        OutputFormat::Png | OutputFormat::Svg => {
            let title = args
                .title
                .clone()
                .unwrap_or_else(|| format!("BCC paracrystal, dnn = {} Å", model.lattice.dnn));
            sas::plot::generate_curve_plot(
                &curve,
                &args.output,
                &title,
                args.width,
                args.height,
                format == OutputFormat::Svg,
            )?;
        }
        OutputFormat::Csv => sas::export::curve_to_csv(&curve, &args.output)?,
        OutputFormat::Xy => sas::export::curve_to_xy(&curve, &model, &args.output)?,
    }

    print_curve_table(&curve, args.table_rows);
    if let Some(peak) = curve.peak() {
        output::print_info(&format!(
            "Maximum I = {} 1/cm at q = {} 1/Å",
            output::format_number(peak.intensity),
            output::format_number(peak.q)
        ));
    }

    output::print_success(&format!("I(q) saved to '{}'", args.output.display()));
    Ok(())
}

/// 打印曲线摘要表格（等间隔抽取）
fn print_curve_table(curve: &ScatteringCurve, count: usize) {
    #[derive(Tabled)]
    struct CurveRow {
        #[tabled(rename = "q (1/Å)")]
        q: String,
        #[tabled(rename = "I(q) (1/cm)")]
        intensity: String,
    }

    let rows: Vec<CurveRow> = sample_indices(curve.len(), count)
        .into_iter()
        .map(|i| {
            let p = &curve.points[i];
            CurveRow {
                q: output::format_number(p.q),
                intensity: output::format_number(p.intensity),
            }
        })
        .collect();

    if !rows.is_empty() {
        output::print_header(&format!("I(q) at {} sampled points", rows.len()));
        println!("{}", Table::new(&rows));
    }
}

/// 从 len 个点中等间隔选出至多 count 个下标（含首尾）
fn sample_indices(len: usize, count: usize) -> Vec<usize> {
    if len == 0 || count == 0 {
        return Vec::new();
    }
    if count >= len {
        return (0..len).collect();
    }
    if count == 1 {
        return vec![0];
    }
    let mut indices: Vec<usize> = (0..count)
        .map(|i| i * (len - 1) / (count - 1))
        .collect();
    indices.dedup();
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::model::ModelArgs;
    use std::path::PathBuf;

    fn default_model_args() -> ModelArgs {
        ModelArgs {
            dnn: 220.0,
            d_factor: 0.06,
            radius: 40.0,
            sld: 4.0,
            sld_solvent: 1.0,
            scale: 1.0,
            background: 0.001,
        }
    }

    #[test]
    fn test_sample_indices() {
        assert_eq!(sample_indices(5, 10), vec![0, 1, 2, 3, 4]);
        assert_eq!(sample_indices(101, 5), vec![0, 25, 50, 75, 100]);
        assert_eq!(sample_indices(10, 1), vec![0]);
        assert!(sample_indices(0, 3).is_empty());
    }

    #[test]
    fn test_execute_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("curve.csv");
        let args = IqArgs {
            model: default_model_args(),
            q_range: "0.01-0.1".to_string(),
            points: 4,
            log_spacing: true,
            output: out.clone(),
            format: None,
            jobs: 2,
            table_rows: 3,
            width: 400,
            height: 300,
            title: None,
        };
        execute(args).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "q,intensity");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_execute_rejects_bad_range() {
        let args = IqArgs {
            model: default_model_args(),
            q_range: "0.5-0.1".to_string(),
            points: 4,
            log_spacing: false,
            output: PathBuf::from("unused.csv"),
            format: Some(OutputFormat::Csv),
            jobs: 1,
            table_rows: 0,
            width: 400,
            height: 300,
            title: None,
        };
        assert!(execute(args).is_err());
    }
}
