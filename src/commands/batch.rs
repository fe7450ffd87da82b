//! # batch 子命令实现
//!
//! 读取测量数据文件的 q 列，在这些 q 点上计算模型 I(q)，
//! 每个输入文件输出一个 `<stem>_iq.csv`。
//!
//! ## 功能
//! - 单文件或目录输入，glob 模式过滤
//! - 文件级并行（rayon），进度条显示
//! - 已存在的输出默认跳过
//! - 多个输入映射到同一输出文件时在计算前报错
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的 BatchArgs
//! - 使用 `batch/` 模块收集文件并并行执行
//! - 使用 `parsers/` 读取 q 列
//! - 使用 `sas/export.rs` 写出 CSV

use super::{check_model, print_model};
use crate::batch::{BatchRunner, FileCollector, FileOutcome};
use crate::cli::batch::BatchArgs;
use crate::error::{ParacrystalError, Result};
use crate::models::{BccParacrystal, CurvePoint, ScatteringCurve};
use crate::parsers;
use crate::sas;
use crate::utils::output;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// 批量处理配置
struct BatchConfig {
    output_dir: PathBuf,
    model: BccParacrystal,
    overwrite: bool,
}

/// 执行批量计算
pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_header("BCC Paracrystal: Batch I(q) on Measured q");

    if !args.input.exists() {
        return Err(ParacrystalError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    let model = args.model.to_model();
    print_model(&model);
    check_model(&model);

    let files = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect();

    if files.is_empty() {
        return Err(ParacrystalError::NoFilesFound {
            pattern: args.pattern.clone(),
        });
    }

    output::print_info(&format!("Found {} data files", files.len()));

    check_output_collisions(&files, &args.output)?;

    fs::create_dir_all(&args.output).map_err(|e| ParacrystalError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let config = BatchConfig {
        output_dir: args.output.clone(),
        model,
        overwrite: args.overwrite,
    };

    // 文件级并行，单个文件内串行
    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!("Using {} threads", runner.jobs()));
    let summary = runner.run(&files, |file| process_file(file, &config))?;

    output::print_separator();
    output::print_done(&format!(
        "Batch complete in {:.2?}: {} files, {} written ({} q points), {} skipped, {} failed",
        summary.elapsed,
        summary.files(),
        summary.written,
        summary.points,
        summary.skipped,
        summary.failed
    ));

    if !summary.failures.is_empty() {
        output::print_warning("Failed files:");
        for (path, err) in summary.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", path.display(), err));
        }
        if summary.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", summary.failures.len() - 10));
        }
    }

    Ok(())
}

/// 输出文件路径: `<output_dir>/<stem>_iq.csv`
fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    output_dir.join(format!("{}_iq.csv", stem))
}

/// 两个输入映射到同一输出文件时报错（如 `a.dat` 与 `a.csv`，或不同子目录下的同名文件）
fn check_output_collisions(files: &[PathBuf], output_dir: &Path) -> Result<()> {
    let mut seen: HashMap<PathBuf, &PathBuf> = HashMap::with_capacity(files.len());
    for input in files {
        let output = output_path_for(input, output_dir);
        if let Some(previous) = seen.insert(output.clone(), input) {
            return Err(ParacrystalError::InvalidArgument(format!(
                "'{}' and '{}' would both be written to '{}'; rename one or narrow --pattern",
                previous.display(),
                input.display(),
                output.display()
            )));
        }
    }
    Ok(())
}

/// 处理单个数据文件
fn process_file(input: &PathBuf, config: &BatchConfig) -> FileOutcome {
    let output = output_path_for(input, &config.output_dir);

    if output.exists() && !config.overwrite {
        return FileOutcome::Skipped { output };
    }

    match evaluate_file(input, &output, &config.model) {
        Ok(points) => FileOutcome::Written { output, points },
        Err(e) => FileOutcome::Failed {
            input: input.clone(),
            reason: e.to_string(),
        },
    }
}

/// 读取 q 列、求值并写出，返回点数
fn evaluate_file(input: &Path, output_file: &Path, model: &BccParacrystal) -> Result<usize> {
    let qs = parsers::parse_data_file(input)?;

    let name = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("data");
    let points = qs
        .iter()
        .map(|&q| CurvePoint {
            q,
            intensity: model.normalize(model.iq(q)),
        })
        .collect();
    let curve = ScatteringCurve::new(name, points);

    sas::export::curve_to_csv(&curve, output_file)?;
    Ok(curve.len())
}
