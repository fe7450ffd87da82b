//! # iqxy 子命令实现
//!
//! 计算固定晶体取向下的二维探测器强度 I(qx, qy)。
//!
//! ## 依赖关系
//! - 使用 `cli/iq.rs` 定义的 IqxyArgs
//! - 使用 `sas/calculator.rs` 生成探测器网格并并行求值
//! - 使用 `sas/plot.rs`, `sas/export.rs` 输出

use super::{check_model, guess_format_from_extension, print_model};
use crate::cli::iq::IqxyArgs;
use crate::cli::model::OutputFormat;
use crate::error::{ParacrystalError, Result};
use crate::sas::{self, calculator, SasCalculator};
use crate::utils::{output, progress};

/// 执行 iqxy 计算
pub fn execute(args: IqxyArgs) -> Result<()> {
    output::print_header("BCC Paracrystal: Oriented I(qx, qy)");

    if args.pixels == 0 {
        return Err(ParacrystalError::InvalidArgument(
            "pixels must be at least 1".to_string(),
        ));
    }
    if args.qmax.is_nan() || args.qmax <= 0.0 {
        return Err(ParacrystalError::InvalidArgument(format!(
            "qmax must be positive, got {}",
            args.qmax
        )));
    }

    let format = args
        .format
        .unwrap_or_else(|| guess_format_from_extension(&args.output));
    // None 表示 CSV
    let plot_svg = match format {
        OutputFormat::Png => Some(false),
        OutputFormat::Svg => Some(true),
        OutputFormat::Csv => None,
        OutputFormat::Xy => {
            return Err(ParacrystalError::UnsupportedFormat(
                "xy output is only available for 1D curves; use csv, png or svg".to_string(),
            ))
        }
    };

    let mut model = args.model.to_model();
    model.orientation = args.orientation.to_orientation();
    print_model(&model);
    output::print_param("theta", model.orientation.theta, "°");
    output::print_param("phi", model.orientation.phi, "°");
    output::print_param("psi", model.orientation.psi, "°");
    check_model(&model);

    let axis = calculator::detector_axis(args.qmax, args.pixels);
    let calculator = SasCalculator::new(args.jobs);
    output::print_info(&format!(
        "Evaluating {}×{} detector pixels on {} threads",
        args.pixels,
        args.pixels,
        calculator.jobs()
    ));

    let spinner = progress::create_spinner("Computing detector image...");
    let image = calculator.calculate_image(&model, &axis, &axis, "bcc_paracrystal")?;
    spinner.finish_and_clear();

    match image.finite_range() {
        Some((lo, hi)) => output::print_info(&format!(
            "Intensity range: {} to {} 1/cm",
            output::format_number(lo),
            output::format_number(hi)
        )),
        None => output::print_warning("No finite intensities in the detector image"),
    }

    match plot_svg {
        Some(use_svg) => {
            let title = args.title.clone().unwrap_or_else(|| {
                format!(
                    "BCC paracrystal, θ = {}°, φ = {}°, ψ = {}°",
                    model.orientation.theta, model.orientation.phi, model.orientation.psi
                )
            });
            sas::plot::generate_image_plot(
                &image,
                &args.output,
                &title,
                args.width,
                args.height,
                use_svg,
            )?;
        }
        None => sas::export::image_to_csv(&image, &args.output)?,
    }

    output::print_success(&format!("I(qx, qy) saved to '{}'", args.output.display()));
    Ok(())
}
