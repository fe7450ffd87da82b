//! # sq 子命令实现
//!
//! 在晶体坐标系的单个散射矢量处打印结构因子及相关量。
//!
//! ## 依赖关系
//! - 使用 `cli/sq.rs` 定义的 SqArgs
//! - 使用 `models/parameters.rs` 的 LatticeParameters, ScatteringVector

use crate::cli::sq::SqArgs;
use crate::error::Result;
use crate::models::{LatticeParameters, ScatteringVector};
use crate::sas::paracrystal;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 单点结构因子的计算结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqReport {
    pub magnitude: f64,
    pub damping_exponent: f64,
    pub structure_factor: f64,
    pub average_structure_factor: f64,
    pub volume_fraction: f64,
}

/// 计算单点结果
pub fn evaluate(args: &SqArgs) -> SqReport {
    let lattice = LatticeParameters::new(args.dnn, args.d_factor);
    let q = ScatteringVector::new(args.qa, args.qb, args.qc);
    let magnitude = q.magnitude();

    SqReport {
        magnitude,
        damping_exponent: lattice.damping_exponent(&q),
        structure_factor: lattice.structure_factor(&q),
        average_structure_factor: lattice.average_structure_factor(magnitude),
        volume_fraction: paracrystal::bcc_volume_fraction(args.radius, args.dnn),
    }
}

/// 执行 sq 计算
pub fn execute(args: SqArgs) -> Result<()> {
    output::print_header("BCC Paracrystal Structure Factor");

    output::print_param("qa", args.qa, "1/Å");
    output::print_param("qb", args.qb, "1/Å");
    output::print_param("qc", args.qc, "1/Å");
    output::print_param("dnn", args.dnn, "Å");
    output::print_param("d_factor", args.d_factor, "");

    let report = evaluate(&args);

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "Quantity")]
        name: &'static str,
        #[tabled(rename = "Value")]
        value: String,
    }

    let rows = [
        ("|q| (1/Å)", report.magnitude),
        ("damping exponent", report.damping_exponent),
        ("S(q)", report.structure_factor),
        ("⟨S(|q|)⟩ powder average", report.average_structure_factor),
        ("volume fraction", report.volume_fraction),
    ]
    .into_iter()
    .map(|(name, value)| Row {
        name,
        value: output::format_number(value),
    })
    .collect::<Vec<_>>();

    println!("{}", Table::new(&rows));

    if !report.structure_factor.is_finite() {
        output::print_warning("S(q) is not finite: a Bragg point with zero distortion?");
    }

    Ok(())
}
