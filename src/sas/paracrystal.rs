//! # BCC 次晶结构因子
//!
//! 体心立方次晶（Hosemann 畸变晶格）中球形粒子的相干弹性散射强度。
//!
//! ## 公式
//! 三个组合投影
//! a₁ = qa - qc + qb, a₂ = qa + qc - qb, a₃ = -qa + qc + qb
//!
//! 阻尼指数 arg = ½ (½ dnn g)² (a₁² + a₂² + a₃²)，g 为畸变因子 d_factor。
//!
//! S(q) = (1 - e^{-2arg})³ / Π_k (1 - 2 cos(½ dnn a_k) e^{-arg} + e^{-2arg})
//!
//! 分子改写为 -expm1(-2arg)³，避免 arg → 0 时的相消误差；
//! 分母改写为 (e^{-arg} - 2cos x_k) e^{-arg} + 1，共用一次 exp。
//!
//! ## 取向平均
//! 在单位球面上对 S(q) 做 150×150 点 Gauss-Legendre 二重积分，
//! θ ∈ [0, π]，φ ∈ [0, 2π]，外层 θ、内层 φ，均按节点升序累加。
//!
//! ## 输入约定
//! dnn > 0，radius > 0，d_factor ≥ 0，本模块不做校验。
//! d_factor = 0 时 Bragg 点处 S(q) 发散，返回 Inf 或 NaN。
//!
//! ## 参考
//! - Matsuoka et al., Phys. Rev. B 36 (1987) 1754-1765
//! - Matsuoka et al., Phys. Rev. B 41 (1990) 3854-3856
//!
//! ## 依赖关系
//! - 被 `sas/calculator.rs` 与 `models/parameters.rs` 调用
//! - 使用 `sas/sphere.rs` 的形状因子
//! - 使用 `sas/orientation.rs` 的坐标变换
//! - 使用 `sas/quadrature.rs` 的 150 点求积表

use crate::sas::orientation::orient_asymmetric;
use crate::sas::quadrature::{AffineMap, GAUSS150};
use crate::sas::sphere::{sphere_form, sphere_volume};

use std::f64::consts::PI;

/// 畸变阻尼指数 arg
pub fn damping_exponent(qa: f64, qb: f64, qc: f64, dnn: f64, d_factor: f64) -> f64 {
    let (a1, a2, a3) = bcc_projections(qa, qb, qc);
    let half_dnn = 0.5 * dnn;
    0.5 * (half_dnn * d_factor).powi(2) * (a1 * a1 + a2 * a2 + a3 * a3)
}

fn bcc_projections(qa: f64, qb: f64, qc: f64) -> (f64, f64, f64) {
    (qa - qc + qb, qa + qc - qb, -qa + qc + qb)
}

/// BCC 次晶结构因子 S(qa, qb, qc)
///
/// (qa, qb, qc) 为晶体坐标系下的散射矢量分量。
pub fn structure_factor(qa: f64, qb: f64, qc: f64, dnn: f64, d_factor: f64) -> f64 {
    let (a1, a2, a3) = bcc_projections(qa, qb, qc);

    let half_dnn = 0.5 * dnn;
    let arg = 0.5 * (half_dnn * d_factor).powi(2) * (a1 * a1 + a2 * a2 + a3 * a3);

    let exp_arg = (-arg).exp();
    let factor = |a: f64| (exp_arg - 2.0 * (half_dnn * a).cos()) * exp_arg + 1.0;

    -(-2.0 * arg).exp_m1().powi(3) / (factor(a1) * factor(a2) * factor(a3))
}

/// 晶格占据体积分数
///
/// 半径按 √3/2 / dnn 缩放后代入球体积公式，保持闭式结果原样。
pub fn bcc_volume_fraction(radius: f64, dnn: f64) -> f64 {
    2.0 * sphere_volume(0.75_f64.sqrt() * radius / dnn)
}

/// 粒子体积，用于强度归一化
pub fn form_volume(radius: f64) -> f64 {
    sphere_volume(radius)
}

/// 取向平均结构因子 ⟨S(q)⟩
pub fn orientational_average(q: f64, dnn: f64, d_factor: f64) -> f64 {
    // [-1, 1] -> [0, 2π]
    let phi_map = AffineMap::new(0.0, 2.0 * PI);
    // [-1, 1] -> [0, π]
    let theta_map = AffineMap::new(0.0, PI);

    let mut outer_sum = 0.0;
    for (theta_z, theta_w) in GAUSS150.iter() {
        let (sin_theta, cos_theta) = theta_map.apply(theta_z).sin_cos();
        let qc = q * cos_theta;
        let qab = q * sin_theta;

        let mut inner_sum = 0.0;
        for (phi_z, phi_w) in GAUSS150.iter() {
            let (sin_phi, cos_phi) = phi_map.apply(phi_z).sin_cos();
            let qa = qab * cos_phi;
            let qb = qab * sin_phi;
            inner_sum += phi_w * structure_factor(qa, qb, qc, dnn, d_factor);
        }
        inner_sum *= phi_map.m;
        outer_sum += theta_w * inner_sum * sin_theta;
    }
    outer_sum *= theta_map.m;

    outer_sum / (4.0 * PI)
}

/// 粉末平均（各向同性）散射强度 I(q)
pub fn isotropic_intensity(
    q: f64,
    dnn: f64,
    d_factor: f64,
    radius: f64,
    sld: f64,
    solvent_sld: f64,
) -> f64 {
    let sq = orientational_average(q, dnn, d_factor);
    let pq = sphere_form(q, radius, sld, solvent_sld);
    bcc_volume_fraction(radius, dnn) * pq * sq
}

/// 固定晶体取向下的散射强度 I(qx, qy)
///
/// θ, φ, ψ 为晶体取向角（度）。
#[allow(clippy::too_many_arguments)]
pub fn oriented_intensity(
    qx: f64,
    qy: f64,
    dnn: f64,
    d_factor: f64,
    radius: f64,
    sld: f64,
    solvent_sld: f64,
    theta: f64,
    phi: f64,
    psi: f64,
) -> f64 {
    let o = orient_asymmetric(qx, qy, theta, phi, psi);
    let qa = o.q * o.xhat;
    let qb = o.q * o.yhat;
    let qc = o.q * o.zhat;

    let q = (qa * qa + qb * qb + qc * qc).sqrt();
    let pq = sphere_form(q, radius, sld, solvent_sld);
    let sq = structure_factor(qa, qb, qc, dnn, d_factor);
    bcc_volume_fraction(radius, dnn) * pq * sq
}
