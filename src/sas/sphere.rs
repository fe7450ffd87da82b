//! # 球形粒子形状因子
//!
//! 单个均匀球的散射振幅平方与体积。
//!
//! ## 公式
//! P(q) = 1e-4 · [Δρ · V · 3j₁(qr)/(qr)]²
//! 其中 V = 4π r³/3，Δρ = sld - sld_solvent（单位 1e-6 Å⁻²），
//! 1e-4 将结果换算为 cm⁻¹。
//!
//! ## 依赖关系
//! - 被 `sas/paracrystal.rs` 调用
//! - 无外部模块依赖

use std::f64::consts::PI;

/// 小宗量时改用 Taylor 展开的阈值
const SPH_J1C_CUTOFF: f64 = 0.1;

/// 球体积 4π r³/3
pub fn sphere_volume(radius: f64) -> f64 {
    4.0 * PI / 3.0 * radius * radius * radius
}

/// 3 j₁(x) / x = 3 (sin x - x cos x) / x³
pub fn sas_3j1x_x(x: f64) -> f64 {
    if x.abs() < SPH_J1C_CUTOFF {
        let x2 = x * x;
        1.0 + x2 * (-3.0 / 30.0 + x2 * (3.0 / 840.0 + x2 * (-3.0 / 45360.0)))
    } else {
        let (sin_x, cos_x) = x.sin_cos();
        3.0 * (sin_x / x - cos_x) / (x * x)
    }
}

/// 球形状因子 P(q)
pub fn sphere_form(q: f64, radius: f64, sld: f64, solvent_sld: f64) -> f64 {
    let fq = sphere_volume(radius) * sas_3j1x_x(q * radius);
    let contrast = sld - solvent_sld;
    1.0e-4 * (contrast * fq).powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_volume() {
        assert!((sphere_volume(1.0) - 4.0 * PI / 3.0).abs() < 1e-15);
        assert!((sphere_volume(40.0) - 268082.573106329).abs() < 1e-6);
    }

    #[test]
    fn test_3j1x_x_continuous_at_cutoff() {
        let below = sas_3j1x_x(SPH_J1C_CUTOFF * (1.0 - 1e-12));
        let above = sas_3j1x_x(SPH_J1C_CUTOFF * (1.0 + 1e-12));
        assert!((below - above).abs() < 1e-12);
        assert_eq!(sas_3j1x_x(0.0), 1.0);
        assert_eq!(sas_3j1x_x(-2.5), sas_3j1x_x(2.5));
    }

    #[test]
    fn test_3j1x_x_first_zero() {
        // tan(x) = x 的第一个正根
        let x0 = 4.493409457909064;
        assert!(sas_3j1x_x(x0).abs() < 1e-14);
    }

    #[test]
    fn test_sphere_form_reference() {
        let pq = sphere_form(0.05, 40.0, 4.0, 1.0);
        assert!(((pq - 27588913.960354324) / pq).abs() < 1e-12);

        // q -> 0 极限为 1e-4 (Δρ V)²
        let v = sphere_volume(40.0);
        let limit = 1.0e-4 * (3.0 * v).powi(2);
        assert!(((sphere_form(0.0, 40.0, 4.0, 1.0) - limit) / limit).abs() < 1e-15);

        // 衬度符号不影响强度
        assert_eq!(sphere_form(0.05, 40.0, 1.0, 4.0), pq);
    }
}
