//! # 数值求积表
//!
//! 将静态 Gauss-Legendre 数据包装为只读的 `QuadratureTable`，
//! 并提供从 [-1, 1] 到任意区间的仿射映射。
//!
//! ## 依赖关系
//! - 被 `sas/paracrystal.rs` 的取向平均使用
//! - 使用 `sas/gauss150.rs` 的常量表

use crate::sas::gauss150::{GAUSS150_WT, GAUSS150_Z};

/// 固定阶 Gauss-Legendre 求积表（[-1, 1] 上，节点升序）
#[derive(Debug, Clone, Copy)]
pub struct QuadratureTable {
    nodes: &'static [f64],
    weights: &'static [f64],
}

/// 150 点求积表，进程级只读常量
pub static GAUSS150: QuadratureTable = QuadratureTable {
    nodes: &GAUSS150_Z,
    weights: &GAUSS150_WT,
};

impl QuadratureTable {
    /// 节点数
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &'static [f64] {
        self.nodes
    }

    pub fn weights(&self) -> &'static [f64] {
        self.weights
    }

    /// 按节点升序迭代 (node, weight)
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.nodes.iter().copied().zip(self.weights.iter().copied())
    }
}

/// [-1, 1] -> [lower, upper] 的仿射映射: x = z*m + b
#[derive(Debug, Clone, Copy)]
pub struct AffineMap {
    /// 半区间宽度
    pub m: f64,
    /// 区间中点
    pub b: f64,
}

impl AffineMap {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self {
            m: 0.5 * (upper - lower),
            b: 0.5 * (upper + lower),
        }
    }

    pub fn apply(&self, z: f64) -> f64 {
        z * self.m + self.b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauss150_shape() {
        assert_eq!(GAUSS150.len(), 150);
        assert!(GAUSS150.nodes().windows(2).all(|w| w[0] < w[1]));
        assert!(GAUSS150.iter().all(|(z, w)| z > -1.0 && z < 1.0 && w > 0.0));

        let total: f64 = GAUSS150.weights().iter().sum();
        assert!((total - 2.0).abs() < 1e-13);
    }

    #[test]
    fn test_gauss150_symmetric() {
        let z = GAUSS150.nodes();
        let w = GAUSS150.weights();
        for i in 0..75 {
            assert!((z[i] + z[149 - i]).abs() < 1e-15);
            assert!((w[i] - w[149 - i]).abs() < 1e-15);
        }
    }

    #[test]
    fn test_gauss150_integrates_polynomials() {
        // ∫ x^k dx over [-1, 1] = 2/(k+1) for even k
        for k in [2, 10, 50, 120] {
            let sum: f64 = GAUSS150.iter().map(|(z, w)| w * z.powi(k)).sum();
            let exact = 2.0 / (k as f64 + 1.0);
            assert!(((sum - exact) / exact).abs() < 1e-12, "k = {}", k);
        }
    }

    #[test]
    fn test_affine_map() {
        let theta = AffineMap::new(0.0, std::f64::consts::PI);
        assert_eq!(theta.m, std::f64::consts::FRAC_PI_2);
        assert_eq!(theta.b, std::f64::consts::FRAC_PI_2);
        assert!((theta.apply(-1.0)).abs() < 1e-15);
        assert!((theta.apply(1.0) - std::f64::consts::PI).abs() < 1e-15);

        // ∫ sin(θ) dθ over [0, π] = 2
        let sum: f64 = GAUSS150
            .iter()
            .map(|(z, w)| w * theta.apply(z).sin())
            .sum::<f64>()
            * theta.m;
        assert!((sum - 2.0).abs() < 1e-13);
    }
}
