//! # 散射曲线与探测器图像数据模型
//!
//! 存储一维 I(q) 曲线和二维 I(qx, qy) 图像的计算结果。
//!
//! ## 依赖关系
//! - 被 `sas/calculator.rs` 生成
//! - 被 `sas/export.rs`, `sas/plot.rs` 和 `commands/` 使用

use serde::Serialize;

/// 一维散射曲线中的单点
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    /// 散射矢量模长（Å⁻¹）
    pub q: f64,
    /// 强度（cm⁻¹）
    pub intensity: f64,
}

/// 一维散射曲线（粉末平均）
#[derive(Debug, Clone, Serialize)]
pub struct ScatteringCurve {
    /// 曲线名称
    pub name: String,
    /// 数据点，顺序与输入 q 相同
    pub points: Vec<CurvePoint>,
}

impl ScatteringCurve {
    pub fn new(name: impl Into<String>, points: Vec<CurvePoint>) -> Self {
        ScatteringCurve {
            name: name.into(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 强度最大的点（忽略非有限值）
    pub fn peak(&self) -> Option<CurvePoint> {
        self.points
            .iter()
            .filter(|p| p.intensity.is_finite())
            .copied()
            .max_by(|a, b| a.intensity.total_cmp(&b.intensity))
    }

    /// 非有限强度点的个数
    pub fn non_finite_count(&self) -> usize {
        self.points
            .iter()
            .filter(|p| !p.intensity.is_finite())
            .count()
    }
}

/// 二维探测器图像（固定取向）
#[derive(Debug, Clone, Serialize)]
pub struct DetectorImage {
    /// 图像名称
    pub name: String,
    /// qx 网格（列）
    pub qx: Vec<f64>,
    /// qy 网格（行）
    pub qy: Vec<f64>,
    /// 强度，按行存储: values[row * qx.len() + col]
    pub values: Vec<f64>,
}

impl DetectorImage {
    /// 第 (row, col) 像素
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.qy.len() || col >= self.qx.len() {
            return None;
        }
        self.values.get(row * self.qx.len() + col).copied()
    }

    /// 有限强度的 (最小, 最大) 值
    pub fn finite_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_peak_skips_non_finite() {
        let curve = ScatteringCurve::new(
            "test",
            vec![
                CurvePoint { q: 0.0, intensity: f64::NAN },
                CurvePoint { q: 0.1, intensity: 3.0 },
                CurvePoint { q: 0.2, intensity: 7.0 },
                CurvePoint { q: 0.3, intensity: f64::INFINITY },
            ],
        );
        assert_eq!(curve.peak().map(|p| p.q), Some(0.2));
        assert_eq!(curve.non_finite_count(), 2);
        assert_eq!(curve.len(), 4);
    }

    #[test]
    fn test_image_indexing() {
        let image = DetectorImage {
            name: "img".to_string(),
            qx: vec![-0.1, 0.0, 0.1],
            qy: vec![-0.1, 0.1],
            values: vec![1.0, 2.0, 3.0, 4.0, f64::NAN, 6.0],
        };
        assert_eq!(image.get(1, 0), Some(4.0));
        assert_eq!(image.get(0, 2), Some(3.0));
        assert_eq!(image.get(2, 0), None);
        assert_eq!(image.finite_range(), Some((1.0, 6.0)));
    }
}
