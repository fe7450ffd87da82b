//! # 小角散射强度计算器
//!
//! 在 q 数组或探测器网格上批量求值 BCC 次晶模型。
//!
//! ## 算法概述
//! 1. 生成 q 网格（线性/对数）或探测器 (qx, qy) 网格
//! 2. 每个点独立调用 `sas/paracrystal.rs` 的串行核函数
//! 3. 应用标度与本底: scale · I / V + background
//!
//! 各点之间无数据依赖，使用 rayon 并行；每个点的求和顺序固定，
//! 因此结果与线程数无关。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `models/parameters.rs` 的 BccParacrystal
//! - 使用 `models/curve.rs` 的 ScatteringCurve, DetectorImage

use crate::error::{ParacrystalError, Result};
use crate::models::{BccParacrystal, CurvePoint, DetectorImage, ScatteringCurve};

use rayon::prelude::*;

/// q 网格间隔类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridSpacing {
    #[default]
    Linear,
    Log,
}

/// 生成 [q_min, q_max] 上的 n 点网格
pub fn q_grid(q_min: f64, q_max: f64, n: usize, spacing: GridSpacing) -> Result<Vec<f64>> {
    if n == 0 {
        return Err(ParacrystalError::InvalidArgument(
            "number of q points must be at least 1".to_string(),
        ));
    }
    if n == 1 {
        return Ok(vec![q_min]);
    }

    let last = (n - 1) as f64;
    match spacing {
        GridSpacing::Linear => {
            let step = (q_max - q_min) / last;
            Ok((0..n).map(|i| q_min + i as f64 * step).collect())
        }
        GridSpacing::Log => {
            if q_min <= 0.0 {
                return Err(ParacrystalError::InvalidArgument(format!(
                    "log spacing requires q_min > 0, got {}",
                    q_min
                )));
            }
            let (log_min, log_max) = (q_min.ln(), q_max.ln());
            let step = (log_max - log_min) / last;
            Ok((0..n)
                .map(|i| (log_min + i as f64 * step).exp())
                .collect())
        }
    }
}

/// 探测器坐标轴的像素中心，像素宽度 2·q_max/pixels
///
/// 偶数像素时网格覆盖 [-q_max, q_max]。奇数像素时整体平移半个像素，
/// 使 q = 0 落在像素边界上，中心点不会取到方向无定义的 q = 0。
pub fn detector_axis(q_max: f64, pixels: usize) -> Vec<f64> {
    let width = 2.0 * q_max / pixels as f64;
    let offset = if pixels % 2 == 1 { 1.0 } else { 0.5 };
    (0..pixels)
        .map(|i| -q_max + (i as f64 + offset) * width)
        .collect()
}

/// SAS 计算器
pub struct SasCalculator {
    /// 并行线程数
    jobs: usize,
}

impl SasCalculator {
    /// 创建新的计算器（jobs = 0 表示使用全部 CPU）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    fn pool(&self) -> Result<rayon::ThreadPool> {
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| ParacrystalError::Other(format!("Failed to build thread pool: {}", e)))
    }

    /// 计算粉末平均曲线（已标度、含本底）
    pub fn calculate_curve(
        &self,
        model: &BccParacrystal,
        qs: &[f64],
        name: &str,
    ) -> Result<ScatteringCurve> {
        let points: Vec<CurvePoint> = self.pool()?.install(|| {
            qs.par_iter()
                .map(|&q| CurvePoint {
                    q,
                    intensity: model.normalize(model.iq(q)),
                })
                .collect()
        });

        Ok(ScatteringCurve::new(name, points))
    }

    /// 计算定向探测器图像（已标度、含本底）
    pub fn calculate_image(
        &self,
        model: &BccParacrystal,
        qx: &[f64],
        qy: &[f64],
        name: &str,
    ) -> Result<DetectorImage> {
        let width = qx.len();
        let values: Vec<f64> = self.pool()?.install(|| {
            (0..qy.len() * width)
                .into_par_iter()
                .map(|index| {
                    let (row, col) = (index / width, index % width);
                    model.normalize(model.iqxy(qx[col], qy[row]))
                })
                .collect()
        });

        Ok(DetectorImage {
            name: name.to_string(),
            qx: qx.to_vec(),
            qy: qy.to_vec(),
            values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_grid() {
        let qs = q_grid(0.0, 1.0, 5, GridSpacing::Linear).unwrap();
        assert_eq!(qs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(q_grid(0.3, 1.0, 1, GridSpacing::Linear).unwrap(), vec![0.3]);
        assert!(q_grid(0.0, 1.0, 0, GridSpacing::Linear).is_err());
    }

    #[test]
    fn test_log_grid() {
        let qs = q_grid(0.001, 0.1, 3, GridSpacing::Log).unwrap();
        assert!((qs[0] - 0.001).abs() < 1e-15);
        assert!((qs[1] - 0.01).abs() < 1e-14);
        assert!((qs[2] - 0.1).abs() < 1e-14);
        assert!(q_grid(0.0, 0.1, 3, GridSpacing::Log).is_err());
    }

    #[test]
    fn test_detector_axis_symmetric() {
        let axis = detector_axis(0.1, 4);
        assert_eq!(axis.len(), 4);
        assert!((axis[0] + 0.075).abs() < 1e-15);
        assert!((axis[0] + axis[3]).abs() < 1e-15);
        assert!(axis.iter().all(|q| *q != 0.0));
    }

    #[test]
    fn test_detector_axis_odd_pixels_avoid_origin() {
        for pixels in 1..=9 {
            let axis = detector_axis(0.1, pixels);
            assert_eq!(axis.len(), pixels);
            assert!(axis.iter().all(|q| q.abs() > 1e-12), "pixels = {}", pixels);
        }

        let axis = detector_axis(0.1, 3);
        assert!((axis[0] + 0.1 / 3.0).abs() < 1e-15);
        assert!((axis[2] - 0.1).abs() < 1e-15);
        assert_eq!(detector_axis(0.05, 1), vec![0.05]);
    }

    #[test]
    fn test_odd_image_is_finite() {
        let model = BccParacrystal::default();
        for pixels in [1, 3] {
            let axis = detector_axis(0.05, pixels);
            let image = SasCalculator::new(1)
                .calculate_image(&model, &axis, &axis, "odd")
                .unwrap();
            assert!(image.values.iter().all(|v| v.is_finite() && *v > 0.0));
        }
    }

    #[test]
    fn test_curve_independent_of_thread_count() {
        let model = BccParacrystal::default();
        let qs = q_grid(0.01, 0.1, 4, GridSpacing::Log).unwrap();

        let serial = SasCalculator::new(1)
            .calculate_curve(&model, &qs, "serial")
            .unwrap();
        let parallel = SasCalculator::new(4)
            .calculate_curve(&model, &qs, "parallel")
            .unwrap();

        assert_eq!(serial.len(), qs.len());
        for (a, b) in serial.points.iter().zip(&parallel.points) {
            assert_eq!(a.q, b.q);
            assert_eq!(a.intensity.to_bits(), b.intensity.to_bits());
        }
    }

    #[test]
    fn test_curve_normalization() {
        let mut model = BccParacrystal::default();
        model.scale = 3.0;
        model.background = 0.25;
        let curve = SasCalculator::new(1)
            .calculate_curve(&model, &[0.1], "norm")
            .unwrap();

        // I(0.1) 参考值，参数为默认模型
        let raw = 15157.017754116507;
        let expected = 3.0 * raw / model.particle.volume() + 0.25;
        let got = curve.points[0].intensity;
        assert!(((got - expected) / expected).abs() < 1e-6);
    }

    #[test]
    fn test_image_row_major_layout() {
        let model = BccParacrystal::default();
        let qx = [0.01, 0.02, 0.03];
        let qy = [-0.02, 0.04];
        let image = SasCalculator::new(2)
            .calculate_image(&model, &qx, &qy, "img")
            .unwrap();

        assert_eq!(image.values.len(), 6);
        let expected = model.normalize(model.iqxy(0.03, 0.04));
        assert_eq!(image.get(1, 2), Some(expected));
        let expected = model.normalize(model.iqxy(0.01, -0.02));
        assert_eq!(image.get(0, 0), Some(expected));
    }
}
