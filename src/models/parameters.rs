//! # 模型参数数据模型
//!
//! BCC 次晶模型的完整参数集：晶格、粒子、取向以及强度标度。
//! 所有类型均为不可变值类型，不做取值范围校验。
//!
//! ## 依赖关系
//! - 被 `sas/calculator.rs` 和 `commands/` 使用
//! - 使用 `sas/paracrystal.rs` 计算强度

use crate::sas::paracrystal;

use serde::Serialize;

/// 晶体坐标系中的散射矢量 (Å⁻¹)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatteringVector {
    pub qa: f64,
    pub qb: f64,
    pub qc: f64,
}

impl ScatteringVector {
    pub fn new(qa: f64, qb: f64, qc: f64) -> Self {
        Self { qa, qb, qc }
    }

    /// |q|
    pub fn magnitude(&self) -> f64 {
        (self.qa * self.qa + self.qb * self.qb + self.qc * self.qc).sqrt()
    }
}

/// 次晶晶格参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatticeParameters {
    /// 最近邻距离 dnn（Å）
    pub dnn: f64,
    /// 畸变因子 g（无量纲）
    pub d_factor: f64,
}

impl LatticeParameters {
    pub fn new(dnn: f64, d_factor: f64) -> Self {
        Self { dnn, d_factor }
    }

    /// 结构因子 S(q)
    pub fn structure_factor(&self, q: &ScatteringVector) -> f64 {
        paracrystal::structure_factor(q.qa, q.qb, q.qc, self.dnn, self.d_factor)
    }

    /// 畸变阻尼指数
    pub fn damping_exponent(&self, q: &ScatteringVector) -> f64 {
        paracrystal::damping_exponent(q.qa, q.qb, q.qc, self.dnn, self.d_factor)
    }

    /// 取向平均结构因子 ⟨S(q)⟩
    pub fn average_structure_factor(&self, q: f64) -> f64 {
        paracrystal::orientational_average(q, self.dnn, self.d_factor)
    }
}

/// 球形粒子参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleParameters {
    /// 半径（Å）
    pub radius: f64,
    /// 粒子散射长度密度（1e-6 Å⁻²）
    pub sld: f64,
    /// 溶剂散射长度密度（1e-6 Å⁻²）
    pub solvent_sld: f64,
}

impl ParticleParameters {
    pub fn new(radius: f64, sld: f64, solvent_sld: f64) -> Self {
        Self {
            radius,
            sld,
            solvent_sld,
        }
    }

    /// 粒子体积（Å³）
    pub fn volume(&self) -> f64 {
        paracrystal::form_volume(self.radius)
    }
}

/// 晶体取向角（度）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Orientation {
    /// c 轴与束流夹角
    pub theta: f64,
    /// 绕束流旋转
    pub phi: f64,
    /// 绕 c 轴旋转
    pub psi: f64,
}

impl Orientation {
    pub fn new(theta: f64, phi: f64, psi: f64) -> Self {
        Self { theta, phi, psi }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::new(60.0, 60.0, 60.0)
    }
}

/// BCC 次晶模型
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BccParacrystal {
    pub lattice: LatticeParameters,
    pub particle: ParticleParameters,
    pub orientation: Orientation,
    /// 强度标度因子
    pub scale: f64,
    /// 非相干本底（cm⁻¹）
    pub background: f64,
}

impl Default for BccParacrystal {
    fn default() -> Self {
        Self {
            lattice: LatticeParameters::new(220.0, 0.06),
            particle: ParticleParameters::new(40.0, 4.0, 1.0),
            orientation: Orientation::default(),
            scale: 1.0,
            background: 0.001,
        }
    }
}

impl BccParacrystal {
    /// 占据体积分数
    pub fn volume_fraction(&self) -> f64 {
        paracrystal::bcc_volume_fraction(self.particle.radius, self.lattice.dnn)
    }

    /// 粉末平均强度 I(q)，未归一化
    pub fn iq(&self, q: f64) -> f64 {
        paracrystal::isotropic_intensity(
            q,
            self.lattice.dnn,
            self.lattice.d_factor,
            self.particle.radius,
            self.particle.sld,
            self.particle.solvent_sld,
        )
    }

    /// 定向强度 I(qx, qy)，未归一化
    pub fn iqxy(&self, qx: f64, qy: f64) -> f64 {
        paracrystal::oriented_intensity(
            qx,
            qy,
            self.lattice.dnn,
            self.lattice.d_factor,
            self.particle.radius,
            self.particle.sld,
            self.particle.solvent_sld,
            self.orientation.theta,
            self.orientation.phi,
            self.orientation.psi,
        )
    }

    /// 标度与本底: scale · I / V + background
    pub fn normalize(&self, raw: f64) -> f64 {
        self.scale * raw / self.particle.volume() + self.background
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let model = BccParacrystal::default();
        assert_eq!(model.lattice.dnn, 220.0);
        assert_eq!(model.lattice.d_factor, 0.06);
        assert_eq!(model.particle.radius, 40.0);
        assert_eq!(model.orientation, Orientation::new(60.0, 60.0, 60.0));
        assert_eq!(model.scale, 1.0);
        assert_eq!(model.background, 0.001);
    }

    #[test]
    fn test_delegates_to_kernel() {
        let model = BccParacrystal::default();
        let q = ScatteringVector::new(0.05, 0.0, 0.0);
        assert_eq!(q.magnitude(), 0.05);
        assert_eq!(
            model.lattice.structure_factor(&q),
            paracrystal::structure_factor(0.05, 0.0, 0.0, 220.0, 0.06)
        );
        assert_eq!(
            model.volume_fraction(),
            paracrystal::bcc_volume_fraction(40.0, 220.0)
        );
    }

    #[test]
    fn test_normalize() {
        let mut model = BccParacrystal::default();
        model.scale = 2.0;
        model.background = 0.5;
        let v = model.particle.volume();
        assert!((model.normalize(v) - 2.5).abs() < 1e-12);
        assert_eq!(model.normalize(0.0), 0.5);
    }
}
