//! # 取向变换
//!
//! 将探测器平面上的散射矢量 (qx, qy) 按三个 Euler 角 (θ, φ, ψ)
//! 变换到晶体坐标系，得到单位方向 (x̂, ŷ, ẑ) 与模长 q。
//!
//! 角度单位为度。q = 0 时方向无定义，结果为 NaN。
//!
//! ## 依赖关系
//! - 被 `sas/paracrystal.rs` 的定向强度计算使用
//! - 无外部模块依赖

/// 晶体坐标系中的散射方向
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedQ {
    /// |q|
    pub q: f64,
    pub xhat: f64,
    pub yhat: f64,
    pub zhat: f64,
}

/// 探测器坐标 -> 晶体坐标
pub fn orient_asymmetric(qx: f64, qy: f64, theta: f64, phi: f64, psi: f64) -> OrientedQ {
    let q = qx.hypot(qy);
    let qxhat = qx / q;
    let qyhat = qy / q;

    let (sin_theta, cos_theta) = theta.to_radians().sin_cos();
    let (sin_phi, cos_phi) = phi.to_radians().sin_cos();
    let (sin_psi, cos_psi) = psi.to_radians().sin_cos();

    let xhat = qxhat * (-sin_phi * sin_psi + cos_theta * cos_phi * cos_psi)
        + qyhat * (cos_phi * sin_psi + cos_theta * sin_phi * cos_psi);
    let yhat = qxhat * (-sin_phi * cos_psi - cos_theta * cos_phi * sin_psi)
        + qyhat * (cos_phi * cos_psi - cos_theta * sin_phi * sin_psi);
    let zhat = qxhat * (-sin_theta * cos_phi) + qyhat * (-sin_theta * sin_phi);

    OrientedQ {
        q,
        xhat,
        yhat,
        zhat,
    }
}
