//! Angular acceleration contributors for the double pendulum
//!
//! Defines the [`Acceleration`] trait the integrator is generic over, and
//! [`LagrangianGravity`], the closed-form double pendulum equations of motion
//! under uniform gravity

use crate::simulation::states::{NVec2, Pendulum};

/// Trait for angular acceleration sources operating on a [`Pendulum`]
pub trait Acceleration {
    fn angular_acceleration(&self, p: &Pendulum) -> NVec2;
}

/// Shared denominator of both accelerations, `L1 (2m1 + m2 - m2 cos(2θ1 - 2θ2))`
///
/// Bounded below by `2 m1 L1`, so it only approaches zero for a tiny first mass
/// or first arm. The equations are not guarded against it.
pub fn denominator(p: &Pendulum) -> f64 {
    let l1 = p.arm_length.x;
    let (m1, m2) = (p.mass.x, p.mass.y);
    let (t1, t2) = (p.angle.x, p.angle.y);
    l1 * (2.0 * m1 + m2 - m2 * (2.0 * t1 - 2.0 * t2).cos())
}

/// Closed-form double pendulum under gravity `g`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LagrangianGravity {
    pub g: f64,
}

impl Acceleration for LagrangianGravity {
    fn angular_acceleration(&self, p: &Pendulum) -> NVec2 {
        let g = self.g;
        let (l1, l2) = (p.arm_length.x, p.arm_length.y);
        let (m1, m2) = (p.mass.x, p.mass.y);
        let (t1, t2) = (p.angle.x, p.angle.y);
        let (w1, w2) = (p.angular_velocity.x, p.angular_velocity.y);

        let delta = t1 - t2;
        let (sin_d, cos_d) = delta.sin_cos();
        let den = denominator(p);

        // α1
        let num1 = -g * (2.0 * m1 + m2) * t1.sin();
        let num2 = -m2 * g * (t1 - 2.0 * t2).sin();
        let num3 = -2.0 * sin_d * m2;
        let num4 = w2 * w2 * l2 + w1 * w1 * l1 * cos_d;
        let a1 = (num1 + num2 + num3 * num4) / den;

        // α2
        let num5 = w1 * w1 * l1 * (m1 + m2);
        let num6 = g * (m1 + m2) * t1.cos();
        let num7 = w2 * w2 * l2 * m2 * cos_d;
        let a2 = 2.0 * sin_d * (num5 + num6 + num7) / den;

        NVec2::new(a1, a2)
    }
}
