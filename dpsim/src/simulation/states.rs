//! Core state types for the double pendulum.
//!
//! - `Pendulum`      – kinematic record `(arm_length, mass, angle, angular_velocity)`
//! - `PendulumState` – a `Pendulum` plus the trace canvas it owns for the whole run
//!
//! Every pair is an `NVec2`, component `x` belongs to the arm attached to the
//! pivot and `y` to the trailing arm.

use nalgebra::Vector2;

use crate::visualization::pixels::{PixelBuffer, BACKGROUND};

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pendulum {
    pub arm_length: NVec2,       // (L1, L2), constant
    pub mass: NVec2,             // (m1, m2), constant, also the rendered radius
    pub angle: NVec2,            // (θ1, θ2) from vertical, never wrapped
    pub angular_velocity: NVec2, // (ω1, ω2) per tick
}

impl Pendulum {
    /// Pendulum released from rest at the given angles
    pub fn at_rest(arm_length: NVec2, mass: NVec2, angle: NVec2) -> Self {
        Self {
            arm_length,
            mass,
            angle,
            angular_velocity: NVec2::zeros(),
        }
    }
}

/// Everything that persists from one frame to the next
#[derive(Debug, Clone)]
pub struct PendulumState {
    pub pendulum: Pendulum,
    pub canvas: PixelBuffer, // trace of the second mass, only ever gains marks
}

impl PendulumState {
    /// Allocate a fully white `width` x `height` canvas for `pendulum`
    pub fn new(pendulum: Pendulum, width: u32, height: u32) -> Self {
        Self {
            pendulum,
            canvas: PixelBuffer::new(width, height, BACKGROUND),
        }
    }
}
