//! Fixed-step time integrator for the double pendulum
//!
//! One call advances the pendulum by one tick (one rendered frame). There is
//! no wall-clock scaling and no adaptive stepping.

use super::forces::Acceleration;
use super::states::Pendulum;

/// Advance `p` by one tick using semi-implicit (symplectic) Euler
///
/// Velocity is kicked first and the *updated* velocity drifts the angles:
/// ω' = ω + α(p), θ' = θ + ω'.
/// Arm lengths and masses pass through unchanged. Pure: the same input always
/// yields the same output.
pub fn semi_implicit_euler<A>(p: &Pendulum, forces: &A) -> Pendulum
where
    A: Acceleration + ?Sized,
{
    let alpha = forces.angular_acceleration(p);

    // Kick: ω_n+1 = ω_n + α_n
    let angular_velocity = p.angular_velocity + alpha;

    // Drift with the new velocity: θ_n+1 = θ_n + ω_n+1
    let angle = p.angle + angular_velocity;

    Pendulum {
        angle,
        angular_velocity,
        ..*p
    }
}

/// In-place form of [`semi_implicit_euler`]
pub fn step_in_place<A>(p: &mut Pendulum, forces: &A)
where
    A: Acceleration + ?Sized,
{
    *p = semi_implicit_euler(p, forces);
}
