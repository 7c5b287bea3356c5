//! Physical parameters for the simulation
//!
//! `Parameters` holds the constants read once at startup:
//! - gravitational constant `g` (per tick squared, the step is one tick),
//! - `singularity_eps`, the threshold under which the shared denominator of the
//!   acceleration formula is reported as near-singular

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub g: f64,               // gravitational constant
    pub singularity_eps: f64, // near-singular threshold
}
