//! Build a fully-initialized pendulum scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - surface settings (`Engine`)
//! - physical parameters (`Parameters`)
//! - pendulum state and its trace canvas (`PendulumState`)
//! - the gravity term driving the step (`LagrangianGravity`)
//! - running frame counters (`Diagnostics`)
//!
//! The scenario is inserted into Bevy as a `Resource` and advanced once per
//! frame by [`crate::simulation::engine::tick`]

use bevy::prelude::Resource;

use crate::configuration::config::{ConfigError, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::LagrangianGravity;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Pendulum, PendulumState};
use crate::visualization::render::pivot;

/// Counters kept across frames
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    pub frames: u64,              // frames ticked so far
    pub stamped_frames: u64,      // frames whose trace pixel landed on the canvas
    pub singular_frames: u64,     // frames drawn with a near-singular denominator
    pub in_singular_region: bool, // previous frame was near-singular
}

/// Bevy resource representing a fully-initialized simulation scenario
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub state: PendulumState,
    pub forces: LagrangianGravity,
    pub diagnostics: Diagnostics,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        // Engine (runtime) from WindowConfig
        let w_cfg = cfg.window;
        let engine = Engine {
            width: w_cfg.width,
            height: w_cfg.height,
            title: w_cfg.title,
            pivot: pivot(w_cfg.width, w_cfg.pivot_y),
        };

        // Parameters (runtime) from ParametersConfig
        let parameters = Parameters {
            g: cfg.parameters.g,
            singularity_eps: cfg.parameters.singularity_eps,
        };

        // Pendulum: map `[f64; 2]` pairs -> nalgebra vectors
        let p_cfg = cfg.pendulum;
        let pendulum = Pendulum {
            arm_length: NVec2::from(p_cfg.arm_length),
            mass: NVec2::from(p_cfg.mass),
            angle: NVec2::from(p_cfg.angle),
            angular_velocity: NVec2::from(p_cfg.angular_velocity),
        };
        let state = PendulumState::new(pendulum, engine.width, engine.height);

        // Forces: closed-form gravity with the configured constant
        let forces = LagrangianGravity { g: parameters.g };

        Ok(Self {
            engine,
            parameters,
            state,
            forces,
            diagnostics: Diagnostics::default(),
        })
    }
}
