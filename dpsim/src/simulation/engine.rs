//! Runtime surface settings and the per-frame driver
//!
//! [`tick`] is the whole frame: draw the current state (stamp + composite),
//! check the acceleration denominator, then advance the pendulum one step.
//! It needs no window, so the viewer, the benchmark and the tests all share it.

use bevy::log::warn;

use crate::simulation::forces::denominator;
use crate::simulation::integrator::step_in_place;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;
use crate::visualization::pixels::PixelBuffer;
use crate::visualization::render::{composite, render, DrawCommand};

#[derive(Debug, Clone)]
pub struct Engine {
    pub width: u32,    // surface width in pixels
    pub height: u32,   // surface height in pixels
    pub title: String, // window title
    pub pivot: NVec2,  // fixed pivot in screen coordinates
}

/// What happened during one [`tick`]
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub frame: u64,                  // index of this frame, starting at 0
    pub commands: [DrawCommand; 4],  // overlay drawn over the canvas
    pub stamped: Option<(u32, u32)>, // trace pixel written this frame
    pub near_singular: bool,         // denominator below `singularity_eps`
}

/// Draw-then-step for one frame
///
/// `frame` receives the composited image and must match the canvas size.
pub fn tick(scenario: &mut Scenario, frame: &mut PixelBuffer) -> FrameReport {
    let Scenario {
        engine,
        parameters,
        state,
        forces,
        diagnostics,
    } = scenario;

    // Draw the state as it was at the start of the frame
    let output = render(state, engine.pivot);
    composite(&state.canvas, &output.commands, frame);
    if output.stamped.is_some() {
        diagnostics.stamped_frames += 1;
    }

    // Report, but never alter, steps taken close to the singularity
    let den = denominator(&state.pendulum);
    let near_singular = den.abs() < parameters.singularity_eps;
    if near_singular {
        diagnostics.singular_frames += 1;
        if !diagnostics.in_singular_region {
            warn!(
                "frame {}: acceleration denominator {:e} below {:e}, step may blow up",
                diagnostics.frames, den, parameters.singularity_eps
            );
        }
    }
    diagnostics.in_singular_region = near_singular;

    step_in_place(&mut state.pendulum, &*forces);

    let report = FrameReport {
        frame: diagnostics.frames,
        commands: output.commands,
        stamped: output.stamped,
        near_singular,
    };
    diagnostics.frames += 1;
    report
}
