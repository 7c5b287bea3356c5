use std::time::Instant;

use crate::simulation::engine::tick;
use crate::simulation::forces::LagrangianGravity;
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, Pendulum};
use crate::visualization::pixels::{PixelBuffer, BACKGROUND};

/// Time the integrator alone on the stock pendulum, returns seconds per step
pub fn bench_step(steps: u64) -> f64 {
    let forces = LagrangianGravity { g: 0.01 };
    let mut p = Pendulum::at_rest(
        NVec2::new(200.0, 200.0),
        NVec2::new(20.0, 20.0),
        NVec2::new(std::f64::consts::FRAC_PI_2, std::f64::consts::FRAC_PI_8),
    );

    // Warm up
    for _ in 0..steps.min(1000) {
        p = semi_implicit_euler(&p, &forces);
    }

    let t0 = Instant::now();
    for _ in 0..steps {
        p = semi_implicit_euler(&p, &forces);
    }
    let elapsed = t0.elapsed().as_secs_f64();
    let per_step = elapsed / steps.max(1) as f64;

    // Keeps the loop observable, angles are unbounded so just print them
    println!(
        "steps = {steps:8}, total = {elapsed:8.6} s, per step = {:8.3} ns, final angles = ({:.3}, {:.3})",
        per_step * 1e9,
        p.angle.x,
        p.angle.y
    );
    per_step
}

/// Run `frames` full draw-then-step frames headless, returns seconds per frame
pub fn bench_frames(scenario: &mut Scenario, frames: u64) -> f64 {
    let mut frame = PixelBuffer::new(scenario.engine.width, scenario.engine.height, BACKGROUND);

    let t0 = Instant::now();
    for _ in 0..frames {
        tick(scenario, &mut frame);
    }
    let elapsed = t0.elapsed().as_secs_f64();
    let per_frame = elapsed / frames.max(1) as f64;

    let d = &scenario.diagnostics;
    println!(
        "frames = {frames:8}, total = {elapsed:8.6} s, per frame = {:8.3} us, traced = {}, near-singular = {}",
        per_frame * 1e6,
        d.stamped_frames,
        d.singular_frames
    );
    per_frame
}
