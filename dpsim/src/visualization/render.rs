//! Per-frame rendering of the pendulum
//!
//! [`render`] maps the angles to screen positions, stamps the second mass into
//! the trace canvas and returns the vector draw commands for the live overlay.
//! [`composite`] then lays the canvas down as the background and rasterizes
//! the commands on top of it.

use crate::simulation::states::{NVec2, Pendulum, PendulumState};

use super::pixels::{PixelBuffer, INK, TRACE};
use super::raster::{draw_line, fill_circle};

/// A primitive drawn over the canvas for one frame only
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Line { from: NVec2, to: NVec2 },
    FillCircle { center: NVec2, radius: f64 },
}

/// Screen-space geometry of the pendulum, y grows downwards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub pivot: NVec2,
    pub first: NVec2,  // first mass
    pub second: NVec2, // second mass
}

/// Output of one [`render`] call
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    pub geometry: Geometry,
    pub commands: [DrawCommand; 4], // arm 1, arm 2, mass 1, mass 2
    pub stamped: Option<(u32, u32)>, // canvas pixel marked this frame
}

/// Fixed pivot of a `width` wide surface
pub fn pivot(width: u32, pivot_y: f64) -> NVec2 {
    NVec2::new(f64::from(width / 2), pivot_y)
}

/// Positions of both masses hanging from `pivot`
pub fn positions(p: &Pendulum, pivot: NVec2) -> Geometry {
    let (s1, c1) = p.angle.x.sin_cos();
    let (s2, c2) = p.angle.y.sin_cos();
    let first = pivot + p.arm_length.x * NVec2::new(s1, c1);
    let second = first + p.arm_length.y * NVec2::new(s2, c2);
    Geometry { pivot, first, second }
}

/// Stamp the trace pixel under `position`, floored to integer coordinates
///
/// Positions outside `[0, width) x [0, height)`, NaN included, are skipped.
pub fn stamp_trace(canvas: &mut PixelBuffer, position: NVec2) -> Option<(u32, u32)> {
    let x = position.x.floor();
    let y = position.y.floor();
    let inside = x >= 0.0
        && y >= 0.0
        && x < f64::from(canvas.width())
        && y < f64::from(canvas.height());
    if !inside {
        return None;
    }
    let (x, y) = (x as u32, y as u32);
    canvas.set(i64::from(x), i64::from(y), TRACE);
    Some((x, y))
}

/// Draw the current state: compute geometry, stamp the canvas, emit commands
pub fn render(state: &mut PendulumState, pivot: NVec2) -> RenderOutput {
    let p = &state.pendulum;
    let geometry = positions(p, pivot);

    let commands = [
        DrawCommand::Line {
            from: geometry.pivot,
            to: geometry.first,
        },
        DrawCommand::Line {
            from: geometry.first,
            to: geometry.second,
        },
        DrawCommand::FillCircle {
            center: geometry.first,
            radius: p.mass.x,
        },
        DrawCommand::FillCircle {
            center: geometry.second,
            radius: p.mass.y,
        },
    ];

    let stamped = stamp_trace(&mut state.canvas, geometry.second);

    RenderOutput {
        geometry,
        commands,
        stamped,
    }
}

/// Copy `canvas` into `frame` and rasterize `commands` over it
///
/// Coordinates and radii are truncated towards zero before rasterizing.
pub fn composite(canvas: &PixelBuffer, commands: &[DrawCommand], frame: &mut PixelBuffer) {
    frame.copy_from(canvas);
    for command in commands {
        match *command {
            DrawCommand::Line { from, to } => draw_line(
                from.x as i64,
                from.y as i64,
                to.x as i64,
                to.y as i64,
                frame,
                INK,
            ),
            DrawCommand::FillCircle { center, radius } => {
                fill_circle(center.x as i64, center.y as i64, radius as i64, frame, INK)
            }
        }
    }
}
