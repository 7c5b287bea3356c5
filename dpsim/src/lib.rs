pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{NVec2, Pendulum, PendulumState};
pub use simulation::forces::{denominator, Acceleration, LagrangianGravity};
pub use simulation::integrator::{semi_implicit_euler, step_in_place};
pub use simulation::scenario::{Diagnostics, Scenario};
pub use simulation::engine::{tick, Engine, FrameReport};

pub use configuration::config::{ConfigError, ParametersConfig, PendulumConfig, ScenarioConfig, WindowConfig};

pub use visualization::pixels::PixelBuffer;
pub use visualization::render::{composite, positions, render, DrawCommand, Geometry};
pub use visualization::dpsim_vis2d::run_2d;

pub use benchmark::benchmark::{bench_frames, bench_step};
