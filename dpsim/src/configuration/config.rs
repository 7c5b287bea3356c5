//! Configuration types for loading a pendulum scenario from YAML.
//!
//! A scenario consists of:
//!
//! - [`WindowConfig`]     – drawable surface size, title and pivot height
//! - [`ParametersConfig`] – gravitational constant and singularity threshold
//! - [`PendulumConfig`]   – arm lengths, masses and initial angles/velocities
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every field has a default, so an empty document is the built-in scenario
//! and a partial one only overrides what it names.
//!
//! # YAML format
//!
//! ```yaml
//! window:
//!   width: 900
//!   height: 600
//!   title: "dpsim"
//!   pivot_y: 50.0          # screen y of the fixed pivot, x is always width / 2
//!
//! parameters:
//!   g: 0.01                # gravitational constant per tick^2
//!   singularity_eps: 1.0e-6
//!
//! pendulum:
//!   arm_length: [200.0, 200.0]
//!   mass: [20.0, 20.0]     # also the rendered radius of each mass
//!   angle: [1.5707963267948966, 0.39269908169872414]
//!   angular_velocity: [0.0, 0.0]
//! ```

use std::f64::consts::PI;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_WIDTH: u32 = 900;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_PIVOT_Y: f64 = 50.0;
pub const DEFAULT_G: f64 = 0.01;
pub const DEFAULT_SINGULARITY_EPS: f64 = 1.0e-6;

/// Errors raised while loading or validating a scenario
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid scenario field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Drawable surface and pivot placement
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: u32,  // surface width in pixels
    pub height: u32, // surface height in pixels
    pub title: String,
    pub pivot_y: f64, // pivot sits at (width / 2, pivot_y)
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: "dpsim".to_string(),
            pivot_y: DEFAULT_PIVOT_Y,
        }
    }
}

/// Physical constants, read once at startup
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ParametersConfig {
    pub g: f64,               // gravitational constant
    pub singularity_eps: f64, // |denominator| below this is reported as near-singular
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            g: DEFAULT_G,
            singularity_eps: DEFAULT_SINGULARITY_EPS,
        }
    }
}

/// Initial state of the two arms, index 0 is the arm attached to the pivot
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PendulumConfig {
    pub arm_length: [f64; 2],       // strictly positive
    pub mass: [f64; 2],             // strictly positive, doubles as circle radius
    pub angle: [f64; 2],            // radians from vertical
    pub angular_velocity: [f64; 2], // radians per tick
}

impl Default for PendulumConfig {
    fn default() -> Self {
        Self {
            arm_length: [200.0, 200.0],
            mass: [20.0, 20.0],
            angle: [PI / 2.0, PI / 8.0],
            angular_velocity: [0.0, 0.0],
        }
    }
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    pub window: WindowConfig,
    pub parameters: ParametersConfig,
    pub pendulum: PendulumConfig,
}

impl ScenarioConfig {
    /// Parse and validate a scenario from any reader
    pub fn from_yaml_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a scenario file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_yaml_reader(BufReader::new(file))
    }

    /// Reject values the equations of motion or the canvas cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 {
            return Err(invalid("window.width", "must be non-zero"));
        }
        if self.window.height == 0 {
            return Err(invalid("window.height", "must be non-zero"));
        }
        if !self.window.pivot_y.is_finite() {
            return Err(invalid("window.pivot_y", "must be finite"));
        }

        if !self.parameters.g.is_finite() {
            return Err(invalid("parameters.g", "must be finite"));
        }
        // NaN fails this comparison too
        if !(self.parameters.singularity_eps >= 0.0) {
            return Err(invalid("parameters.singularity_eps", "must be non-negative"));
        }

        let p = &self.pendulum;
        for value in p.arm_length {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(
                    "pendulum.arm_length",
                    format!("{value} is not strictly positive"),
                ));
            }
        }
        for value in p.mass {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(
                    "pendulum.mass",
                    format!("{value} is not strictly positive"),
                ));
            }
        }
        if p.angle.iter().any(|a| !a.is_finite()) {
            return Err(invalid("pendulum.angle", "must be finite"));
        }
        if p.angular_velocity.iter().any(|w| !w.is_finite()) {
            return Err(invalid("pendulum.angular_velocity", "must be finite"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_the_builtin_scenario() {
        let cfg = ScenarioConfig::from_yaml_reader("{}".as_bytes()).unwrap();
        assert_eq!(cfg, ScenarioConfig::default());
        assert_eq!(cfg.window.width, 900);
        assert_eq!(cfg.window.height, 600);
        assert_eq!(cfg.parameters.g, 0.01);
    }

    #[test]
    fn partial_document_overrides_only_named_fields() {
        let yaml = "pendulum:\n  mass: [10.0, 5.0]\n";
        let cfg = ScenarioConfig::from_yaml_reader(yaml.as_bytes()).unwrap();
        assert_eq!(cfg.pendulum.mass, [10.0, 5.0]);
        assert_eq!(cfg.pendulum.arm_length, [200.0, 200.0]);
        assert_eq!(cfg.window, WindowConfig::default());
    }

    #[test]
    fn non_positive_mass_is_rejected() {
        let yaml = "pendulum:\n  mass: [0.0, 20.0]\n";
        let err = ScenarioConfig::from_yaml_reader(yaml.as_bytes()).unwrap_err();
        assert!(
            matches!(err, ConfigError::Invalid { field: "pendulum.mass", .. }),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn negative_arm_length_is_rejected() {
        let yaml = "pendulum:\n  arm_length: [200.0, -1.0]\n";
        let err = ScenarioConfig::from_yaml_reader(yaml.as_bytes()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "pendulum.arm_length", .. }));
    }

    #[test]
    fn zero_sized_window_is_rejected() {
        let yaml = "window:\n  width: 0\n";
        let err = ScenarioConfig::from_yaml_reader(yaml.as_bytes()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "window.width", .. }));
    }

    #[test]
    fn unknown_fields_are_a_parse_error() {
        let yaml = "parameters:\n  G: 9.81\n";
        let err = ScenarioConfig::from_yaml_reader(yaml.as_bytes()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "unexpected error: {err}");
    }
}
