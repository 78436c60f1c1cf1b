//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario catalog entry. A scenario consists of:
//!
//! - [`ParametersConfig`] – step size, sub-steps per frame and `G`
//! - [`ViewConfig`]       – initial view (zoom, trails, centering, pause)
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   h0: 10.0                # seconds per sub-step
//!   sub_steps: 1000         # sub-steps per rendered frame
//!   G: 6.674e-11            # optional, SI value by default
//!
//! view:
//!   zoom_size: 4.0e8        # optional, defaults to the largest |x| or |y|
//!   leave_trace: true
//!   center: "Earth"         # optional
//!
//! bodies:
//!   - name: "Earth"
//!     m: 5.974e24
//!     radius: 6.378e6
//!     x: [0.0, 0.0]
//!     v: [0.0, 0.0]
//!     color: "#0000ff"
//!   - name: "Moon"
//!     m: 7.3477e22
//!     radius: 1.7374e6
//!     x: [3.844e8, 0.0]
//!     v: [0.0, 1023.0]
//!     color: "#aaaaaa"
//! ```

use serde::Deserialize;

use crate::simulation::params::GRAVITATIONAL_CONSTANT;
use crate::simulation::states::Rgb;

fn default_h0() -> f64 {
    10.0
}

fn default_sub_steps() -> usize {
    1000
}

fn default_g() -> f64 {
    GRAVITATIONAL_CONSTANT
}

fn default_true() -> bool {
    true
}

fn default_color() -> Rgb {
    Rgb::WHITE
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_h0")]
    pub h0: f64, // time step size (s)
    #[serde(default = "default_sub_steps")]
    pub sub_steps: usize, // integrator steps per rendered frame
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            h0: default_h0(),
            sub_steps: default_sub_steps(),
            G: default_g(),
        }
    }
}

/// Initial view settings
#[derive(Deserialize, Debug, Clone)]
pub struct ViewConfig {
    pub zoom_size: Option<f64>, // world half-extent of the shorter screen axis
    #[serde(default = "default_true")]
    pub leave_trace: bool, // draw trails instead of clearing every frame
    pub center: Option<String>, // body kept at the view center
    #[serde(default)]
    pub paused: bool, // start paused
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            zoom_size: None,
            leave_trace: true,
            center: None,
            paused: false,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String, // unique name, shown as label and used for centering
    pub m: f64, // mass (kg)
    #[serde(default)]
    pub radius: f64, // radius (m), only used for drawing
    pub x: [f64; 2], // initial position (m)
    pub v: [f64; 2], // initial velocity (m/s)
    #[serde(default = "default_color")]
    pub color: Rgb,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub view: ViewConfig,
    pub bodies: Vec<BodyConfig>, // initial state of the system, order is kept
}
