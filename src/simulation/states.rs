//! Core state types for the N-body simulation.
//!
//! Defines the 2D body/system structs:
//! - `Body` / `System` using `NVec2`
//! - `Rgb`, the display color carried by each body
//!
//! The system holds the ordered list of bodies and the elapsed simulated time `t`.
//! Indices into `System::bodies` are stable for the whole run.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;
use serde::Deserialize;

use super::error::SimulationError;

pub type NVec2 = Vector2<f64>;

/// Display color of a body, parsed from `#rrggbb` or `#rgb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as floats in `[0, 1]`
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

impl FromStr for Rgb {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SimulationError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Rgb::new(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            // #rgb shorthand: each digit is doubled (#0af == #00aaff)
            3 => Ok(Rgb::new(
                channel(&hex[0..1])? * 0x11,
                channel(&hex[1..2])? * 0x11,
                channel(&hex[2..3])? * 0x11,
            )),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = SimulationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String, // unique within a system, used for centering lookup
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
    pub m: f64, // mass (kg)
    pub radius: f64, // radius (m), drawing only
    pub color: Rgb,
}

impl Body {
    pub fn new(name: impl Into<String>, m: f64, radius: f64, x: NVec2, v: NVec2, color: Rgb) -> Self {
        Self {
            name: name.into(),
            x,
            v,
            m,
            radius,
            color,
        }
    }

    /// Linear momentum `m * v`
    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, order fixed for the run
    pub t: f64, // elapsed simulated time (s)
}

impl System {
    /// Build a system at `t = 0`, checking masses, radii and name uniqueness
    pub fn new(bodies: Vec<Body>) -> Result<Self, SimulationError> {
        for (i, b) in bodies.iter().enumerate() {
            if !(b.m > 0.0) || !b.m.is_finite() {
                return Err(SimulationError::InvalidMass { name: b.name.clone() });
            }
            if !(b.radius >= 0.0) {
                return Err(SimulationError::InvalidRadius { name: b.name.clone() });
            }
            if bodies[..i].iter().any(|other| other.name == b.name) {
                return Err(SimulationError::DuplicateName { name: b.name.clone() });
            }
        }

        Ok(Self { bodies, t: 0.0 })
    }

    pub fn find(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Sum of `m * v` over all bodies
    pub fn total_momentum(&self) -> NVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    /// Largest absolute coordinate over all body positions, the view
    /// half-size that keeps every body on screen at start
    pub fn default_view_size(&self) -> f64 {
        let size = self
            .bodies
            .iter()
            .fold(0.0_f64, |acc, b| acc.max(b.x.x.abs()).max(b.x.y.abs()));

        if size > 0.0 && size.is_finite() { size } else { 1.0 }
    }
}
