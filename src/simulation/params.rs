//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size and number of sub-steps per rendered frame,
//! - gravitational constant `G`

use super::error::SimulationError;

/// Newtonian gravitational constant (m^3 kg^-1 s^-2)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub h0: f64, // step size (s)
    pub sub_steps: usize, // integrator steps per frame
    pub G: f64, // gravitational constant
}

impl Parameters {
    pub fn new(h0: f64, sub_steps: usize) -> Result<Self, SimulationError> {
        let params = Self {
            h0,
            sub_steps,
            G: GRAVITATIONAL_CONSTANT,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.h0.is_finite() || self.sub_steps == 0 || !self.G.is_finite() {
            return Err(SimulationError::InvalidTimeStep);
        }
        Ok(())
    }
}

impl Default for Parameters {
    /// 1000 sub-steps of 10 s each per frame
    fn default() -> Self {
        Self {
            h0: 10.0,
            sub_steps: 1000,
            G: GRAVITATIONAL_CONSTANT,
        }
    }
}
