//! Errors raised while building a simulation from its initial state.

use std::fmt;

/// Rejected initial state or view parameter
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Mass must be positive and finite (accelerations divide by it).
    InvalidMass { name: String },
    /// Radius must be non-negative.
    InvalidRadius { name: String },
    /// Two bodies share a name, which would make centering ambiguous.
    DuplicateName { name: String },
    /// View size must be positive and finite.
    InvalidViewSize,
    /// Time step must be finite and sub-step count at least 1.
    InvalidTimeStep,
    /// Color string is not `#rrggbb` or `#rgb`.
    InvalidColor(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidMass { name } => {
                write!(f, "body '{}': mass must be positive and finite", name)
            }
            SimulationError::InvalidRadius { name } => {
                write!(f, "body '{}': radius must be non-negative", name)
            }
            SimulationError::DuplicateName { name } => {
                write!(f, "body name '{}' is used more than once", name)
            }
            SimulationError::InvalidViewSize => write!(f, "view size must be positive and finite"),
            SimulationError::InvalidTimeStep => {
                write!(f, "time step must be finite and sub-steps at least 1")
            }
            SimulationError::InvalidColor(s) => write!(f, "invalid color '{}', expected #rrggbb", s),
        }
    }
}

impl std::error::Error for SimulationError {}
