pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2, Rgb};
pub use simulation::error::SimulationError;
pub use simulation::params::{Parameters, GRAVITATIONAL_CONSTANT};
pub use simulation::forces::{Acceleration, ForceField, NewtonianGravity, PairForces, pair_force};
pub use simulation::integrator::{trapezoidal_integrator, advance};
pub use simulation::viewport::ViewPort;
pub use simulation::engine::{Simulation, ViewState, MIN_DRAW_RADIUS};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, ViewConfig, BodyConfig, ScenarioConfig};

pub use visualization::surface::{Surface, DrawCommand, CommandBuffer};
pub use visualization::viewer2d::run_2d;

pub use benchmark::benchmark::{bench_gravity, bench_frame_curve};
