//! Frame-driven simulation runtime
//!
//! `Simulation` owns the body system, the force field and the view state.
//! The host calls [`Simulation::tick`] once per frame and forwards user input
//! to the view mutators.

use bevy::log::{debug, info};
use bevy::prelude::Resource;

use super::error::SimulationError;
use super::forces::ForceField;
use super::integrator::advance;
use super::params::Parameters;
use super::states::{Body, NVec2, System};
use super::viewport::ViewPort;
use crate::visualization::surface::Surface;

/// Smallest radius (pixels) a body is drawn with
pub const MIN_DRAW_RADIUS: f64 = 1.0;

/// Horizontal gap (pixels) between a body's disc and its label
const LABEL_GAP: f64 = 4.0;

/// Per-run view settings
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub zoom_size: f64, // world half-extent of the shorter surface axis
    pub pan_offset: NVec2, // pixels
    pub center: Option<String>, // name of the body kept at the view center
    pub leave_trace: bool, // keep previous frames (trails)
    pub paused: bool,
    pub dirty: bool, // clear once on the next drawn frame
}

impl ViewState {
    pub fn new(zoom_size: f64) -> Self {
        Self {
            zoom_size,
            pan_offset: NVec2::zeros(),
            center: None,
            leave_trace: true,
            paused: false,
            // a fresh surface holds no defined content yet
            dirty: true,
        }
    }
}

/// Body system, force field, step parameters and view state of one run
#[derive(Resource)]
pub struct Simulation {
    system: System,
    forces: ForceField,
    parameters: Parameters,
    view: ViewState,
}

impl Simulation {
    /// Gravity-only simulation, initially framed by the system's default view size
    pub fn new(system: System, parameters: Parameters) -> Result<Self, SimulationError> {
        let forces = ForceField::gravity(parameters.G);
        Self::with_forces(system, forces, parameters)
    }

    pub fn with_forces(
        system: System,
        forces: ForceField,
        parameters: Parameters,
    ) -> Result<Self, SimulationError> {
        parameters.validate()?;
        let view = ViewState::new(system.default_view_size());

        debug!(
            "simulation: {} bodies, dt = {} s, {} sub-steps per frame",
            system.bodies.len(),
            parameters.h0,
            parameters.sub_steps
        );

        Ok(Self {
            system,
            forces,
            parameters,
            view,
        })
    }

    /// Advance one frame and draw it
    ///
    /// Does nothing while paused, when `surface` is `None`, or when the
    /// surface has no area yet.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: Option<&mut S>, width: f64, height: f64) {
        let Some(surface) = surface else {
            return;
        };
        if self.view.paused || !(width > 0.0 && height > 0.0) {
            return;
        }

        advance(&mut self.system, &self.forces, &self.parameters);

        if !self.view.leave_trace || self.view.dirty {
            surface.clear(width, height);
            self.view.dirty = false;
        }

        let view = self.viewport(width, height);
        for body in &self.system.bodies {
            self.draw_body(body, &mut *surface, &view);
        }
    }

    fn draw_body<S: Surface + ?Sized>(&self, body: &Body, surface: &mut S, view: &ViewPort) {
        let p = view.translate(body.x);
        let radius = view.translate_scalar(body.radius).max(MIN_DRAW_RADIUS);
        surface.fill_circle(p.x, p.y, radius, body.color);

        // labels would smear into the trails
        if !self.view.leave_trace {
            surface.draw_text(p.x + radius + LABEL_GAP, p.y, &body.name);
        }
    }

    /// Projection for a `width` x `height` surface from the current view state
    pub fn viewport(&self, width: f64, height: f64) -> ViewPort {
        ViewPort::new(width, height, self.view.zoom_size, self.view.pan_offset)
            .centered_on(self.center_body().map(|b| b.x))
    }

    pub fn set_leave_trace(&mut self, leave_trace: bool) {
        if self.view.leave_trace != leave_trace {
            self.view.leave_trace = leave_trace;
            self.view.dirty = true;
        }
    }

    pub fn toggle_pause(&mut self) {
        self.view.paused = !self.view.paused;
        debug!("simulation {}", if self.view.paused { "paused" } else { "resumed" });
    }

    pub fn set_pan_offset(&mut self, offset: NVec2) {
        self.view.pan_offset = offset;
        self.view.dirty = true;
    }

    /// Grow (`delta > 0`) or shrink (`delta < 0`) the view size by
    /// `1 / (20 * delta)` of itself
    ///
    /// A zero or non-finite delta, or one that would leave the view size
    /// non-positive, is ignored.
    pub fn zoom(&mut self, delta: f64) {
        if delta == 0.0 || !delta.is_finite() {
            return;
        }

        let size = self.view.zoom_size + self.view.zoom_size / (20.0 * delta);
        if size > 0.0 && size.is_finite() {
            self.view.zoom_size = size;
            self.view.dirty = true;
        } else {
            debug!("zoom by {} ignored, view size would become {}", delta, size);
        }
    }

    pub fn set_zoom_size(&mut self, size: f64) -> Result<(), SimulationError> {
        if !(size > 0.0 && size.is_finite()) {
            return Err(SimulationError::InvalidViewSize);
        }
        self.view.zoom_size = size;
        self.view.dirty = true;
        Ok(())
    }

    /// Keep the named body at the view center; an unknown name clears centering
    pub fn select_center_body(&mut self, name: &str) {
        self.view.center = match self.system.find(name) {
            Some(body) => Some(body.name.clone()),
            None => {
                if !name.is_empty() {
                    debug!("no body named '{}', centering cleared", name);
                }
                None
            }
        };
        self.view.dirty = true;
        info!("view centered on {}", self.view.center.as_deref().unwrap_or("origin"));
    }

    pub fn list_body_names(&self) -> Vec<&str> {
        self.system.bodies.iter().map(|b| b.name.as_str()).collect()
    }

    /// Body currently kept at the view center, resolved by name
    pub fn center_body(&self) -> Option<&Body> {
        self.view.center.as_deref().and_then(|name| self.system.find(name))
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn is_paused(&self) -> bool {
        self.view.paused
    }

    /// Simulated seconds since the start of the run
    pub fn elapsed(&self) -> f64 {
        self.system.t
    }
}
