//! Build fully-initialized simulations from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime
//! [`Simulation`]: system state at t = 0, step parameters, gravity force field
//! and the initial view.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use bevy::log::{info, warn};

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

pub struct Scenario;

impl Scenario {
    /// Map a [`ScenarioConfig`] to a runnable [`Simulation`]
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Simulation> {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = cfg.bodies.iter().map(|bc: &BodyConfig| Body {
            name: bc.name.clone(),
            x: NVec2::new(bc.x[0], bc.x[1]),
            v: NVec2::new(bc.v[0], bc.v[1]),
            m: bc.m,
            radius: bc.radius,
            color: bc.color,
        }).collect();

        let system = System::new(bodies).context("invalid body set")?;

        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            h0: p_cfg.h0,
            sub_steps: p_cfg.sub_steps,
            G: p_cfg.G,
        };

        let mut simulation = Simulation::new(system, parameters).context("invalid parameters")?;

        let v_cfg = cfg.view;
        if let Some(size) = v_cfg.zoom_size {
            simulation.set_zoom_size(size).context("invalid view.zoom_size")?;
        }
        simulation.set_leave_trace(v_cfg.leave_trace);
        if let Some(name) = v_cfg.center.as_deref() {
            if simulation.system().find(name).is_none() {
                warn!("view.center '{}' does not name a body, view is not centered", name);
            }
            simulation.select_center_body(name);
        }
        if v_cfg.paused {
            simulation.toggle_pause();
        }

        info!(
            "scenario: {} bodies, {} x {} s per frame, view size {:e}",
            simulation.bodies().len(),
            simulation.parameters().sub_steps,
            simulation.parameters().h0,
            simulation.view().zoom_size
        );

        Ok(simulation)
    }

    /// Parse a YAML scenario document
    pub fn from_yaml_str(yaml: &str) -> Result<Simulation> {
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).context("malformed scenario")?;
        Self::build_scenario(cfg)
    }

    /// Load and build a YAML scenario file
    pub fn load(path: &Path) -> Result<Simulation> {
        let file = File::open(path)
            .with_context(|| format!("cannot open scenario {}", path.display()))?;
        let reader = BufReader::new(file);
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)
            .with_context(|| format!("malformed scenario {}", path.display()))?;
        Self::build_scenario(cfg)
    }
}
