use std::time::Instant;

use crate::simulation::forces::{Acceleration, NewtonianGravity, PairForces};
use crate::simulation::integrator::advance;
use crate::simulation::params::{Parameters, GRAVITATIONAL_CONSTANT};
use crate::simulation::states::{Body, NVec2, Rgb, System};
use crate::simulation::forces::ForceField;

/// Helper to build a deterministic system of size `n`, no rand needed
fn make_system(n: usize) -> System {
    let bodies = (0..n)
        .map(|i| {
            let i_f = i as f64;
            let x = NVec2::new((i_f * 0.37).sin() * 5.0e9, (i_f * 0.13).cos() * 5.0e9);
            Body::new(format!("b{i}"), 1.0e24, 1.0e6, x, NVec2::zeros(), Rgb::WHITE)
        })
        .collect();

    System { bodies, t: 0.0 }
}

/// Time one direct gravity evaluation against building the pairwise table
pub fn bench_gravity() {
    let ns = [10, 20, 50, 100, 200, 400];

    for n in ns {
        let sys = make_system(n);
        let mut out = vec![NVec2::zeros(); n];
        let gravity = NewtonianGravity { G: GRAVITATIONAL_CONSTANT };

        // Warm up
        gravity.acceleration(0.0, &sys, &mut out);

        let t0 = Instant::now();
        gravity.acceleration(0.0, &sys, &mut out);
        let dt_direct = t0.elapsed().as_secs_f64();

        let t1 = Instant::now();
        let table = PairForces::compute(&sys, GRAVITATIONAL_CONSTANT);
        let dt_table = t1.elapsed().as_secs_f64();

        println!(
            "N = {n:4}, accels = {:10.8} s, pair table = {:10.8} s ({} bodies)",
            dt_direct,
            dt_table,
            table.len()
        );
    }
}

/// Wall-clock cost of one rendered frame (`sub_steps` integrator steps) for
/// a range of body counts
/// Paste output directly into a spreadsheet to graph
pub fn bench_frame_curve() {
    let params = Parameters::default();
    let forces = ForceField::gravity(params.G);

    println!("N,frame_ms,step_us");

    for n in (2..=40).step_by(2) {
        let mut sys = make_system(n);

        let t0 = Instant::now();
        advance(&mut sys, &forces, &params);
        let frame_ms = t0.elapsed().as_secs_f64() * 1000.0;
        let step_us = frame_ms * 1000.0 / params.sub_steps as f64;

        println!("{},{:.6},{:.6}", n, frame_ms, step_us);
    }
}
