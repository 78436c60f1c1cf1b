//! Fixed-step time integrator for the N-body system
//!
//! Provides the trapezoidal (average-acceleration) scheme, driven by a
//! [`ForceField`] and [`Parameters`]

use super::states::{System, NVec2};
use super::forces::ForceField;
use super::params::Parameters;

/// Advance the system by one step of `params.h0` using the trapezoidal scheme
/// Uses two force evaluations per step and updates positions, velocities,
/// and `sys.t` in-place
///
/// The second evaluation sees the new positions with the old velocities.
/// Velocity-dependent terms would therefore be evaluated at a mixed state;
/// gravity only depends on positions.
pub fn trapezoidal_integrator(sys: &mut System, forces: &ForceField, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 {
        return;
    }

    let dt = params.h0;
    let half_dt2 = 0.5 * dt * dt;

    // a_n at x_n
    let mut a_old = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut a_old);

    // x_n+1 = x_n + dt v_n + dt^2/2 a_n, velocities untouched
    for (b, a) in sys.bodies.iter_mut().zip(a_old.iter()) {
        b.x += dt * b.v + half_dt2 * *a;
    }

    sys.t += dt;

    // a_n+1 at x_n+1; a_old is complete and applied before this pass starts
    let mut a_new = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut a_new);

    // v_n+1 = v_n + dt (a_n + a_n+1) / 2
    for ((b, a0), a1) in sys.bodies.iter_mut().zip(a_old.iter()).zip(a_new.iter()) {
        b.v += 0.5 * dt * (*a0 + *a1);
    }
}

/// Run `params.sub_steps` integrator steps, one rendered frame's worth
pub fn advance(sys: &mut System, forces: &ForceField, params: &Parameters) {
    for _ in 0..params.sub_steps {
        trapezoidal_integrator(sys, forces, params);
    }
}
