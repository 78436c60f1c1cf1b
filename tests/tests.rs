use orbitview::simulation::states::{Body, System, NVec2, Rgb};
use orbitview::simulation::params::{Parameters, GRAVITATIONAL_CONSTANT};
use orbitview::simulation::forces::{ForceField, PairForces, pair_force};
use orbitview::simulation::integrator::{trapezoidal_integrator, advance};
use orbitview::SimulationError;

const EARTH_MASS: f64 = 5.974e24;
const MOON_MASS: f64 = 7.3477e22;
const EARTH_MOON_DISTANCE: f64 = 3.844e8;

fn body(name: &str, m: f64, x: [f64; 2], v: [f64; 2]) -> Body {
    Body::new(name, m, 1.0, NVec2::new(x[0], x[1]), NVec2::new(v[0], v[1]), Rgb::WHITE)
}

/// Build a simple 2-body System separated along x-axis
pub fn two_body_system(dist: f64, m1: f64, m2: f64) -> System {
    System::new(vec![
        body("a", m1, [-dist / 2.0, 0.0], [0.0, 0.0]),
        body("b", m2, [dist / 2.0, 0.0], [0.0, 0.0]),
    ])
    .unwrap()
}

/// Earth at the origin, Moon on +x with its tangential speed
pub fn earth_moon_system() -> System {
    System::new(vec![
        body("Earth", EARTH_MASS, [0.0, 0.0], [0.0, 0.0]),
        body("Moon", MOON_MASS, [EARTH_MOON_DISTANCE, 0.0], [0.0, 1023.0]),
    ])
    .unwrap()
}

/// Four bodies at distinct, asymmetric positions
pub fn scattered_system() -> System {
    System::new(vec![
        body("a", 2.0e24, [0.0, 0.0], [0.0, 10.0]),
        body("b", 7.0e22, [3.0e8, 1.0e7], [0.0, 900.0]),
        body("c", 5.0e20, [-1.2e8, 4.4e8], [-300.0, 0.0]),
        body("d", 9.0e23, [6.1e8, -2.5e8], [150.0, 420.0]),
    ])
    .unwrap()
}

/// Default physics parameters for tests: one 1 s step per frame
pub fn test_params() -> Parameters {
    Parameters::new(1.0, 1).unwrap()
}

pub fn gravity() -> ForceField {
    ForceField::gravity(GRAVITATIONAL_CONSTANT)
}

fn accels(sys: &System) -> Vec<NVec2> {
    let mut acc = vec![NVec2::zeros(); sys.bodies.len()];
    gravity().accumulate_accels(sys.t, sys, &mut acc);
    acc
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn pair_table_is_exactly_antisymmetric() {
    let sys = scattered_system();
    let table = PairForces::compute(&sys, GRAVITATIONAL_CONSTANT);

    assert_eq!(table.len(), 4);
    for i in 0..4 {
        assert_eq!(table.get(i, i), NVec2::zeros());
        for j in 0..4 {
            assert_eq!(table.get(i, j), -table.get(j, i), "pair ({}, {})", i, j);
        }
    }
}

#[test]
fn pair_force_swapped_arguments_negate() {
    let sys = scattered_system();
    for i in 0..sys.bodies.len() {
        for j in 0..sys.bodies.len() {
            if i == j {
                continue;
            }
            let fij = pair_force(&sys.bodies[i], &sys.bodies[j], GRAVITATIONAL_CONSTANT);
            let fji = pair_force(&sys.bodies[j], &sys.bodies[i], GRAVITATIONAL_CONSTANT);
            assert!(
                (fij + fji).norm() <= 1e-14 * fij.norm(),
                "pair ({}, {}) not antisymmetric: {:?} vs {:?}", i, j, fij, fji
            );
        }
    }
}

#[test]
fn gravity_newton_third_law() {
    let sys = two_body_system(1.0e8, 2.0e24, 3.0e22);
    let acc = accels(&sys);

    let f1 = acc[0] * sys.bodies[0].m;
    let f2 = acc[1] * sys.bodies[1].m;
    let net = f1 + f2;

    assert!(net.norm() <= 1e-12 * f1.norm(), "Net force not zero: {:?}", net);
}

#[test]
fn gravity_net_force_matches_pair_table() {
    let sys = scattered_system();
    let acc = accels(&sys);
    let table = PairForces::compute(&sys, GRAVITATIONAL_CONSTANT);

    for (i, b) in sys.bodies.iter().enumerate() {
        let from_table = table.net(i);
        let from_accel = acc[i] * b.m;
        assert!(
            (from_table - from_accel).norm() <= 1e-12 * from_table.norm(),
            "body {}: {:?} vs {:?}", i, from_table, from_accel
        );
    }
}

#[test]
fn gravity_points_toward_other_body() {
    let sys = two_body_system(2.0e8, 1.0e24, 1.0e24);
    let acc = accels(&sys);

    let dx = sys.bodies[1].x - sys.bodies[0].x;
    assert!(acc[0].dot(&dx) > 0.0, "Acceleration is not toward second body");
    assert!(acc[1].dot(&dx) < 0.0, "Acceleration is not toward first body");
}

#[test]
fn gravity_inverse_square_law() {
    let sys_r = two_body_system(1.0e8, 1.0e24, 1.0e24);
    let sys_2r = two_body_system(2.0e8, 1.0e24, 1.0e24);

    let ratio = accels(&sys_r)[0].norm() / accels(&sys_2r)[0].norm();

    assert!((ratio - 4.0).abs() < 1e-9, "Expected 4x, got {}", ratio);
}

#[test]
fn gravity_magnitude_matches_newton() {
    let sys = earth_moon_system();
    let acc = accels(&sys);

    let expected = GRAVITATIONAL_CONSTANT * EARTH_MASS / (EARTH_MOON_DISTANCE * EARTH_MOON_DISTANCE);
    assert!((acc[1].norm() - expected).abs() <= 1e-12 * expected);
}

#[test]
fn empty_force_field_gives_zero_acceleration() {
    let sys = earth_moon_system();
    let mut acc = vec![NVec2::new(1.0, 1.0); 2];
    ForceField::new().accumulate_accels(0.0, &sys, &mut acc);

    assert!(acc.iter().all(|a| *a == NVec2::zeros()));
}

#[test]
fn coincident_bodies_give_non_finite_accels() {
    let sys = System::new(vec![
        body("a", EARTH_MASS, [1.0e6, -2.0e6], [0.0, 0.0]),
        body("b", MOON_MASS, [1.0e6, -2.0e6], [0.0, 0.0]),
    ])
    .unwrap();

    let acc = accels(&sys);

    assert!(acc.iter().all(|a| !a.x.is_finite() && !a.y.is_finite()));
    assert!(!pair_force(&sys.bodies[0], &sys.bodies[1], GRAVITATIONAL_CONSTANT).x.is_finite());
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn free_body_moves_in_a_straight_line() {
    let mut sys = System::new(vec![body("lone", 1.0, [5.0, -2.0], [3.0, 4.0])]).unwrap();
    let params = Parameters::new(0.5, 4).unwrap();

    advance(&mut sys, &gravity(), &params);

    assert_eq!(sys.bodies[0].x, NVec2::new(11.0, 6.0));
    assert_eq!(sys.bodies[0].v, NVec2::new(3.0, 4.0));
    assert_eq!(sys.t, 2.0);
}

#[test]
fn empty_system_is_left_alone() {
    let mut sys = System::new(Vec::new()).unwrap();
    trapezoidal_integrator(&mut sys, &gravity(), &test_params());

    assert!(sys.bodies.is_empty());
    assert_eq!(sys.t, 0.0);
}

#[test]
fn step_uses_averaged_accelerations() {
    let mut sys = scattered_system();
    let before = sys.clone();
    let dt = 3600.0;
    let params = Parameters::new(dt, 1).unwrap();

    // Reference: positions from a_n, velocities from (a_n + a_n+1) / 2
    let a1 = accels(&before);
    let mut moved = before.clone();
    for (b, a) in moved.bodies.iter_mut().zip(a1.iter()) {
        b.x = b.x + b.v * dt + *a * (dt * dt / 2.0);
    }
    let a2 = accels(&moved);

    trapezoidal_integrator(&mut sys, &gravity(), &params);

    for i in 0..sys.bodies.len() {
        let b0 = &before.bodies[i];
        let b1 = &sys.bodies[i];
        let expected_v = b0.v + (a1[i] + a2[i]) / 2.0 * dt;

        assert!((b1.x - moved.bodies[i].x).norm() <= 1e-9 * moved.bodies[i].x.norm().max(1.0));
        assert!((b1.v - expected_v).norm() <= 1e-9 * expected_v.norm().max(1.0));
    }
    assert_eq!(sys.t, dt);
}

#[test]
fn circular_orbit_keeps_its_radius() {
    let central = 5.974e24;
    let satellite = 4.19e5;
    let r = 6.788e6;
    let speed = (GRAVITATIONAL_CONSTANT * (central + satellite) / r).sqrt();

    // Center of mass at rest
    let mut sys = System::new(vec![
        body("Earth", central, [0.0, 0.0], [0.0, -speed * satellite / (central + satellite)]),
        body("ISS", satellite, [r, 0.0], [0.0, speed * central / (central + satellite)]),
    ])
    .unwrap();
    let params = Parameters::new(1.0, 12_000).unwrap(); // a bit over two orbits

    let mut max_dev: f64 = 0.0;
    for _ in 0..params.sub_steps {
        trapezoidal_integrator(&mut sys, &gravity(), &params);
        let d = (sys.bodies[1].x - sys.bodies[0].x).norm();
        max_dev = max_dev.max((d - r).abs() / r);
    }

    assert!(max_dev < 1e-4, "Orbit radius drifted by {:e} (relative)", max_dev);
}

#[test]
fn total_momentum_is_conserved() {
    let mut sys = scattered_system();
    let p0 = sys.total_momentum();
    let scale: f64 = sys.bodies.iter().map(|b| b.momentum().norm()).sum();
    let params = Parameters::new(60.0, 2_000).unwrap();

    advance(&mut sys, &gravity(), &params);

    let drift = (sys.total_momentum() - p0).norm();
    assert!(drift <= 1e-9 * scale, "Momentum drifted by {:e}", drift);
}

#[test]
fn earth_moon_single_step_is_small() {
    let mut sys = earth_moon_system();
    let before = sys.clone();

    // momentum balance of the accelerations at the start of the step
    let acc = accels(&sys);
    let f_earth = acc[0] * EARTH_MASS;
    let f_moon = acc[1] * MOON_MASS;
    assert!((f_earth + f_moon).norm() <= 1e-12 * f_earth.norm());

    trapezoidal_integrator(&mut sys, &gravity(), &test_params());

    for (b0, b1) in before.bodies.iter().zip(sys.bodies.iter()) {
        let moved = (b1.x - b0.x).norm();
        assert!(moved < 2000.0, "{} moved {} m in one step", b0.name, moved);
        assert!(moved > 0.0, "{} did not move", b0.name);
    }
}

// ==================================================================================
// State tests
// ==================================================================================

#[test]
fn system_rejects_non_positive_mass() {
    let err = System::new(vec![body("rock", 0.0, [0.0, 0.0], [0.0, 0.0])]).unwrap_err();
    assert_eq!(err, SimulationError::InvalidMass { name: "rock".into() });

    let err = System::new(vec![body("rock", f64::NAN, [0.0, 0.0], [0.0, 0.0])]).unwrap_err();
    assert_eq!(err, SimulationError::InvalidMass { name: "rock".into() });
}

#[test]
fn system_rejects_duplicate_names() {
    let err = System::new(vec![
        body("twin", 1.0, [0.0, 0.0], [0.0, 0.0]),
        body("twin", 1.0, [1.0, 0.0], [0.0, 0.0]),
    ])
    .unwrap_err();
    assert_eq!(err, SimulationError::DuplicateName { name: "twin".into() });
}

#[test]
fn system_rejects_negative_radius() {
    let mut b = body("rock", 1.0, [0.0, 0.0], [0.0, 0.0]);
    b.radius = -1.0;
    assert_eq!(
        System::new(vec![b]).unwrap_err(),
        SimulationError::InvalidRadius { name: "rock".into() }
    );
}

#[test]
fn default_view_size_is_largest_coordinate() {
    let sys = scattered_system();
    assert_eq!(sys.default_view_size(), 6.1e8);

    let at_origin = System::new(vec![body("a", 1.0, [0.0, 0.0], [0.0, 0.0])]).unwrap();
    assert_eq!(at_origin.default_view_size(), 1.0);
}

#[test]
fn parameters_reject_bad_steps() {
    assert_eq!(Parameters::new(1.0, 0).unwrap_err(), SimulationError::InvalidTimeStep);
    assert_eq!(Parameters::new(f64::INFINITY, 1).unwrap_err(), SimulationError::InvalidTimeStep);
}

#[test]
fn colors_parse_from_hex() {
    assert_eq!("#00ffff".parse::<Rgb>().unwrap(), Rgb::new(0, 255, 255));
    assert_eq!("#0a8".parse::<Rgb>().unwrap(), Rgb::new(0x00, 0xaa, 0x88));
    assert_eq!(Rgb::new(255, 136, 0).to_string(), "#ff8800");
    assert!("ff8800".parse::<Rgb>().is_err());
    assert!("#ff88".parse::<Rgb>().is_err());
    assert!("#gg0000".parse::<Rgb>().is_err());
    assert!("#+f+f+f".parse::<Rgb>().is_err());
    assert!("#+ff+ff".parse::<Rgb>().is_err());
}
