//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait, the [`ForceField`] that sums its terms,
//! direct Newtonian gravity and the pairwise force table used to inspect
//! individual interactions.

use crate::simulation::states::{Body, NVec2, System};

/// Sum of the acceleration terms acting on every body
///
/// The engine runs with [`ForceField::gravity`], i.e. a single
/// [`NewtonianGravity`] term.
pub struct ForceField {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl ForceField {
    /// Create an empty force field
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Force field made of direct Newtonian gravity only
    #[allow(non_snake_case)]
    pub fn gravity(G: f64) -> Self {
        Self::new().with(NewtonianGravity { G })
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for ForceField {
    fn default() -> Self {
        Self::new()
    }
}

/// Acceleration source added into `out[i]` by [`ForceField::accumulate_accels`]
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]);
}

/// Gravitational force exerted on `a` by `b`
///
/// `F = G * m_a * m_b * r / |r|^3` with `r = x_b - x_a`, so the force points
/// from `a` toward `b`. Coincident positions produce non-finite components.
#[allow(non_snake_case)]
pub fn pair_force(a: &Body, b: &Body, G: f64) -> NVec2 {
    let r = b.x - a.x;
    let mag = r.norm();
    (G * a.m * b.m / (mag * mag * mag)) * r
}

/// Direct (unsoftened) Newtonian gravity, O(n^2) over unordered pairs
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        let n = sys.bodies.len();

        // Each unordered pair is evaluated once; j receives the negated force,
        // so the pair's contributions cancel in total momentum
        for i in 0..n {
            let bi = &sys.bodies[i];
            for j in (i + 1)..n {
                let bj = &sys.bodies[j];
                let f = pair_force(bi, bj, self.G);

                out[i] += f / bi.m;
                out[j] -= f / bj.m;
            }
        }
    }
}

/// Table of pairwise gravitational forces at one instant
///
/// Only the `i < j` half is stored; the other half is its negation, so
/// `get(j, i) == -get(i, j)` holds bit for bit.
#[derive(Debug, Clone)]
pub struct PairForces {
    n: usize,
    upper: Vec<NVec2>,
}

impl PairForces {
    /// Evaluate every unordered pair of `sys`
    #[allow(non_snake_case)]
    pub fn compute(sys: &System, G: f64) -> Self {
        let n = sys.bodies.len();
        let mut upper = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                upper.push(pair_force(&sys.bodies[i], &sys.bodies[j], G));
            }
        }
        Self { n, upper }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Force on body `i` exerted by body `j` (zero on the diagonal)
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> NVec2 {
        assert!(i < self.n && j < self.n, "pair ({}, {}) out of bounds for {} bodies", i, j, self.n);
        match i.cmp(&j) {
            std::cmp::Ordering::Equal => NVec2::zeros(),
            std::cmp::Ordering::Less => self.upper[self.index(i, j)],
            std::cmp::Ordering::Greater => -self.upper[self.index(j, i)],
        }
    }

    /// Net force on body `i`
    pub fn net(&self, i: usize) -> NVec2 {
        (0..self.n).map(|j| self.get(i, j)).sum()
    }

    // Row-major offset of (i, j), i < j, in the strictly upper triangle
    fn index(&self, i: usize, j: usize) -> usize {
        i * (2 * self.n - i - 1) / 2 + (j - i - 1)
    }
}
