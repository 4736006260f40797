use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Physical and numerical parameters
// ---------------------------------------------------------------------------

/// Immutable parameter set shared read-only by the force law and by every
/// integrator state constructed from it.
///
/// The central mass sits at the origin and never moves; the test particle is
/// too light to pull back on it. Defaults are the lecture's dimensionless
/// unit system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    pub g: f64,            // gravitational constant
    pub central_mass: f64, // M, fixed at the origin
    pub mass: f64,         // m, test particle
    pub dt: f64,           // fixed integration step
}

impl Default for Params {
    fn default() -> Self {
        Self {
            g: 0.01,
            central_mass: 500.0,
            mass: 0.1,
            dt: 1e-4,
        }
    }
}

impl Params {
    pub fn new(g: f64, central_mass: f64, mass: f64, dt: f64) -> Self {
        Self { g, central_mass, mass, dt }
    }

    /// Standard gravitational parameter mu = G*M.
    pub fn mu(&self) -> f64 {
        self.g * self.central_mass
    }

    /// Force-law constant k = G*M*m.
    pub fn k(&self) -> f64 {
        self.g * self.central_mass * self.mass
    }

    // -----------------------------------------------------------------------
    // Central force law
    // -----------------------------------------------------------------------

    /// Gravitational force on the particle at position `r`, attractive toward
    /// the origin: -G*M*m * r / |r|^3.
    ///
    /// Undefined at the origin: |r| = 0 divides by zero and the non-finite
    /// components propagate into any state advanced with them. Callers keep
    /// the particle away from the force center; there is no softening.
    pub fn force_at(&self, r: &Vector2<f64>) -> Vector2<f64> {
        let r2 = r.norm_squared();
        -self.k() / (r2 * r2.sqrt()) * r
    }

    /// Potential energy at position `r`: -G*M*m / |r|.
    pub fn potential_at(&self, r: &Vector2<f64>) -> f64 {
        -self.k() / r.norm()
    }

    /// Kinetic energy of momentum `p`: |p|^2 / (2m).
    pub fn kinetic_at(&self, p: &Vector2<f64>) -> f64 {
        p.norm_squared() / (2.0 * self.mass)
    }

    /// Total energy of a (momentum, position) pair.
    pub fn energy_at(&self, p: &Vector2<f64>, r: &Vector2<f64>) -> f64 {
        self.potential_at(r) + self.kinetic_at(p)
    }
}

// ---------------------------------------------------------------------------
// Batch energy interface (row-wise over a trajectory history)
// ---------------------------------------------------------------------------

/// Potential energy per row of a batch of positions.
pub fn potential(params: &Params, positions: &[Vector2<f64>]) -> Vec<f64> {
    positions.iter().map(|r| params.potential_at(r)).collect()
}

/// Kinetic energy per row of a batch of momenta.
pub fn kinetic(params: &Params, momenta: &[Vector2<f64>]) -> Vec<f64> {
    momenta.iter().map(|p| params.kinetic_at(p)).collect()
}

/// Total energy per row of paired momentum/position batches.
pub fn energy(
    params: &Params,
    momenta: &[Vector2<f64>],
    positions: &[Vector2<f64>],
) -> Vec<f64> {
    momenta
        .iter()
        .zip(positions)
        .map(|(p, r)| params.energy_at(p, r))
        .collect()
}
