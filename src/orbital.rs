//! Closed-form Kepler bookkeeping for the inverse-square force law:
//! circular-orbit seeding and the elements used to judge integrator output.

use nalgebra::Vector2;

use crate::physics::Params;

/// Momentum magnitude of a circular orbit at `radius`: m·sqrt(mu/r).
pub fn circular_momentum(params: &Params, radius: f64) -> f64 {
    params.mass * (params.mu() / radius).sqrt()
}

/// Phase-space point of a counterclockwise circular orbit at `radius`,
/// starting on the +x axis: ((r, 0), (0, m·sqrt(mu/r))).
pub fn circular_state(params: &Params, radius: f64) -> (Vector2<f64>, Vector2<f64>) {
    (
        Vector2::new(radius, 0.0),
        Vector2::new(0.0, circular_momentum(params, radius)),
    )
}

/// Orbital period of a bound orbit with semi-major axis `radius`.
pub fn period(params: &Params, radius: f64) -> f64 {
    2.0 * std::f64::consts::PI * (radius.powi(3) / params.mu()).sqrt()
}

/// Specific orbital energy v²/2 - mu/r. Negative for bound orbits.
pub fn specific_energy(params: &Params, position: &Vector2<f64>, momentum: &Vector2<f64>) -> f64 {
    let vel = momentum / params.mass;
    0.5 * vel.norm_squared() - params.mu() / position.norm()
}

/// Canonical angular momentum about the force center (scalar in 2D).
pub fn angular_momentum(position: &Vector2<f64>, momentum: &Vector2<f64>) -> f64 {
    position.perp(momentum)
}

/// Semi-major axis -mu/(2·energy). Negative for unbound orbits.
pub fn semi_major_axis(params: &Params, position: &Vector2<f64>, momentum: &Vector2<f64>) -> f64 {
    -params.mu() / (2.0 * specific_energy(params, position, momentum))
}

/// Scalar eccentricity from the eccentricity vector
/// ((v² - mu/r)·r⃗ - (r⃗·v⃗)·v⃗) / mu.
pub fn eccentricity(params: &Params, position: &Vector2<f64>, momentum: &Vector2<f64>) -> f64 {
    let vel = momentum / params.mass;
    let r = position.norm();
    let v2 = vel.norm_squared();
    let mu = params.mu();

    let e_vec = ((v2 - mu / r) * position - position.dot(&vel) * vel) / mu;
    e_vec.norm()
}
