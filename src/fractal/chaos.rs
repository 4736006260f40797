//! The chaos game: iterate a randomly-selected map from the table and
//! collect the orbit, which settles onto the attractor.

use nalgebra::Vector2;
use rand::Rng;

use super::maps::Ifs;

/// Iterations discarded before recording. The maps are contractions, so a
/// handful of steps pulls any starting point onto the attractor.
const BURN_IN: usize = 20;

/// Run the chaos game from the origin, recording `n_points` points after
/// burn-in.
pub fn render<R: Rng + ?Sized>(ifs: &Ifs, n_points: usize, rng: &mut R) -> Vec<Vector2<f64>> {
    let mut point = Vector2::zeros();
    for _ in 0..BURN_IN {
        point = ifs.sample(rng).apply(&point);
    }

    let mut points = Vec::with_capacity(n_points);
    for _ in 0..n_points {
        point = ifs.sample(rng).apply(&point);
        points.push(point);
    }
    points
}

/// Chaos game with the thread-local generator.
pub fn render_default(ifs: &Ifs, n_points: usize) -> Vec<Vector2<f64>> {
    render(ifs, n_points, &mut rand::thread_rng())
}
