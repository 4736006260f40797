use nalgebra::Vector2;

use crate::physics::{self, Params};
use super::integrator::Integrator;

// ---------------------------------------------------------------------------
// Trajectory recording
// ---------------------------------------------------------------------------

/// One recorded trajectory row.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub time: f64,
    pub position: Vector2<f64>,
    pub momentum: Vector2<f64>,
}

/// Ordered trajectory history; the construction-time state comes first.
#[derive(Debug, Clone)]
pub struct Trajectory {
    pub samples: Vec<Sample>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Position column, in recording order.
    pub fn positions(&self) -> Vec<Vector2<f64>> {
        self.samples.iter().map(|s| s.position).collect()
    }

    /// Momentum column, in recording order.
    pub fn momenta(&self) -> Vec<Vector2<f64>> {
        self.samples.iter().map(|s| s.momentum).collect()
    }

    /// Row-wise total energy over the whole history.
    pub fn energies(&self, params: &Params) -> Vec<f64> {
        physics::energy(params, &self.momenta(), &self.positions())
    }

    /// Row-wise distance from the force center.
    pub fn radii(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.position.norm()).collect()
    }
}

fn record(state: &dyn Integrator) -> Sample {
    Sample {
        time: state.time(),
        position: state.position(),
        momentum: state.momentum(),
    }
}

// ---------------------------------------------------------------------------
// Fixed-step drivers
// ---------------------------------------------------------------------------

/// Advance `state` by `n_steps` fixed steps, recording every step.
///
/// The returned trajectory includes the initial state, so it holds
/// `n_steps + 1` samples. The step count is the only stop condition; the
/// integrator itself never terminates a run.
pub fn simulate(state: &mut dyn Integrator, n_steps: usize) -> Trajectory {
    simulate_sampled(state, n_steps, 1)
}

/// Advance `n_steps` fixed steps, recording the initial state and every
/// `every`-th step after it. The final state is always recorded.
pub fn simulate_sampled(state: &mut dyn Integrator, n_steps: usize, every: usize) -> Trajectory {
    let every = every.max(1);
    let mut samples = Vec::with_capacity(n_steps / every + 2);
    samples.push(record(state));

    for i in 1..=n_steps {
        state.step();
        if i % every == 0 || i == n_steps {
            samples.push(record(state));
        }
    }

    Trajectory { samples }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
