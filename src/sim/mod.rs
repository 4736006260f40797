//! Fixed-step integration: the scheme state machines, the run drivers that
//! record trajectories, and energy-drift bookkeeping.

pub mod integrator;
pub mod monitor;
pub mod runner;

pub use integrator::{EulerState, Integrator, LeapfrogState, VerletState};
pub use monitor::EnergyMonitor;
pub use runner::{simulate, simulate_sampled, Sample, Trajectory};
