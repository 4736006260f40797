pub mod fractal;
pub mod io;
pub mod orbital;
pub mod physics;
pub mod sim;

// Convenience re-exports for the common driver path
pub use physics::Params;
pub use sim::{
    simulate, simulate_sampled, EnergyMonitor, EulerState, Integrator, LeapfrogState, Trajectory,
    VerletState,
};
