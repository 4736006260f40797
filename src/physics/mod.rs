pub mod force;

pub use force::{energy, kinetic, potential, Params};
