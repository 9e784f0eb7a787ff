//! Systems - the per-tick grid passes
//!
//! Movement (class behaviours) writes `next`, census tallies it, density
//! settles it into `scratch`.

pub mod behaviors;
pub mod census;
pub mod density;
pub mod movement;

pub use census::{census, ParticleCount};
pub use density::DensityPass;
pub use movement::{MovementPass, MovementStats};
