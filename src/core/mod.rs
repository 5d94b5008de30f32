//! Core module - pure animation logic with no I/O dependencies
//!
//! State, physics, and randomness live here. The terminal and the clock are
//! reached only through seams, so every run replays from a seed.

pub mod rng;
pub mod sched;
pub mod sim;
pub mod snapshot;

// Re-export commonly used types
pub use rng::SimpleRng;
pub use sched::Scheduler;
pub use sim::{burst, Particle, Rocket, Sim};
pub use snapshot::SimSnapshot;
