//! Scheduling seam between the simulation and its runtime.

use std::time::Duration;

use crate::types::Timer;

/// Receives timer arm requests from the simulation.
///
/// The simulation never reads a clock. It asks for a timer through this
/// trait and the owner of the real deadlines delivers it back later as an
/// `advance` or `handle_spawn_timer` call. Each handler re-arms its own
/// successor, so both timer chains stay alive for the whole run.
pub trait Scheduler {
    fn schedule(&mut self, timer: Timer, delay: Duration);
}
