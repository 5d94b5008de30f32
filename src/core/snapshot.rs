use crate::core::sim::{Particle, Rocket};

/// Read-only copy of the animation state, consumed by the compositor.
///
/// Fields are public so view tests can stage arbitrary frames without
/// replaying a simulation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimSnapshot {
    pub width: u16,
    pub height: u16,
    pub pointer: Option<(u16, u16)>,
    pub quitting: bool,
    pub rockets: Vec<Rocket>,
    pub particles: Vec<Particle>,
}

impl SimSnapshot {
    /// True once a terminal size has been reported.
    pub fn sized(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}
