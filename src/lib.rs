//! Terminal fireworks.
//!
//! Mouse clicks and a randomly delayed timer launch rockets that rise and
//! burst into decaying particle showers at a fixed 15 Hz step. `core` is
//! pure and replayable from a seed; `term` rasterizes snapshots and talks
//! to the terminal; `input` adapts crossterm events and timer deadlines.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
