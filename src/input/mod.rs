//! Input adapter: terminal events and timer deadlines.

pub mod map;
pub mod timers;

pub use map::{map_event, should_quit};
pub use timers::TimerQueue;
