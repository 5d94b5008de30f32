//! Core types shared across the application
//! This module contains pure data types with no external dependencies

use std::time::Duration;

/// Fixed animation step (15 frames per second).
pub const TICK_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / 15);

/// Scheduled launch timing: delay is `MIN + [0, RANGE)` milliseconds.
pub const SPAWN_DELAY_MIN_MS: u64 = 100;
pub const SPAWN_DELAY_RANGE_MS: u32 = 1000;

/// Rocket ascent speed in cells per tick (negative is up).
pub const ROCKET_VY: f64 = -1.5;

/// Downward pull applied to every particle each tick.
pub const GRAVITY: f64 = 0.08;

/// Chance per tick that a rocket in the middle band explodes early.
pub const EXPLODE_CHANCE: f64 = 0.1;

/// Burst size bounds (inclusive).
pub const BURST_MIN: usize = 30;
pub const BURST_MAX: usize = 49;

/// Particle speed range [min, max) in cells per tick.
pub const PARTICLE_SPEED_MIN: f64 = 1.0;
pub const PARTICLE_SPEED_MAX: f64 = 3.5;

/// Vertical burst speed scale; terminal cells are taller than wide.
pub const BURST_VY_SCALE: f64 = 0.5;

/// Particle lifespan range [min, max) in ticks.
pub const LIFESPAN_MIN: i32 = 15;
pub const LIFESPAN_MAX: i32 = 35;

/// Fade fraction is lifespan over this reference value.
pub const FADE_REFERENCE: f64 = 35.0;
pub const FADE_DOT_BELOW: f64 = 0.5;
pub const FADE_BLANK_BELOW: f64 = 0.2;

/// Display glyphs. The pointer cursor reuses the rocket glyph.
pub const ROCKET_GLYPH: char = '↑';
pub const PARTICLE_GLYPH: char = '*';

/// Status caption pinned to the bottom row.
pub const STATUS_TEXT: &str = "Click to launch a firework! Press 'q' to quit.";

/// Frame shown once a quit was requested.
pub const FAREWELL_TEXT: &str = "Bye! Thanks for watching the show.";

/// Frame shown while the terminal size is still unknown.
pub const LOADING_TEXT: &str = "Loading...";

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Launch palette (xterm-256 colors 226, 208, 196, 87, 201, 46).
pub const DEFAULT_PALETTE: [Rgb; 6] = [
    Rgb::new(255, 255, 0),   // yellow
    Rgb::new(255, 135, 0),   // orange
    Rgb::new(255, 0, 0),     // red
    Rgb::new(95, 255, 255),  // light blue
    Rgb::new(255, 0, 255),   // magenta
    Rgb::new(0, 255, 0),     // green
];

/// Pointer cursor color (xterm-256 color 255), distinct from the palette.
pub const CURSOR_COLOR: Rgb = Rgb::new(238, 238, 238);

/// Timer kinds the simulation arms through its scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Fixed-rate animation step.
    Tick,
    /// Randomly delayed automatic launch.
    Spawn,
}

/// Terminal input translated for the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Resize { width: u16, height: u16 },
    Pointer { x: u16, y: u16, clicked: bool },
}
