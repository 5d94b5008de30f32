//! Simulation module - rockets, particles, and the fixed-rate step
//!
//! Owns the authoritative animation state: what is flying, where the
//! pointer is, and whether the run is ending. All randomness flows through
//! the embedded RNG, so a seed plus an input sequence replays identically.
//! Timers are requested through the `Scheduler` seam; this module never
//! touches a clock, the terminal, or any other I/O.

use std::f64::consts::TAU;
use std::time::Duration;

use arrayvec::ArrayVec;

use crate::core::rng::SimpleRng;
use crate::core::sched::Scheduler;
use crate::core::snapshot::SimSnapshot;
use crate::types::*;

/// Ascending rocket on integer grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rocket {
    pub x: i32,
    pub y: i32,
    /// Cells per tick, negative is up.
    pub vy: f64,
    pub glyph: char,
    pub color: Rgb,
}

/// Burst fragment with continuous position and velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Remaining ticks; the particle is removed when this reaches zero.
    pub lifespan: i32,
    pub glyph: char,
    pub color: Rgb,
}

/// Complete animation state
#[derive(Debug, Clone)]
pub struct Sim {
    width: u16,
    height: u16,
    rockets: Vec<Rocket>,
    particles: Vec<Particle>,
    /// Last reported pointer cell (None until the first mouse event).
    pointer: Option<(u16, u16)>,
    quitting: bool,
    rng: SimpleRng,
    palette: Vec<Rgb>,
}

impl Sim {
    /// Create a new simulation with the given RNG seed and the stock palette.
    pub fn new(seed: u32) -> Self {
        Self::with_palette(seed, DEFAULT_PALETTE.to_vec())
    }

    /// Create a simulation with an explicit launch palette (must be non-empty).
    pub fn with_palette(seed: u32, palette: Vec<Rgb>) -> Self {
        debug_assert!(!palette.is_empty(), "palette must be non-empty");
        Self {
            width: 0,
            height: 0,
            rockets: Vec::new(),
            particles: Vec::new(),
            pointer: None,
            quitting: false,
            rng: SimpleRng::new(seed),
            palette,
        }
    }

    /// Arm the first animation tick and the first scheduled launch.
    pub fn start(&mut self, sched: &mut impl Scheduler) {
        sched.schedule(Timer::Tick, TICK_INTERVAL);
        let delay = self.next_spawn_delay();
        sched.schedule(Timer::Spawn, delay);
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn rockets(&self) -> &[Rocket] {
        &self.rockets
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> Option<(u16, u16)> {
        self.pointer
    }

    pub fn quitting(&self) -> bool {
        self.quitting
    }

    /// Record the terminal size.
    ///
    /// Entities keep their coordinates; the step and all launches stay
    /// inert until both dimensions are known.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Record the pointer cell; on a click, launch one rocket from the
    /// bottom row at the pointer column.
    pub fn handle_pointer(&mut self, x: u16, y: u16, clicked: bool) {
        self.pointer = Some((x, y));
        if clicked && self.has_size() {
            self.launch(i32::from(x));
        }
    }

    /// Scheduled launch: one rocket at a random column, then re-arm with a
    /// fresh random delay.
    pub fn handle_spawn_timer(&mut self, sched: &mut impl Scheduler) {
        if self.has_size() {
            let x = self.rng.next_range(u32::from(self.width)) as i32;
            self.launch(x);
        }
        let delay = self.next_spawn_delay();
        sched.schedule(Timer::Spawn, delay);
    }

    /// Fixed-rate step: explode or move every rocket, then integrate and
    /// age every particle. Always re-arms the next tick.
    pub fn advance(&mut self, sched: &mut impl Scheduler) {
        sched.schedule(Timer::Tick, TICK_INTERVAL);
        if !self.has_size() {
            return;
        }

        self.step_rockets();
        self.step_particles();
    }

    /// Flag the run as ending; the view renders the farewell frame.
    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    /// Read-only copy for the compositor.
    pub fn snapshot(&self) -> SimSnapshot {
        SimSnapshot {
            width: self.width,
            height: self.height,
            pointer: self.pointer,
            quitting: self.quitting,
            rockets: self.rockets.clone(),
            particles: self.particles.clone(),
        }
    }

    fn has_size(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    fn next_spawn_delay(&mut self) -> Duration {
        let ms = SPAWN_DELAY_MIN_MS + u64::from(self.rng.next_range(SPAWN_DELAY_RANGE_MS));
        Duration::from_millis(ms)
    }

    fn pick_color(&mut self) -> Rgb {
        let idx = self.rng.next_range(self.palette.len() as u32) as usize;
        self.palette[idx]
    }

    fn launch(&mut self, x: i32) {
        let color = self.pick_color();
        self.rockets.push(Rocket {
            x,
            y: i32::from(self.height) - 1,
            vy: ROCKET_VY,
            glyph: ROCKET_GLYPH,
            color,
        });
    }

    fn step_rockets(&mut self) {
        let rockets = std::mem::take(&mut self.rockets);
        for mut rocket in rockets {
            if self.should_explode(&rocket) {
                let batch = burst(&mut self.rng, &rocket);
                self.particles.extend(batch);
            } else {
                // Truncating add: a -1.5 rocket climbs one row per tick.
                rocket.y += rocket.vy as i32;
                self.rockets.push(rocket);
            }
        }
    }

    /// Above the top-third line a rocket always explodes; between there and
    /// the two-thirds line it explodes with `EXPLODE_CHANCE` per tick. The
    /// short-circuit keeps the random draw confined to that band.
    fn should_explode(&mut self, rocket: &Rocket) -> bool {
        let h = i32::from(self.height);
        rocket.y < h / 3 || (rocket.y < h * 2 / 3 && self.rng.next_f64() < EXPLODE_CHANCE)
    }

    fn step_particles(&mut self) {
        self.particles.retain_mut(|p| {
            p.x += p.vx;
            p.y += p.vy;
            p.vy += GRAVITY;
            p.lifespan -= 1;
            p.lifespan > 0
        });
    }
}

/// Generate the particle burst for an exploding rocket.
///
/// Particle `i` of `n` flies at angle `2π·i/n` with a random speed in
/// `[PARTICLE_SPEED_MIN, PARTICLE_SPEED_MAX)`; the vertical component is
/// scaled by `BURST_VY_SCALE` to compensate for the terminal cell aspect
/// ratio. Lifespans are random in `[LIFESPAN_MIN, LIFESPAN_MAX)` ticks.
pub fn burst(rng: &mut SimpleRng, rocket: &Rocket) -> ArrayVec<Particle, BURST_MAX> {
    let count = BURST_MIN + rng.next_range((BURST_MAX - BURST_MIN + 1) as u32) as usize;
    let mut particles = ArrayVec::new();

    for i in 0..count {
        let angle = TAU / count as f64 * i as f64;
        let speed =
            PARTICLE_SPEED_MIN + rng.next_f64() * (PARTICLE_SPEED_MAX - PARTICLE_SPEED_MIN);
        let lifespan = LIFESPAN_MIN + rng.next_range((LIFESPAN_MAX - LIFESPAN_MIN) as u32) as i32;
        particles.push(Particle {
            x: f64::from(rocket.x),
            y: f64::from(rocket.y),
            vx: angle.cos() * speed,
            vy: angle.sin() * speed * BURST_VY_SCALE,
            lifespan,
            glyph: PARTICLE_GLYPH,
            color: rocket.color,
        });
    }

    particles
}
