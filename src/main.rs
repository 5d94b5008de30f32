//! Terminal fireworks runner.
//!
//! Wires crossterm events and timer deadlines to the simulation and
//! flushes composed frames through the diff renderer.

use std::process;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::{event, terminal};

use tui_fireworks::core::Sim;
use tui_fireworks::input::{map_event, TimerQueue};
use tui_fireworks::term::{view, TerminalRenderer};
use tui_fireworks::types::{InputEvent, Timer, TICK_INTERVAL};

fn main() {
    if let Err(err) = run_app() {
        eprintln!("Kaboom, there's been an error: {err:#}");
        process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let restore = term.exit();
    result.and(restore)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut sim = Sim::new(clock_seed());
    let mut timers = TimerQueue::new();

    let (width, height) = terminal::size()?;
    sim.handle_resize(width, height);
    sim.start(&mut timers);

    loop {
        let fb = view::render(&sim.snapshot());
        term.draw(fb)?;

        // The farewell frame above is the last thing shown.
        if sim.quitting() {
            return Ok(());
        }

        // Input with timeout until the next timer deadline.
        let timeout = timers
            .next_deadline()
            .map(|at| at.saturating_duration_since(Instant::now()))
            .unwrap_or(TICK_INTERVAL);

        if event::poll(timeout)? {
            match map_event(event::read()?) {
                Some(InputEvent::Quit) => sim.request_quit(),
                Some(InputEvent::Resize { width, height }) => {
                    sim.handle_resize(width, height);
                    term.invalidate();
                }
                Some(InputEvent::Pointer { x, y, clicked }) => sim.handle_pointer(x, y, clicked),
                None => {}
            }
        }

        let now = Instant::now();
        while let Some(timer) = timers.pop_due(now) {
            match timer {
                Timer::Tick => sim.advance(&mut timers),
                Timer::Spawn => sim.handle_spawn_timer(&mut timers),
            }
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}
