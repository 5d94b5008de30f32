//! View: maps a `SimSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::SimSnapshot;
use crate::core::Particle;
use crate::term::fb::{CellStyle, FrameBuffer};
use crate::types::{
    Rgb, CURSOR_COLOR, FADE_BLANK_BELOW, FADE_DOT_BELOW, FADE_REFERENCE, FAREWELL_TEXT,
    LOADING_TEXT, ROCKET_GLYPH, STATUS_TEXT,
};

/// Rasterize one frame.
///
/// Cell z-order is rockets, then particles, then the pointer cursor. The
/// bottom row always carries the status caption and nothing else; the
/// cursor is suppressed there explicitly.
pub fn render(snap: &SimSnapshot) -> FrameBuffer {
    if snap.quitting {
        return message_frame(FAREWELL_TEXT);
    }
    if !snap.sized() {
        return message_frame(LOADING_TEXT);
    }

    let mut fb = FrameBuffer::new(snap.width, snap.height);

    for rocket in &snap.rockets {
        put_grid_char(&mut fb, rocket.x, rocket.y, rocket.glyph, rocket.color);
    }

    for p in &snap.particles {
        put_grid_char(&mut fb, p.x as i32, p.y as i32, particle_glyph(p), p.color);
    }

    if let Some((x, y)) = snap.pointer {
        // Drawn last so it sits on top of anything else in the cell.
        if y < snap.height - 1 {
            let style = CellStyle {
                fg: CURSOR_COLOR,
                dim: false,
            };
            fb.put_char(x, y, ROCKET_GLYPH, style);
        }
    }

    // The caption owns the entire bottom row; entities that fell there are
    // covered over.
    let caption = CellStyle {
        dim: true,
        ..CellStyle::default()
    };
    let caption_y = snap.height - 1;
    for x in 0..snap.width {
        fb.put_char(x, caption_y, ' ', caption);
    }
    fb.put_str(0, caption_y, STATUS_TEXT, caption);

    fb
}

/// Single-row frame holding exactly `text`.
fn message_frame(text: &str) -> FrameBuffer {
    let width = text.chars().count() as u16;
    let mut fb = FrameBuffer::new(width, 1);
    fb.put_str(0, 0, text, CellStyle::default());
    fb
}

/// Particles dim with age: dots below half of the fade reference, blank
/// just before expiry (still present in state, no longer visible).
fn particle_glyph(p: &Particle) -> char {
    let fade = f64::from(p.lifespan) / FADE_REFERENCE;
    if fade < FADE_BLANK_BELOW {
        ' '
    } else if fade < FADE_DOT_BELOW {
        '.'
    } else {
        p.glyph
    }
}

fn put_grid_char(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: Rgb) {
    let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
        return;
    };
    fb.put_char(x, y, ch, CellStyle { fg: color, dim: false });
}
