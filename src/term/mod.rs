//! Terminal rendering module.
//!
//! Rasterizes simulation snapshots into a simple framebuffer and flushes
//! frames to a terminal backend with diff redraws.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Compose frames as pure data, do I/O only at the flush boundary

pub mod fb;
pub mod renderer;
pub mod view;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::TerminalRenderer;
