//! Terminal rendering module.
//!
//! Renders into a simple framebuffer that is flushed to the terminal each
//! frame. `GameView` stays pure so it can be unit-tested; only
//! `TerminalRenderer` touches stdout.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
