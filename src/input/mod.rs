//! Input handling - key events to discrete game intents.

pub mod handler;

pub use handler::{should_quit, InputHandler};
