//! bitfall - a falling-block puzzle game on bit-packed row masks.
//!
//! The simulation lives in [`core`]: a grid of `u64` row bitmasks with a
//! permanent wall border, tetromino frames as 16-bit patterns, pure
//! collision/motion checks and a small orchestrating [`core::GameState`].
//! [`input`] and [`term`] are the terminal glue around it.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
