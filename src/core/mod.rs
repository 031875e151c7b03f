//! Core module - pure simulation with no I/O dependencies.
//!
//! Everything in here is deterministic and synchronous: the same seed and
//! the same intent sequence replay the same game. Rendering, input and
//! timing live outside and only call in through `GameState`.

pub mod board;
pub mod config;
pub mod game_state;
pub mod lines;
pub mod motion;
pub mod rng;
pub mod shapes;
pub mod snapshot;

// Re-export commonly used types
pub use board::{Board, RowMask};
pub use config::{ConfigError, GridConfig};
pub use game_state::GameState;
pub use lines::clear_full_lines;
pub use motion::{can_move, overlaps, try_move, Piece};
pub use rng::SimpleRng;
pub use shapes::shape_bits;
pub use snapshot::GameSnapshot;
