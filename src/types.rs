//! Core types shared across the crate.
//! This module contains pure data types with no external dependencies.

/// Wall thickness around the playable area, in cells.
///
/// Two cells on every side lets a 4x4 shape frame hang partially over the
/// playable edge while its occupied cells still collide with real wall bits.
pub const WALL_THICKNESS: usize = 2;

/// Side length of the fixed frame every tetromino shape is defined within.
pub const FRAME_LEN: usize = 4;

/// Playable dimensions used when none are given on the command line.
pub const DEFAULT_PLAYABLE_WIDTH: u8 = 12;
pub const DEFAULT_PLAYABLE_HEIGHT: u8 = 16;

/// Supported playable dimension range (inclusive).
pub const MIN_PLAYABLE: u8 = 4;
pub const MAX_PLAYABLE: u8 = 60;

/// Largest possible table height: max playable height plus both walls.
pub const MAX_TABLE_HEIGHT: usize = MAX_PLAYABLE as usize + 2 * WALL_THICKNESS;

/// Game timing constants (in milliseconds).
pub const TICK_MS: u32 = 16;
pub const DEFAULT_FALL_MS: u32 = 600;
pub const SOFT_DROP_FALL_MS: u32 = 80;

/// How long a soft-drop key press counts as "held" when the terminal emits
/// no release events.
pub const SOFT_DROP_RELEASE_MS: u32 = 150;

/// Flat per-line score award. No combo or level multipliers.
pub const POINTS_PER_LINE: u32 = 10;

/// Tetromino shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// All kinds, in shape-table order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Row index into the shape table.
    pub fn index(&self) -> usize {
        match self {
            ShapeKind::I => 0,
            ShapeKind::O => 1,
            ShapeKind::T => 2,
            ShapeKind::S => 3,
            ShapeKind::Z => 4,
            ShapeKind::J => 5,
            ShapeKind::L => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::O => "O",
            ShapeKind::T => "T",
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
            ShapeKind::J => "J",
            ShapeKind::L => "L",
        }
    }
}

/// Rotation states (`R0` = spawn orientation, stepping clockwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// All rotations, in shape-table column order.
    pub const ALL: [Rotation; 4] = [
        Rotation::R0,
        Rotation::R90,
        Rotation::R180,
        Rotation::R270,
    ];

    /// Column index into the shape table.
    pub fn index(&self) -> usize {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }

    /// Rotate clockwise by a quarter turn.
    pub fn cw(&self) -> Self {
        match self {
            Rotation::R0 => Rotation::R90,
            Rotation::R90 => Rotation::R180,
            Rotation::R180 => Rotation::R270,
            Rotation::R270 => Rotation::R0,
        }
    }

    /// Rotate counter-clockwise by a quarter turn.
    pub fn ccw(&self) -> Self {
        match self {
            Rotation::R0 => Rotation::R270,
            Rotation::R270 => Rotation::R180,
            Rotation::R180 => Rotation::R90,
            Rotation::R90 => Rotation::R0,
        }
    }

    /// Step by `delta` quarter turns, wrapping in both directions.
    ///
    /// `turned(0)` always returns the rotation unchanged. Reduced
    /// modulo 4 up front, so any `i8` delta is accepted.
    pub fn turned(&self, delta: i8) -> Self {
        let mut r = *self;
        for _ in 0..delta.rem_euclid(4) {
            r = r.cw();
        }
        r
    }
}

/// Discrete input intents the driver feeds into the game.
///
/// Soft drop is not an action: it is a held flag that shortens the fall
/// interval (see `GameState::set_soft_drop`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    RotateCw,
    RotateCcw,
    Pause,
    Restart,
}
