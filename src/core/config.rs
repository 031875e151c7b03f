//! Grid configuration: validated playable dimensions.
//!
//! Built once at startup and passed explicitly into every component that
//! needs table dimensions. There is no process-wide board size.

use thiserror::Error;

use crate::types::{
    DEFAULT_PLAYABLE_HEIGHT, DEFAULT_PLAYABLE_WIDTH, FRAME_LEN, MAX_PLAYABLE, MIN_PLAYABLE,
    WALL_THICKNESS,
};

/// The only explicit error kind in the crate: invalid board dimensions
/// supplied at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("playable width {0} outside supported range [{MIN_PLAYABLE}, {MAX_PLAYABLE}]")]
    WidthOutOfRange(u8),
    #[error("playable height {0} outside supported range [{MIN_PLAYABLE}, {MAX_PLAYABLE}]")]
    HeightOutOfRange(u8),
}

/// Validated playable dimensions plus derived table geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    width: u8,
    height: u8,
}

impl GridConfig {
    /// Validate playable dimensions and build a config.
    pub fn new(width: u8, height: u8) -> Result<Self, ConfigError> {
        if !(MIN_PLAYABLE..=MAX_PLAYABLE).contains(&width) {
            return Err(ConfigError::WidthOutOfRange(width));
        }
        if !(MIN_PLAYABLE..=MAX_PLAYABLE).contains(&height) {
            return Err(ConfigError::HeightOutOfRange(height));
        }
        Ok(Self { width, height })
    }

    /// Playable width in cells.
    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Playable height in cells.
    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Full table width including both side walls.
    pub fn table_width(&self) -> usize {
        self.width() + 2 * WALL_THICKNESS
    }

    /// Full table height including top and bottom walls.
    pub fn table_height(&self) -> usize {
        self.height() + 2 * WALL_THICKNESS
    }

    /// Table x where a freshly spawned 4x4 frame is horizontally centered.
    pub fn spawn_x(&self) -> i8 {
        (self.table_width() / 2 - FRAME_LEN / 2) as i8
    }

    /// Table y of the topmost playable row, where new pieces spawn.
    pub fn spawn_y(&self) -> i8 {
        WALL_THICKNESS as i8
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_PLAYABLE_WIDTH,
            height: DEFAULT_PLAYABLE_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_supported_range() {
        assert!(GridConfig::new(4, 4).is_ok());
        assert!(GridConfig::new(60, 60).is_ok());
        assert!(GridConfig::new(12, 16).is_ok());
    }

    #[test]
    fn rejects_out_of_range_dimensions() {
        assert_eq!(GridConfig::new(3, 16), Err(ConfigError::WidthOutOfRange(3)));
        assert_eq!(GridConfig::new(61, 16), Err(ConfigError::WidthOutOfRange(61)));
        assert_eq!(GridConfig::new(12, 3), Err(ConfigError::HeightOutOfRange(3)));
        assert_eq!(
            GridConfig::new(12, 61),
            Err(ConfigError::HeightOutOfRange(61))
        );
    }

    #[test]
    fn derived_geometry() {
        let config = GridConfig::default();
        assert_eq!(config.table_width(), 16);
        assert_eq!(config.table_height(), 20);
        assert_eq!(config.spawn_x(), 6);
        assert_eq!(config.spawn_y(), 2);
    }
}
