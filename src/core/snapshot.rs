//! Read-only snapshots of the game state for external observers.
//!
//! A renderer or recorder reads one of these per frame; it never holds a
//! borrow into the live state and never mutates anything.

use crate::core::board::RowMask;
use crate::core::motion::Piece;
use crate::core::GameState;
use crate::types::MAX_TABLE_HEIGHT;

/// Copy of everything a frame observer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Table rows, top to bottom; only the first `table_height` are live.
    pub rows: [RowMask; MAX_TABLE_HEIGHT],
    pub table_width: usize,
    pub table_height: usize,
    pub piece: Piece,
    pub score_current: u32,
    pub score_highest: u32,
    pub paused: bool,
}

impl GameState {
    /// Fill `out` with the current frame's state. Zero allocation, so a
    /// driver can reuse one snapshot across frames.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let rows = self.board().rows();
        out.rows[..rows.len()].copy_from_slice(rows);
        out.rows[rows.len()..].fill(RowMask::MAX);
        out.table_width = self.board().config().table_width();
        out.table_height = self.board().config().table_height();
        out.piece = self.piece();
        out.score_current = self.score_current();
        out.score_highest = self.score_highest();
        out.paused = self.paused();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot {
            rows: [RowMask::MAX; MAX_TABLE_HEIGHT],
            table_width: 0,
            table_height: 0,
            piece: self.piece(),
            score_current: 0,
            score_highest: 0,
            paused: false,
        };
        self.snapshot_into(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GridConfig;

    #[test]
    fn snapshot_matches_live_state() {
        let state = GameState::new(GridConfig::default(), 9);
        let snap = state.snapshot();

        assert_eq!(snap.table_height, 20);
        assert_eq!(snap.table_width, 16);
        assert_eq!(&snap.rows[..20], state.board().rows());
        assert_eq!(snap.piece, state.piece());
        assert!(!snap.paused);
    }

    #[test]
    fn snapshot_into_reuses_buffer() {
        let mut state = GameState::new(GridConfig::default(), 9);
        let mut snap = state.snapshot();

        state.natural_fall();
        state.snapshot_into(&mut snap);
        assert_eq!(snap.piece, state.piece());
    }
}
