//! Line clearing - full-row detection and downward compaction.

use crate::core::board::Board;
use crate::types::WALL_THICKNESS;

/// Clear every full playable row and compact the grid. Returns the number of
/// rows cleared; the caller converts that into score.
///
/// The scan runs from the bottom playable row upward and restarts from the
/// bottom after every collapse: shifting rows down changes which row indices
/// are full, and continuing upward would skip a row that just became full.
pub fn clear_full_lines(board: &mut Board) -> u32 {
    let top = WALL_THICKNESS;
    let bottom = board.config().table_height() - WALL_THICKNESS - 1;

    let mut cleared = 0;
    let mut y = bottom;
    while y >= top {
        if board.is_line_full(y) {
            board.collapse_row(y);
            cleared += 1;
            y = bottom;
        } else {
            y -= 1;
        }
    }
    cleared
}
