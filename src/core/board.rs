//! Board module - the bit-packed game grid.
//!
//! Each table row is one `u64` bitmask, bit 63 = leftmost table column.
//! The playable area is surrounded on all four sides by permanently set
//! wall bits, so boundary collision is ordinary bitwise overlap.
//! Row storage is a fixed-capacity `ArrayVec`; no allocation after creation.

use arrayvec::ArrayVec;

use crate::core::config::GridConfig;
use crate::core::shapes::shape_row_in_table;
use crate::types::{FRAME_LEN, MAX_TABLE_HEIGHT, WALL_THICKNESS};

/// One table row as a left-aligned bitmask.
pub type RowMask = u64;

/// Bitmask of table column 0.
pub const LEFTMOST_BIT: RowMask = 1 << 63;

/// The game grid: wall border plus playable interior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: ArrayVec<RowMask, MAX_TABLE_HEIGHT>,
    config: GridConfig,
    /// Interior clear, wall bits set.
    empty_row: RowMask,
    /// Interior bits only; a row is full when all of these are set.
    full_line: RowMask,
}

impl Board {
    /// Build a board in the clean reset state for the given dimensions.
    pub fn new(config: GridConfig) -> Self {
        // All bits outside the interior count as wall: the two left columns,
        // and everything from the right wall to bit 0.
        let empty_row = (RowMask::MAX >> (config.width() + WALL_THICKNESS))
            | (RowMask::MAX << (64 - WALL_THICKNESS));
        let mut board = Self {
            rows: ArrayVec::new(),
            config,
            empty_row,
            full_line: !empty_row,
        };
        for _ in 0..config.table_height() {
            board.rows.push(0);
        }
        board.reset();
        board
    }

    /// Rewrite every row to the wall/empty invariant. No allocation.
    pub fn reset(&mut self) {
        let table_height = self.config.table_height();
        for y in 0..table_height {
            self.rows[y] = if y < WALL_THICKNESS || y >= table_height - WALL_THICKNESS {
                RowMask::MAX
            } else {
                self.empty_row
            };
        }
    }

    pub fn config(&self) -> GridConfig {
        self.config
    }

    /// Row mask at absolute table index `y` (0 = topmost border row).
    ///
    /// Rows outside the table read as solid, so collision checks stay total.
    pub fn row(&self, y: usize) -> RowMask {
        self.rows.get(y).copied().unwrap_or(RowMask::MAX)
    }

    /// All table rows, top to bottom. Read-only snapshot for rendering.
    pub fn rows(&self) -> &[RowMask] {
        &self.rows
    }

    /// Mask with only the interior (playable) bits set.
    pub fn full_line_mask(&self) -> RowMask {
        self.full_line
    }

    /// Mask of a row with no filled interior cells.
    pub fn empty_row_mask(&self) -> RowMask {
        self.empty_row
    }

    /// Whether the interior bits of row `y` are all set.
    pub fn is_line_full(&self, y: usize) -> bool {
        self.row(y) & self.full_line == self.full_line
    }

    /// Whether the cell at table coordinates (`x`, `y`) is filled.
    ///
    /// Wall cells and out-of-table coordinates read as filled.
    pub fn cell(&self, x: usize, y: usize) -> bool {
        if x >= 64 {
            return true;
        }
        self.row(y) & (LEFTMOST_BIT >> x) != 0
    }

    /// Permanently fill one interior cell. Scenario setup for drivers and
    /// tests; gameplay fills cells through `merge_shape`.
    pub fn fill_cell(&mut self, x: usize, y: usize) {
        debug_assert!(
            (WALL_THICKNESS..self.config.table_width() - WALL_THICKNESS).contains(&x)
                && (WALL_THICKNESS..self.config.table_height() - WALL_THICKNESS).contains(&y),
            "fill_cell outside playable area: ({x}, {y})"
        );
        if let Some(row) = self.rows.get_mut(y) {
            *row |= LEFTMOST_BIT >> x;
        }
    }

    /// OR the four frame rows of `shape` into the table at (`x`, `y`).
    ///
    /// Permanently marks those cells as filled. No bounds validation here:
    /// callers must have validated the position through the motion checks.
    pub fn merge_shape(&mut self, shape: u16, x: i8, y: i8) {
        debug_assert!((0..64).contains(&x), "merge_shape x out of range: {x}");
        for row in 0..FRAME_LEN {
            let line = shape_row_in_table(shape, row, x);
            let ty = y as isize + row as isize;
            if let Some(table_row) = usize::try_from(ty).ok().and_then(|i| self.rows.get_mut(i)) {
                *table_row |= line;
            }
        }
    }

    /// Shift every row above `y` down one position, leaving the topmost
    /// playable row empty. Border rows are never touched.
    pub(crate) fn collapse_row(&mut self, y: usize) {
        debug_assert!(
            (WALL_THICKNESS..self.config.table_height() - WALL_THICKNESS).contains(&y),
            "collapse_row outside playable area: {y}"
        );
        for t in ((WALL_THICKNESS + 1)..=y).rev() {
            self.rows[t] = self.rows[t - 1];
        }
        self.rows[WALL_THICKNESS] = self.empty_row;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shapes::shape_bits;
    use crate::types::{Rotation, ShapeKind};

    fn board_12x16() -> Board {
        Board::new(GridConfig::default())
    }

    #[test]
    fn reset_rows_satisfy_wall_invariant() {
        let board = board_12x16();
        let h = board.config().table_height();

        for y in 0..WALL_THICKNESS {
            assert_eq!(board.row(y), RowMask::MAX);
            assert_eq!(board.row(h - 1 - y), RowMask::MAX);
        }
        for y in WALL_THICKNESS..h - WALL_THICKNESS {
            assert_eq!(board.row(y), board.empty_row_mask());
            assert!(!board.is_line_full(y));
        }
    }

    #[test]
    fn rows_outside_table_read_solid() {
        let board = board_12x16();
        assert_eq!(board.row(board.config().table_height()), RowMask::MAX);
        assert_eq!(board.row(usize::MAX), RowMask::MAX);
    }

    #[test]
    fn full_and_empty_masks_partition_the_row() {
        let board = board_12x16();
        assert_eq!(board.full_line_mask() & board.empty_row_mask(), 0);
        assert_eq!(board.full_line_mask() | board.empty_row_mask(), RowMask::MAX);
        assert_eq!(
            board.full_line_mask().count_ones() as usize,
            board.config().width()
        );
    }

    #[test]
    fn merge_shape_sets_frame_cells() {
        let mut board = board_12x16();
        // O occupies the top-left 2x2 of its frame.
        board.merge_shape(shape_bits(ShapeKind::O, Rotation::R0), 5, 6);

        assert!(board.cell(5, 6));
        assert!(board.cell(6, 6));
        assert!(board.cell(5, 7));
        assert!(board.cell(6, 7));
        assert!(!board.cell(7, 6));
        assert!(!board.cell(5, 8));
    }

    #[test]
    fn merge_shape_near_bottom_border_does_not_panic() {
        let mut board = board_12x16();
        let h = board.config().table_height();
        // Frame rows 2 and 3 land past the last table row and are dropped.
        board.merge_shape(shape_bits(ShapeKind::O, Rotation::R0), 5, (h - 2) as i8);
        assert_eq!(board.row(h - 1), RowMask::MAX);
    }

    #[test]
    fn fill_cell_then_line_full() {
        let mut board = board_12x16();
        let y = board.config().table_height() - WALL_THICKNESS - 1;
        for x in WALL_THICKNESS..WALL_THICKNESS + board.config().width() {
            board.fill_cell(x, y);
        }
        assert!(board.is_line_full(y));
    }

    #[test]
    fn collapse_row_moves_rows_down_and_clears_top() {
        let mut board = board_12x16();
        let top = WALL_THICKNESS;
        board.fill_cell(4, top);
        board.fill_cell(5, top + 1);

        board.collapse_row(top + 2);

        assert_eq!(board.row(top), board.empty_row_mask());
        assert!(board.cell(4, top + 1));
        assert!(board.cell(5, top + 2));
        // Borders untouched.
        assert_eq!(board.row(0), RowMask::MAX);
        assert_eq!(board.row(1), RowMask::MAX);
    }
}
