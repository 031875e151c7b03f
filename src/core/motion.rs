//! Motion engine - validates and applies piece translations and rotations.
//!
//! `overlaps` is the sole collision authority: walls are permanently set
//! bits, so boundary enforcement is the same AND as colliding with committed
//! cells. The explicit coordinate check in `can_move` only keeps shift
//! amounts in range; it never substitutes for the overlap test.

use crate::core::board::Board;
use crate::core::config::GridConfig;
use crate::core::shapes::{shape_bits, shape_row_in_table};
use crate::types::{Rotation, ShapeKind, FRAME_LEN};

/// The active falling shape: identity plus the frame's top-left position in
/// table coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// A freshly spawned piece: centered horizontally, at the top inset.
    pub fn spawn(kind: ShapeKind, rotation: Rotation, config: GridConfig) -> Self {
        Self {
            kind,
            rotation,
            x: config.spawn_x(),
            y: config.spawn_y(),
        }
    }

    /// Frame bit pattern for the current rotation.
    pub fn shape(&self) -> u16 {
        shape_bits(self.kind, self.rotation)
    }

    /// The piece after a translation and/or quarter-turn, unconditionally.
    ///
    /// Only call after `can_move` accepted the same deltas. Returned by
    /// value, so callers swap in the whole new piece at once.
    pub fn moved(&self, dx: i8, dy: i8, drot: i8) -> Self {
        Self {
            kind: self.kind,
            rotation: self.rotation.turned(drot),
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Whether `shape` at frame position (`x`, `y`) intersects any set board bit.
///
/// Positions left of the table or right of column 63 count as overlapping,
/// as do frame rows with occupied cells below the last table row.
pub fn overlaps(board: &Board, shape: u16, x: i8, y: i8) -> bool {
    if !(0..64).contains(&x) {
        return true;
    }
    for row in 0..FRAME_LEN {
        let line = shape_row_in_table(shape, row, x);
        let ty = y as isize + row as isize;
        let table_line = if ty < 0 {
            u64::MAX
        } else {
            board.row(ty as usize)
        };
        if line & table_line != 0 {
            return true;
        }
    }
    false
}

/// Whether the piece may move by (`dx`, `dy`) and turn by `drot` quarter
/// turns. Pure; mutates nothing.
pub fn can_move(board: &Board, piece: &Piece, dx: i8, dy: i8, drot: i8) -> bool {
    let shape = if drot != 0 {
        shape_bits(piece.kind, piece.rotation.turned(drot))
    } else {
        piece.shape()
    };
    let x = piece.x + dx;
    let y = piece.y + dy;

    // Loose inclusive bound, carried from the reference behavior. The walls
    // do the real boundary enforcement in `overlaps`; this keeps candidate
    // coordinates inside shiftable range.
    let config = board.config();
    if x < 0 || x as usize > config.table_width() {
        return false;
    }
    if y < 0 || y as usize > config.table_height() {
        return false;
    }

    !overlaps(board, shape, x, y)
}

/// Validate and produce the moved piece. `None` on an illegal move, with no
/// side effects: rejected moves are an ordinary outcome, not an error.
pub fn try_move(board: &Board, piece: &Piece, dx: i8, dy: i8, drot: i8) -> Option<Piece> {
    if can_move(board, piece, dx, dy, drot) {
        Some(piece.moved(dx, dy, drot))
    } else {
        None
    }
}
