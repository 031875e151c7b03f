//! Shape table - tetromino frames for every (kind, rotation) pair.
//!
//! Each entry is a 16-bit pattern of the fixed 4x4 frame, row-major with the
//! most significant bit at the frame's top-left cell. Rotation is a plain
//! table lookup; there is no runtime bit-rotation of patterns.

use crate::core::board::RowMask;
use crate::types::{Rotation, ShapeKind, FRAME_LEN};

/// Frame bit patterns, indexed by [`ShapeKind::index`] then [`Rotation::index`].
const SHAPES: [[u16; 4]; 7] = [
    // I
    [
        0b0000_1111_0000_0000,
        0b0010_0010_0010_0010,
        0b0000_0000_1111_0000,
        0b0100_0100_0100_0100,
    ],
    // O
    [
        0b1100_1100_0000_0000,
        0b1100_1100_0000_0000,
        0b1100_1100_0000_0000,
        0b1100_1100_0000_0000,
    ],
    // T
    [
        0b1110_0100_0000_0000,
        0b0010_0110_0010_0000,
        0b0000_0100_1110_0000,
        0b1000_1100_1000_0000,
    ],
    // S
    [
        0b0110_1100_0000_0000,
        0b0100_0110_0010_0000,
        0b0000_0110_1100_0000,
        0b1000_1100_0100_0000,
    ],
    // Z
    [
        0b1100_0110_0000_0000,
        0b0010_0110_0100_0000,
        0b0000_1100_0110_0000,
        0b0100_1100_1000_0000,
    ],
    // J
    [
        0b1000_1110_0000_0000,
        0b0110_0100_0100_0000,
        0b0000_1110_0010_0000,
        0b0100_0100_1100_0000,
    ],
    // L
    [
        0b1110_1000_0000_0000,
        0b0110_0010_0010_0000,
        0b0000_0010_1110_0000,
        0b1000_1000_1100_0000,
    ],
];

/// Frame bit pattern for a kind at a rotation.
pub fn shape_bits(kind: ShapeKind, rotation: Rotation) -> u16 {
    SHAPES[kind.index()][rotation.index()]
}

/// One frame row of `shape`, shifted into table-column alignment at `x`.
///
/// The returned mask lines up with a board row so overlap and merge are a
/// single AND/OR. Callers keep `x` in `[0, 63]`; positions further right are
/// rejected before alignment is attempted.
pub(crate) fn shape_row_in_table(shape: u16, row: usize, x: i8) -> RowMask {
    debug_assert!(row < FRAME_LEN);
    debug_assert!((0..64).contains(&x));
    let lifted = (shape as RowMask) << 48;
    let frame_row = (lifted << (row * FRAME_LEN)) & (0xF << 60);
    frame_row >> x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_frame_has_exactly_four_cells() {
        for kind in ShapeKind::ALL {
            for rotation in Rotation::ALL {
                let bits = shape_bits(kind, rotation);
                assert_eq!(
                    bits.count_ones(),
                    4,
                    "{:?} {:?} has {} cells",
                    kind,
                    rotation,
                    bits.count_ones()
                );
            }
        }
    }

    #[test]
    fn o_is_rotation_invariant() {
        let base = shape_bits(ShapeKind::O, Rotation::R0);
        for rotation in Rotation::ALL {
            assert_eq!(shape_bits(ShapeKind::O, rotation), base);
        }
    }

    #[test]
    fn shape_row_alignment_matches_frame_layout() {
        // Horizontal I sits in frame row 1.
        let shape = shape_bits(ShapeKind::I, Rotation::R0);
        assert_eq!(shape_row_in_table(shape, 0, 0), 0);
        assert_eq!(shape_row_in_table(shape, 1, 0), 0xF << 60);
        assert_eq!(shape_row_in_table(shape, 1, 3), 0xF << 57);
        assert_eq!(shape_row_in_table(shape, 2, 0), 0);
    }

    #[test]
    fn shape_row_at_far_right_shifts_cleanly() {
        let shape = shape_bits(ShapeKind::I, Rotation::R0);
        // Only the leading frame column survives at column 63.
        assert_eq!(shape_row_in_table(shape, 1, 63), 1);
    }
}
