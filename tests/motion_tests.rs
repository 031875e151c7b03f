//! Motion tests - collision authority, translation symmetry, pure failures.

use bitfall::core::{can_move, overlaps, shape_bits, try_move, Board, GridConfig, Piece};
use bitfall::types::{Rotation, ShapeKind, WALL_THICKNESS};

fn board() -> Board {
    Board::new(GridConfig::default())
}

#[test]
fn overlap_is_translation_symmetric() {
    // One filled cell against a shape: shifting both the obstacle and the
    // probe position by the same delta preserves the result.
    let config = GridConfig::default();
    let shape = shape_bits(ShapeKind::T, Rotation::R0);

    for (dx, dy) in [(0usize, 0usize), (1, 0), (0, 1), (3, 2), (5, 4)] {
        let mut a = Board::new(config);
        a.fill_cell(4, 5);
        let mut b = Board::new(config);
        b.fill_cell(4 + dx, 5 + dy);

        // Ranges chosen so the shifted frame never reaches a wall: the
        // property is about cell overlap, not wall proximity.
        for x in 2..7i8 {
            for y in 2..8i8 {
                assert_eq!(
                    overlaps(&a, shape, x, y),
                    overlaps(&b, shape, x + dx as i8, y + dy as i8),
                    "delta ({dx}, {dy}) at ({x}, {y})"
                );
            }
        }
    }
}

#[test]
fn committed_piece_overlaps_its_own_position() {
    let mut board = board();
    for kind in ShapeKind::ALL {
        for rotation in Rotation::ALL {
            board.reset();
            let piece = Piece::spawn(kind, rotation, board.config());
            assert!(!overlaps(&board, piece.shape(), piece.x, piece.y));

            board.merge_shape(piece.shape(), piece.x, piece.y);
            assert!(
                overlaps(&board, piece.shape(), piece.x, piece.y),
                "{kind:?} {rotation:?} should collide with its own cells"
            );
        }
    }
}

#[test]
fn try_move_failure_has_no_side_effects() {
    let board = board();
    let mut piece = Piece::spawn(ShapeKind::I, Rotation::R90, board.config());

    // Walk into the left wall until refused.
    while let Some(p) = try_move(&board, &piece, -1, 0, 0) {
        piece = p;
    }
    let board_before = board.clone();
    let piece_before = piece;

    assert!(try_move(&board, &piece, -1, 0, 0).is_none());
    assert_eq!(board, board_before);
    assert_eq!(piece, piece_before);
}

#[test]
fn success_returns_piece_with_all_deltas_applied() {
    let board = board();
    let piece = Piece::spawn(ShapeKind::T, Rotation::R0, board.config());

    let moved = try_move(&board, &piece, 1, 1, 1).expect("open space near spawn");
    assert_eq!(moved.x, piece.x + 1);
    assert_eq!(moved.y, piece.y + 1);
    assert_eq!(moved.rotation, piece.rotation.cw());
}

#[test]
fn walls_stop_horizontal_travel_at_the_playable_edge() {
    let board = board();
    let mut piece = Piece::spawn(ShapeKind::O, Rotation::R0, board.config());

    while let Some(p) = try_move(&board, &piece, 1, 0, 0) {
        piece = p;
    }
    // O occupies frame columns 0-1; its right cell touches the right wall.
    let rightmost_col = piece.x as usize + 1;
    assert_eq!(
        rightmost_col,
        WALL_THICKNESS + board.config().width() - 1
    );
}

#[test]
fn floor_stops_descent_on_an_empty_board() {
    let board = board();
    let mut piece = Piece::spawn(ShapeKind::O, Rotation::R0, board.config());

    while let Some(p) = try_move(&board, &piece, 0, 1, 0) {
        piece = p;
    }
    // O occupies frame rows 0-1; its bottom cell rests on the floor.
    let bottom_row = piece.y as usize + 1;
    assert_eq!(
        bottom_row,
        board.config().table_height() - WALL_THICKNESS - 1
    );
    assert!(!can_move(&board, &piece, 0, 1, 0));
}

#[test]
fn rotation_against_obstruction_is_refused() {
    let mut board = board();
    // Vertical I in a one-cell-wide channel: fill both neighbor columns.
    let piece = Piece::spawn(ShapeKind::I, Rotation::R90, board.config());
    let col = piece.x as usize + 2; // occupied frame column of I at R90
    for y in WALL_THICKNESS..board.config().table_height() - WALL_THICKNESS {
        for x in WALL_THICKNESS..WALL_THICKNESS + board.config().width() {
            if x != col {
                board.fill_cell(x, y);
            }
        }
    }
    assert!(!can_move(&board, &piece, 0, 0, 1));
    assert!(!can_move(&board, &piece, 0, 0, -1));
    // Straight down the channel still works.
    assert!(can_move(&board, &piece, 0, 1, 0));
}
