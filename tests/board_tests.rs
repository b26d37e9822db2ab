//! Board tests - occupancy, collision queries and the clear cascade

use blockfall::core::{Board, Piece};
use blockfall::types::{ShapeKind, TileColor, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.score(), 0);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(TileColor::Red)));
    assert_eq!(board.get(5, 10), Some(Some(TileColor::Red)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(-1, 0, Some(TileColor::Blue)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(TileColor::Blue)));
}

#[test]
fn test_commit_writes_piece_cells() {
    let mut board = Board::new();
    let piece = Piece::new(ShapeKind::Box, TileColor::Yellow);
    let cells = piece.cells();

    board.commit(piece);
    for (x, y) in cells {
        assert_eq!(board.get(x, y), Some(Some(TileColor::Yellow)));
    }
}

#[test]
fn test_base_blocked_on_floor_every_column() {
    let board = Board::new();
    // A box resting on the floor is base-blocked at every reachable column.
    for shift in 0..BOARD_WIDTH {
        let mut piece = Piece::new(ShapeKind::Box, TileColor::Red);
        while piece.move_down() {}
        for _ in 0..shift {
            piece.move_left();
        }
        assert!(board.base_blocked(&piece));
    }
}

#[test]
fn test_base_blocked_by_committed_tile() {
    let mut board = Board::new();
    let piece = Piece::new(ShapeKind::Box, TileColor::Red);
    // Box at spawn occupies (4,0)..(5,1); a tile directly below blocks it.
    assert!(!board.base_blocked(&piece));
    board.set(4, 2, Some(TileColor::Blue));
    assert!(board.base_blocked(&piece));
}

#[test]
fn test_side_blocked_by_wall_and_tile() {
    let mut board = Board::new();

    let mut piece = Piece::new(ShapeKind::Box, TileColor::Red);
    while piece.move_left() {}
    assert!(board.left_blocked(&piece));
    while piece.move_right() {}
    assert!(board.right_blocked(&piece));

    let piece = Piece::new(ShapeKind::Box, TileColor::Red);
    assert!(!board.left_blocked(&piece));
    assert!(!board.right_blocked(&piece));
    board.set(3, 1, Some(TileColor::Blue));
    assert!(board.left_blocked(&piece));
    board.set(6, 0, Some(TileColor::Blue));
    assert!(board.right_blocked(&piece));
}

#[test]
fn test_clear_single_full_row() {
    let mut board = Board::new();
    let bottom = BOARD_HEIGHT as i8 - 1;
    board.fill_row(bottom, TileColor::Red);
    assert!(board.is_row_full(bottom as usize));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[bottom as usize]);
    assert_eq!(board.score(), 10);
    assert!(!board.is_row_full(bottom as usize));
}

#[test]
fn test_clear_cascade_reexamines_fallen_row() {
    let mut board = Board::new();
    let bottom = BOARD_HEIGHT as i8 - 1;
    board.fill_row(bottom, TileColor::Red);
    board.fill_row(bottom - 1, TileColor::Blue);
    board.set(0, bottom - 3, Some(TileColor::Yellow));

    let cleared = board.clear_full_rows();
    // Both clears report the bottom index: the second full row fell into it.
    assert_eq!(cleared.as_slice(), &[bottom as usize, bottom as usize]);
    assert_eq!(board.score(), 20);
    // The lone tile fell two rows.
    assert_eq!(board.get(0, bottom - 1), Some(Some(TileColor::Yellow)));
    assert_eq!(board.get(0, bottom - 3), Some(None));
}

#[test]
fn test_partial_row_never_clears() {
    let mut board = Board::new();
    let bottom = BOARD_HEIGHT as i8 - 1;
    board.fill_row(bottom, TileColor::Red);
    board.set(4, bottom, None);

    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board.score(), 0);
}

#[test]
fn test_top_filled() {
    let mut board = Board::new();
    assert!(!board.top_filled());
    board.set(3, 0, Some(TileColor::Red));
    assert!(board.top_filled());
}
