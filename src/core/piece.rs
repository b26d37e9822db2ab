//! Piece module - falling block geometry and transforms
//!
//! Each piece is four unit cells at fixed offsets from a piece origin. Every
//! shape has exactly two orientation masks (spawn and turned); a spin toggles
//! between them, so two spins restore the original cell set.

use crate::types::{Orientation, ShapeKind, TileColor, BOARD_HEIGHT, BOARD_WIDTH};

/// Offset of a single cell relative to the piece origin
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the piece origin
pub type ShapeMask = [CellOffset; 4];

/// Spawn origin for new pieces (x, y), top-center of the board.
pub const SPAWN_POSITION: (i8, i8) = (3, 0);

/// Get the mask (cell offsets) for a shape kind and orientation
pub fn shape_mask(kind: ShapeKind, orientation: Orientation) -> ShapeMask {
    use Orientation::{Spawn, Turned};
    match (kind, orientation) {
        // 4-wide bar, spawns one row below the ceiling
        (ShapeKind::Flat, Spawn) => [(0, 1), (1, 1), (2, 1), (3, 1)],
        (ShapeKind::Flat, Turned) => [(1, 1), (1, 2), (1, 3), (1, 4)],

        // 2x2 square, identical in both orientations
        (ShapeKind::Box, _) => [(1, 0), (2, 0), (1, 1), (2, 1)],

        (ShapeKind::RightZ, Spawn) => [(1, 0), (2, 0), (2, 1), (3, 1)],
        (ShapeKind::RightZ, Turned) => [(2, 0), (1, 1), (2, 1), (1, 2)],

        (ShapeKind::LeftZ, Spawn) => [(1, 0), (2, 0), (0, 1), (1, 1)],
        (ShapeKind::LeftZ, Turned) => [(0, 0), (0, 1), (1, 1), (1, 2)],

        (ShapeKind::RightL, Spawn) => [(1, 0), (1, 1), (2, 1), (3, 1)],
        (ShapeKind::RightL, Turned) => [(2, 0), (2, 1), (1, 2), (2, 2)],

        (ShapeKind::LeftL, Spawn) => [(2, 0), (0, 1), (1, 1), (2, 1)],
        (ShapeKind::LeftL, Turned) => [(0, 0), (1, 0), (1, 1), (1, 2)],

        (ShapeKind::Tee, Spawn) => [(1, 0), (0, 1), (1, 1), (2, 1)],
        (ShapeKind::Tee, Turned) => [(1, 0), (0, 1), (1, 1), (1, 2)],
    }
}

/// The currently falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: ShapeKind,
    pub color: TileColor,
    orientation: Orientation,
    /// Quarter-turn parity counter. Increments on every spin request, even
    /// ones the floor guard turns into no-ops.
    spins: u32,
    x: i8,
    y: i8,
}

impl Piece {
    /// Create a new piece at the spawn origin
    pub fn new(kind: ShapeKind, color: TileColor) -> Self {
        Self {
            kind,
            color,
            orientation: Orientation::Spawn,
            spins: 0,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// True iff the piece has undergone an odd number of spin requests.
    pub fn is_spun(&self) -> bool {
        self.spins % 2 == 1
    }

    /// The piece origin (x, y) in cell coordinates
    pub fn position(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    /// Current mask for the active orientation
    pub fn mask(&self) -> ShapeMask {
        shape_mask(self.kind, self.orientation)
    }

    /// Absolute cell coordinates of the 4 cells
    pub fn cells(&self) -> [(i8, i8); 4] {
        let mask = self.mask();
        [
            (self.x + mask[0].0, self.y + mask[0].1),
            (self.x + mask[1].0, self.y + mask[1].1),
            (self.x + mask[2].0, self.y + mask[2].1),
            (self.x + mask[3].0, self.y + mask[3].1),
        ]
    }

    /// (leftmost, rightmost, topmost, bottommost) cell indices across all 4 cells
    pub fn boundaries(&self) -> (i8, i8, i8, i8) {
        let cells = self.cells();
        let mut left = cells[0].0;
        let mut right = cells[0].0;
        let mut top = cells[0].1;
        let mut bottom = cells[0].1;
        for &(x, y) in &cells[1..] {
            left = left.min(x);
            right = right.max(x);
            top = top.min(y);
            bottom = bottom.max(y);
        }
        (left, right, top, bottom)
    }

    /// Translate one cell left if the wall allows it.
    ///
    /// Piece-local boundary check only; collision against committed cells is
    /// the board's responsibility and must be checked by the caller first.
    pub fn move_left(&mut self) -> bool {
        let (left, _, _, _) = self.boundaries();
        if left >= 1 {
            self.x -= 1;
            return true;
        }
        false
    }

    /// Translate one cell right if the wall allows it.
    ///
    /// A piece whose bottom rests on the floor refuses right slides.
    pub fn move_right(&mut self) -> bool {
        let (_, right, _, bottom) = self.boundaries();
        if right <= BOARD_WIDTH as i8 - 2 && bottom < BOARD_HEIGHT as i8 - 1 {
            self.x += 1;
            return true;
        }
        false
    }

    /// Translate one cell down if above the floor.
    pub fn move_down(&mut self) -> bool {
        let (_, _, _, bottom) = self.boundaries();
        if bottom <= BOARD_HEIGHT as i8 - 2 {
            self.y += 1;
            return true;
        }
        false
    }

    /// Toggle the orientation, snapping back inside the side walls.
    ///
    /// No-op while the bottom row rests on the floor, or if the snapped
    /// footprint would breach the floor. The parity counter increments
    /// regardless. Returns whether the occupied cell set changed.
    pub fn spin(&mut self) -> bool {
        self.spins = self.spins.wrapping_add(1);

        let (_, _, _, bottom) = self.boundaries();
        if bottom >= BOARD_HEIGHT as i8 - 1 {
            return false;
        }

        let next = self.orientation.toggled();
        let mask = shape_mask(self.kind, next);

        let mut left = self.x + mask[0].0;
        let mut right = left;
        let mut low = self.y + mask[0].1;
        for &(mx, my) in &mask[1..] {
            left = left.min(self.x + mx);
            right = right.max(self.x + mx);
            low = low.max(self.y + my);
        }

        // Snap back between the walls. A piece is at most 4 cells wide, so
        // only one wall can be breached at a time.
        let dx = if left < 0 {
            -left
        } else if right > BOARD_WIDTH as i8 - 1 {
            BOARD_WIDTH as i8 - 1 - right
        } else {
            0
        };

        if low > BOARD_HEIGHT as i8 - 1 {
            return false;
        }

        self.orientation = next;
        self.x += dx;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ALL_SHAPES;
    use std::collections::BTreeSet;

    fn cell_set(piece: &Piece) -> BTreeSet<(i8, i8)> {
        piece.cells().iter().copied().collect()
    }

    #[test]
    fn test_every_shape_spawns_with_four_distinct_cells() {
        for kind in ALL_SHAPES {
            let piece = Piece::new(kind, TileColor::Red);
            let cells = cell_set(&piece);
            assert_eq!(cells.len(), 4, "{:?} has duplicate cells", kind);
            for &(x, y) in &cells {
                assert!(x >= 0 && x < BOARD_WIDTH as i8, "{:?} x out of range", kind);
                assert!(y >= 0 && y < BOARD_HEIGHT as i8, "{:?} y out of range", kind);
            }
        }
    }

    #[test]
    fn test_turned_masks_have_four_distinct_cells() {
        for kind in ALL_SHAPES {
            let mask = shape_mask(kind, Orientation::Turned);
            let set: BTreeSet<CellOffset> = mask.iter().copied().collect();
            assert_eq!(set.len(), 4, "{:?} turned mask has duplicates", kind);
        }
    }

    #[test]
    fn test_spawn_footprints() {
        let expect = |kind, cells: [(i8, i8); 4]| {
            let piece = Piece::new(kind, TileColor::Blue);
            let got = cell_set(&piece);
            let want: BTreeSet<(i8, i8)> = cells.iter().copied().collect();
            assert_eq!(got, want, "{:?} spawn footprint", kind);
        };

        expect(ShapeKind::Flat, [(3, 1), (4, 1), (5, 1), (6, 1)]);
        expect(ShapeKind::Box, [(4, 0), (5, 0), (4, 1), (5, 1)]);
        expect(ShapeKind::RightZ, [(4, 0), (5, 0), (5, 1), (6, 1)]);
        expect(ShapeKind::LeftZ, [(4, 0), (5, 0), (3, 1), (4, 1)]);
        expect(ShapeKind::RightL, [(4, 0), (4, 1), (5, 1), (6, 1)]);
        expect(ShapeKind::LeftL, [(5, 0), (3, 1), (4, 1), (5, 1)]);
        expect(ShapeKind::Tee, [(4, 0), (3, 1), (4, 1), (5, 1)]);
    }

    #[test]
    fn test_boundaries() {
        let piece = Piece::new(ShapeKind::Flat, TileColor::Red);
        assert_eq!(piece.boundaries(), (3, 6, 1, 1));

        let piece = Piece::new(ShapeKind::Tee, TileColor::Red);
        assert_eq!(piece.boundaries(), (3, 5, 0, 1));
    }

    #[test]
    fn test_two_spins_restore_cell_set() {
        for kind in ALL_SHAPES {
            let mut piece = Piece::new(kind, TileColor::Yellow);
            // Middle of the board, away from walls and floor.
            for _ in 0..8 {
                piece.move_down();
            }
            let before = cell_set(&piece);

            piece.spin();
            piece.spin();

            assert_eq!(cell_set(&piece), before, "{:?} double spin drifted", kind);
            assert!(!piece.is_spun());
        }
    }

    #[test]
    fn test_move_left_then_right_is_identity() {
        for kind in ALL_SHAPES {
            let mut piece = Piece::new(kind, TileColor::Red);
            let before = cell_set(&piece);
            assert!(piece.move_left());
            assert!(piece.move_right());
            assert_eq!(cell_set(&piece), before, "{:?}", kind);

            assert!(piece.move_right());
            assert!(piece.move_left());
            assert_eq!(cell_set(&piece), before, "{:?}", kind);
        }
    }

    #[test]
    fn test_moves_stop_at_walls() {
        let mut piece = Piece::new(ShapeKind::Box, TileColor::Red);
        let mut lefts = 0;
        while piece.move_left() {
            lefts += 1;
        }
        assert_eq!(lefts, 4);
        assert_eq!(piece.boundaries().0, 0);

        let mut rights = 0;
        while piece.move_right() {
            rights += 1;
        }
        assert_eq!(rights, 8);
        assert_eq!(piece.boundaries().1, BOARD_WIDTH as i8 - 1);
    }

    #[test]
    fn test_move_down_stops_at_floor() {
        let mut piece = Piece::new(ShapeKind::Tee, TileColor::Blue);
        while piece.move_down() {}
        assert_eq!(piece.boundaries().3, BOARD_HEIGHT as i8 - 1);
        assert!(!piece.move_down());
    }

    #[test]
    fn test_right_slide_refused_on_floor() {
        let mut piece = Piece::new(ShapeKind::Box, TileColor::Red);
        while piece.move_down() {}
        assert!(!piece.move_right());
        assert!(piece.move_left());
    }

    #[test]
    fn test_spin_on_floor_is_noop_but_counts_parity() {
        let mut piece = Piece::new(ShapeKind::Tee, TileColor::Red);
        while piece.move_down() {}
        let before = cell_set(&piece);

        assert!(!piece.spin());
        assert_eq!(cell_set(&piece), before);
        assert!(piece.is_spun());
        assert_eq!(piece.orientation(), Orientation::Spawn);
    }

    #[test]
    fn test_spin_near_floor_without_room_is_noop() {
        // A flat bar two rows above the floor cannot stand upright.
        let mut piece = Piece::new(ShapeKind::Flat, TileColor::Red);
        while piece.boundaries().3 < BOARD_HEIGHT as i8 - 2 {
            piece.move_down();
        }
        let before = cell_set(&piece);
        assert!(!piece.spin());
        assert_eq!(cell_set(&piece), before);
        assert!(piece.is_spun());
    }

    #[test]
    fn test_spin_snaps_inside_right_wall() {
        // Turned flat against the right wall spins into a horizontal bar that
        // must be pulled back inside the board.
        let mut piece = Piece::new(ShapeKind::Flat, TileColor::Red);
        for _ in 0..4 {
            piece.move_down();
        }
        assert!(piece.spin());
        while piece.move_right() {}
        assert!(piece.spin());

        let (left, right, _, _) = piece.boundaries();
        assert!(left >= 0);
        assert_eq!(right, BOARD_WIDTH as i8 - 1);
        assert_eq!(piece.orientation(), Orientation::Spawn);
    }

    #[test]
    fn test_spin_snaps_inside_left_wall() {
        let mut piece = Piece::new(ShapeKind::LeftZ, TileColor::Red);
        for _ in 0..4 {
            piece.move_down();
        }
        while piece.move_left() {}
        assert!(piece.spin());
        let (left, right, _, _) = piece.boundaries();
        assert!(left >= 0);
        assert!(right < BOARD_WIDTH as i8);
    }

    #[test]
    fn test_box_spin_keeps_footprint() {
        let mut piece = Piece::new(ShapeKind::Box, TileColor::Yellow);
        for _ in 0..5 {
            piece.move_down();
        }
        let before = cell_set(&piece);
        assert!(piece.spin());
        assert_eq!(cell_set(&piece), before);
        assert_eq!(piece.orientation(), Orientation::Turned);
    }
}
