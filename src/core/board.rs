//! Board module - committed tiles, collision queries, and row clearing
//!
//! The board is a 10x25 grid where each cell is empty or holds a committed
//! tile. Uses a flat array for cache locality; the array doubles as the
//! per-row occupancy index (one row = one 10-cell slice).
//! Coordinates: (x, y) with x in 0..10 left to right, y in 0..25 top to bottom.

use arrayvec::ArrayVec;

use crate::core::piece::Piece;
use crate::types::{Cell, GameConfig, TileColor, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board and its running score
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
    score: u32,
    points_per_row: u32,
}

impl Board {
    /// Create a new empty board with default scoring rules
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            cells: [None; BOARD_SIZE],
            score: 0,
            points_per_row: config.points_per_row,
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Get cell at position (x, y). Returns None if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position holds a committed tile (out of bounds counts as empty)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// True iff any committed tile has reached the top row (game-over check)
    pub fn top_filled(&self) -> bool {
        self.cells[..BOARD_WIDTH as usize]
            .iter()
            .any(|cell| cell.is_some())
    }

    /// True iff the piece rests on the floor or directly on a committed tile.
    ///
    /// Grid form of the shared-edge test: a tile directly below a piece cell
    /// shares its top edge and both x-edges with that cell.
    pub fn base_blocked(&self, piece: &Piece) -> bool {
        let (_, _, _, bottom) = piece.boundaries();
        if bottom >= BOARD_HEIGHT as i8 - 1 {
            return true;
        }
        piece
            .cells()
            .iter()
            .any(|&(x, y)| self.is_occupied(x, y + 1))
    }

    /// True iff the piece touches the left wall or a committed tile sits
    /// directly to the left of any piece cell (same row).
    pub fn left_blocked(&self, piece: &Piece) -> bool {
        let (left, _, _, _) = piece.boundaries();
        if left <= 0 {
            return true;
        }
        piece
            .cells()
            .iter()
            .any(|&(x, y)| self.is_occupied(x - 1, y))
    }

    /// True iff the piece touches the right wall or a committed tile sits
    /// directly to the right of any piece cell (same row).
    pub fn right_blocked(&self, piece: &Piece) -> bool {
        let (_, right, _, _) = piece.boundaries();
        if right >= BOARD_WIDTH as i8 - 1 {
            return true;
        }
        piece
            .cells()
            .iter()
            .any(|&(x, y)| self.is_occupied(x + 1, y))
    }

    /// Commit a landed piece: its 4 cells become board-owned tiles.
    ///
    /// The piece is consumed; it no longer exists as an entity afterwards.
    pub fn commit(&mut self, piece: Piece) {
        let color = piece.color;
        for (x, y) in piece.cells() {
            self.set(x, y, Some(color));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows, cascading, and award points.
    ///
    /// Scans from the bottom row upward. On a full row, every row above
    /// shifts down one cell and the same index is re-examined, so a stack of
    /// complete rows clears in one pass. Returns the indices at which clears
    /// happened (a commit of 4 cells can complete at most 4 rows).
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();
        let width = BOARD_WIDTH as usize;

        let mut y = BOARD_HEIGHT as i32 - 1;
        while y >= 0 {
            if !self.is_row_full(y as usize) {
                y -= 1;
                continue;
            }

            let _ = cleared.try_push(y as usize);

            // Shift rows [0, y) down by one; copy_within handles the overlap.
            for row in (1..=y as usize).rev() {
                let src_start = (row - 1) * width;
                let dst_start = row * width;
                self.cells
                    .copy_within(src_start..src_start + width, dst_start);
            }
            for cell in &mut self.cells[..width] {
                *cell = None;
            }
            // Do not advance y: the row that fell into this index may be full.
        }

        self.score += self.points_per_row * cleared.len() as u32;
        cleared
    }

    /// Points awarded for a given number of cleared rows
    pub fn points_for(&self, rows: usize) -> u32 {
        self.points_per_row * rows as u32
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Fill an entire row (test scaffolding for clear scenarios)
    pub fn fill_row(&mut self, y: i8, color: TileColor) {
        for x in 0..BOARD_WIDTH as i8 {
            self.set(x, y, Some(color));
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
        self.score = 0;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
