//! Core module - pure game logic with no external dependencies
//!
//! This module contains the board simulation engine: piece geometry and
//! transforms, committed-tile occupancy with collision queries and the row
//! clear cascade, and the round controller. It has zero dependencies on UI
//! or I/O and is fully deterministic from a seed.

pub mod board;
pub mod game;
pub mod piece;
pub mod rng;

// Re-export commonly used types
pub use board::Board;
pub use game::{Game, Phase, Step};
pub use piece::{shape_mask, Piece, ShapeMask};
pub use rng::SimpleRng;
