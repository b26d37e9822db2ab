//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions in cells
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 25;

/// The seven block shapes
///
/// Names follow the classic layout: `Flat` is the 4-wide bar, `Box` the 2x2
/// square, the Z/L variants come in left- and right-handed forms, `Tee` is the
/// three-plus-one shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Flat,
    Box,
    RightZ,
    LeftZ,
    RightL,
    LeftL,
    Tee,
}

/// All shapes, in a fixed order (used by the RNG and by exhaustive tests).
pub const ALL_SHAPES: [ShapeKind; 7] = [
    ShapeKind::Flat,
    ShapeKind::Box,
    ShapeKind::RightZ,
    ShapeKind::LeftZ,
    ShapeKind::RightL,
    ShapeKind::LeftL,
    ShapeKind::Tee,
];

impl ShapeKind {
    /// Parse shape kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "flat" => Some(ShapeKind::Flat),
            "box" => Some(ShapeKind::Box),
            "rightz" => Some(ShapeKind::RightZ),
            "leftz" => Some(ShapeKind::LeftZ),
            "rightl" => Some(ShapeKind::RightL),
            "leftl" => Some(ShapeKind::LeftL),
            "tee" => Some(ShapeKind::Tee),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Flat => "flat",
            ShapeKind::Box => "box",
            ShapeKind::RightZ => "rightz",
            ShapeKind::LeftZ => "leftz",
            ShapeKind::RightL => "rightl",
            ShapeKind::LeftL => "leftl",
            ShapeKind::Tee => "tee",
        }
    }
}

/// Cosmetic tile palette. Chosen at random per piece; no gameplay effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileColor {
    Red,
    Yellow,
    Blue,
}

pub const PALETTE: [TileColor; 3] = [TileColor::Red, TileColor::Yellow, TileColor::Blue];

/// Orientation parity: a piece is either in its spawn orientation or turned.
///
/// Only two orientations exist per shape; a spin toggles between them, so two
/// spins are the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Spawn,
    Turned,
}

impl Orientation {
    pub fn toggled(&self) -> Self {
        match self {
            Orientation::Spawn => Orientation::Turned,
            Orientation::Turned => Orientation::Spawn,
        }
    }
}

/// Discrete input events consumed by the round controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    Pause,
    Quit,
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::MoveLeft => "moveLeft",
            GameEvent::MoveRight => "moveRight",
            GameEvent::SoftDrop => "softDrop",
            GameEvent::Rotate => "rotate",
            GameEvent::Pause => "pause",
            GameEvent::Quit => "quit",
        }
    }
}

/// Cell on the board (None = empty, Some = committed tile of that color)
pub type Cell = Option<TileColor>;

/// Tunable rules. The reference values are defaults, not hardcoded literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Points awarded per cleared row.
    pub points_per_row: u32,
    /// Speed-up/level-up every time the score crosses a multiple of this.
    pub speed_up_step: u32,
    /// Drop interval is multiplied by this percentage on each speed-up.
    pub speed_up_percent: u32,
    /// Reaching this score ends the game as a win.
    pub win_score: u32,
    /// Starting gravity interval in milliseconds.
    pub base_drop_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            points_per_row: 10,
            speed_up_step: 100,
            speed_up_percent: 90,
            win_score: 2000,
            base_drop_ms: 650,
        }
    }
}
