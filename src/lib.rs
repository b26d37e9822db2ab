//! blockfall - a terminal falling-block puzzle game.
//!
//! The interesting part lives in [`core`]: the piece/board simulation and the
//! round controller. [`term`] and [`input`] are the crossterm presentation
//! glue; [`types`] holds shared data types and the tunable [`types::GameConfig`].

pub mod core;
pub mod input;
pub mod term;
pub mod types;
