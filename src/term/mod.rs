//! Terminal presentation - framebuffer, renderer, and game view.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Overlay, Viewport};
pub use renderer::TerminalRenderer;
