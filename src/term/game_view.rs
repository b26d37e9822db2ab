//! GameView: maps `core::Game` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Game, Phase};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{TileColor, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Full-frame message drawn over the well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    /// Waiting for the first keypress.
    Intro,
    Paused,
    Won,
    Lost,
}

impl Overlay {
    /// Pick the overlay matching the controller phase.
    pub fn for_game(game: &Game) -> Self {
        match game.phase() {
            Phase::Ready => Overlay::Intro,
            Phase::Paused => Overlay::Paused,
            Phase::GameOver if game.won() => Overlay::Won,
            Phase::GameOver => Overlay::Lost,
            Phase::Falling => Overlay::None,
        }
    }

    fn lines(&self) -> &'static [&'static str] {
        match self {
            Overlay::None => &[],
            Overlay::Intro => &["BLOCKFALL", "press any key to start"],
            Overlay::Paused => &["PAUSED", "enter/p resumes"],
            Overlay::Won => &["YOU WIN!", "press any key to exit"],
            Overlay::Lost => &["GAME OVER", "press any key to exit"],
        }
    }
}

/// A lightweight terminal renderer for the falling-block well.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game into a framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(25, 25, 35),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        // Background for the well.
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);

        // Border.
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Committed tiles.
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                match game.board().get(x, y) {
                    Some(Some(color)) => {
                        self.draw_tile(&mut fb, start_x, start_y, x as u16, y as u16, color);
                    }
                    _ => {
                        self.draw_empty_cell(&mut fb, start_x, start_y, x as u16, y as u16);
                    }
                }
            }
        }

        // Active piece.
        if let Some(active) = game.active() {
            for (x, y) in active.cells() {
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_tile(&mut fb, start_x, start_y, x as u16, y as u16, active.color);
                }
            }
        }

        // Side panel (score/level/speed).
        self.draw_side_panel(&mut fb, game, viewport, start_x, start_y, frame_w);

        // Overlay.
        self.draw_overlay(
            &mut fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            Overlay::for_game(game),
        );

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(70, 70, 85),
            bg: Rgb::new(25, 25, 35),
            bold: false,
            dim: true,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        color: TileColor,
    ) {
        let fg = match color {
            TileColor::Red => Rgb::new(220, 80, 80),
            TileColor::Yellow => Rgb::new(240, 220, 80),
            TileColor::Blue => Rgb::new(80, 120, 220),
        };
        let style = CellStyle {
            fg,
            bg: Rgb::new(25, 25, 35),
            bold: true,
            dim: false,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        game: &Game,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let hint = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", game.score()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", game.level()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{} ms", game.drop_interval_ms()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "GOAL", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", game.config().win_score), value);
        y = y.saturating_add(3);

        for line in [
            "←/→  move",
            "↑    spin",
            "↓    drop",
            "p    pause",
            "q    quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        overlay: Overlay,
    ) {
        let lines = overlay.lines();
        if lines.is_empty() {
            return;
        }
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let mid_y = start_y.saturating_add(frame_h / 2).saturating_sub(1);
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, mid_y.saturating_add(i as u16 * 2), text, style);
        }
    }
}
