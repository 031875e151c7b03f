//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It reads board rows and the active piece;
//! it never mutates them.

use crate::core::board::LEFTMOST_BIT;
use crate::core::shapes::shape_bits;
use crate::core::GameState;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{ShapeKind, FRAME_LEN, WALL_THICKNESS};

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

/// Lightweight game renderer: board frame, filled cells, piece overlay, HUD.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell compensates for terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render the current game state into a fresh framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let config = state.board().config();
        let board_px_w = config.width() as u16 * self.cell_w;
        let board_px_h = config.height() as u16;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h);
        self.draw_cells(&mut fb, state, start_x, start_y);
        self.draw_piece(&mut fb, state, start_x, start_y);
        self.draw_hud(&mut fb, state, start_x, start_y, frame_w);

        if state.paused() {
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };

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

    /// Committed cells, read straight from the row bitmasks.
    fn draw_cells(&self, fb: &mut FrameBuffer, state: &GameState, start_x: u16, start_y: u16) {
        let board = state.board();
        let config = board.config();
        let filled = CellStyle {
            fg: Rgb::new(230, 230, 230),
            ..CellStyle::default()
        };
        let empty = CellStyle {
            fg: Rgb::new(70, 70, 80),
            ..CellStyle::default()
        };

        for py in 0..config.height() {
            let row = board.row(py + WALL_THICKNESS);
            for px in 0..config.width() {
                let bit = row & (LEFTMOST_BIT >> (px + WALL_THICKNESS));
                let (ch, style) = if bit != 0 { ('█', filled) } else { ('·', empty) };
                self.fill_cell(fb, start_x, start_y, px as u16, py as u16, ch, style);
            }
        }
    }

    /// Active piece overlay, from its frame bits.
    fn draw_piece(&self, fb: &mut FrameBuffer, state: &GameState, start_x: u16, start_y: u16) {
        let piece = state.piece();
        let shape = shape_bits(piece.kind, piece.rotation);
        let style = CellStyle {
            fg: kind_color(piece.kind),
            bold: true,
            ..CellStyle::default()
        };

        for row in 0..FRAME_LEN {
            for col in 0..FRAME_LEN {
                let bit = shape & (1u16 << (15 - (row * FRAME_LEN + col)));
                if bit == 0 {
                    continue;
                }
                // Table coordinates to playable coordinates.
                let px = piece.x as i32 + col as i32 - WALL_THICKNESS as i32;
                let py = piece.y as i32 + row as i32 - WALL_THICKNESS as i32;
                if px < 0 || py < 0 {
                    continue;
                }
                self.fill_cell(fb, start_x, start_y, px as u16, py as u16, '█', style);
            }
        }
    }

    fn fill_cell(
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
        let py = start_y + 1 + cell_y;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_hud(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::default();

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x + 8 > fb.width() {
            return;
        }

        fb.put_str(panel_x, start_y, "BEST", label);
        fb.put_str(
            panel_x,
            start_y + 1,
            &format!("{:06}", state.score_highest()),
            value,
        );
        fb.put_str(panel_x, start_y + 3, "SCORE", label);
        fb.put_str(
            panel_x,
            start_y + 4,
            &format!("{:06}", state.score_current()),
            value,
        );
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 165, 0),
            bold: true,
            ..CellStyle::default()
        };
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let y = start_y.saturating_add(frame_h / 2);
        fb.put_str(x, y, text, style);
    }
}

fn kind_color(kind: ShapeKind) -> Rgb {
    match kind {
        ShapeKind::I => Rgb::new(80, 220, 220),
        ShapeKind::O => Rgb::new(240, 220, 80),
        ShapeKind::T => Rgb::new(200, 120, 220),
        ShapeKind::S => Rgb::new(100, 220, 120),
        ShapeKind::Z => Rgb::new(220, 80, 80),
        ShapeKind::J => Rgb::new(80, 120, 220),
        ShapeKind::L => Rgb::new(255, 165, 0),
    }
}
