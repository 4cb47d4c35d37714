//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{ShapeKind, GRID_HEIGHT, GRID_WIDTH};

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

/// Maps engine state to styled terminal cells.
pub struct GameView {
    /// Playfield cell width in terminal columns.
    cell_w: u16,
    /// Playfield cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
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

    /// Render the current game state into a framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let field_w = (GRID_WIDTH as u16) * self.cell_w;
        let field_h = (GRID_HEIGHT as u16) * self.cell_h;
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + SIDE_PANEL_W) / 2;
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

        fb.fill_rect(start_x + 1, start_y + 1, field_w, field_h, ' ', bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Settled cells.
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                match state.grid().get(x, y) {
                    Some(Some(kind)) => {
                        self.draw_field_cell(&mut fb, start_x, start_y, x as u16, y as u16, kind)
                    }
                    _ => self.draw_empty_cell(&mut fb, start_x, start_y, x as u16, y as u16),
                }
            }
        }

        // Falling piece; cells above the top edge are simply not drawn.
        let piece = state.current();
        for &(x, y) in piece.cells().iter() {
            if x >= 0 && x < GRID_WIDTH && y >= 0 && y < GRID_HEIGHT {
                self.draw_field_cell(&mut fb, start_x, start_y, x as u16, y as u16, piece.kind);
            }
        }

        self.draw_side_panel(&mut fb, state, start_x + frame_w + 2, start_y);

        if state.game_over() {
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }

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
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(25, 25, 35),
            bold: false,
            dim: true,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_field_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: ShapeKind,
    ) {
        let style = CellStyle {
            fg: kind_color(kind),
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
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        fb.fill_rect(
            start_x + 1 + x * self.cell_w,
            start_y + 1 + y * self.cell_h,
            self.cell_w,
            self.cell_h,
            ch,
            style,
        );
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, state: &GameState, x: u16, y: u16) {
        let label = CellStyle {
            fg: Rgb::new(160, 160, 170),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(230, 230, 230),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };

        fb.put_str(x, y + 1, "SCORE", label);
        fb.put_str(x, y + 2, &state.score().to_string(), value);

        fb.put_str(x, y + 4, "NEXT", label);
        let next_style = CellStyle {
            fg: kind_color(state.next()),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let mask = state.next().base_mask();
        for (r, row) in mask.iter().enumerate() {
            for (c, &filled) in row.iter().enumerate() {
                if filled {
                    fb.fill_rect(
                        x + (c as u16) * self.cell_w,
                        y + 5 + r as u16,
                        self.cell_w,
                        1,
                        '█',
                        next_style,
                    );
                }
            }
        }
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
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(120, 30, 30),
            bold: true,
            dim: false,
        };
        let tx = start_x + frame_w.saturating_sub(text.len() as u16) / 2;
        let ty = start_y + frame_h / 2;
        fb.put_str(tx, ty, text, style);
    }
}

/// Width reserved for the score/next panel to the right of the playfield.
const SIDE_PANEL_W: u16 = 12;

fn kind_color(kind: ShapeKind) -> Rgb {
    match kind {
        ShapeKind::I => Rgb::new(90, 210, 220),
        ShapeKind::O => Rgb::new(235, 215, 90),
        ShapeKind::T => Rgb::new(190, 120, 215),
        ShapeKind::S => Rgb::new(110, 215, 120),
        ShapeKind::Z => Rgb::new(215, 90, 90),
        ShapeKind::J => Rgb::new(90, 130, 215),
        ShapeKind::L => Rgb::new(240, 160, 60),
    }
}
